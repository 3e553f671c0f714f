/// Project identifiers are opaque strings generated at creation time.
pub type ProjectId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Current UTC time truncated to whole milliseconds.
///
/// Persisted timestamps carry millisecond precision, so truncating at the
/// source keeps a freshly created record equal to its re-read copy.
pub fn now_millis() -> Timestamp {
    let now = chrono::Utc::now();
    chrono::DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// Serde adapter writing timestamps as ISO-8601 strings with millisecond
/// precision and a `Z` suffix (`2024-03-01T12:30:00.000Z`).
///
/// Deserialization accepts any RFC 3339 string and converts it to UTC. A
/// bare `YYYY-MM-DD` date reads as midnight UTC.
pub mod iso_millis {
    use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Timestamp;

    pub fn serialize<S>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            Err(err) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
                .ok_or_else(|| serde::de::Error::custom(err)),
        }
    }
}
