//! Storage usage summary.

use serde::Serialize;

use crate::types::Timestamp;

/// Snapshot of what the store currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub projects_count: usize,
    pub has_user_profile: bool,
    /// Approximate bytes used: stored characters (UTF-16 units) times two.
    pub storage_used: usize,
    /// Most recent project creation time, `None` when there are no projects.
    pub last_modified: Option<Timestamp>,
}

/// Approximate in-storage size of a set of stored strings, counting two
/// bytes per UTF-16 code unit.
pub fn estimate_bytes<'a>(values: impl IntoIterator<Item = &'a str>) -> usize {
    values
        .into_iter()
        .map(|v| v.encode_utf16().count() * 2)
        .sum()
}
