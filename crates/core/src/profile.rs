//! User profile model. At most one profile is stored; absence is valid.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    /// Empty when the user has not supplied an address. A missing or
    /// `null` value reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Borrowed view of a possibly incomplete profile, as accepted by
/// [`crate::validation::validate_user_profile`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialProfile<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub photo: Option<&'a str>,
}

impl<'a> From<&'a UserProfile> for PartialProfile<'a> {
    fn from(profile: &'a UserProfile) -> Self {
        Self {
            name: Some(&profile.name),
            email: Some(&profile.email),
            photo: profile.photo.as_deref(),
        }
    }
}

impl<'a> PartialProfile<'a> {
    /// Read whichever profile fields are present as strings in a raw JSON
    /// object. Non-string values are treated as absent.
    pub fn from_json(value: &'a serde_json::Value) -> Self {
        let field = |key: &str| value.get(key).and_then(serde_json::Value::as_str);
        Self {
            name: field("name"),
            email: field("email"),
            photo: field("photo"),
        }
    }
}
