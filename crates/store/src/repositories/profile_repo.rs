//! Repository for the singleton user profile.

use arqdesign_core::error::CoreError;
use arqdesign_core::profile::{PartialProfile, UserProfile};
use arqdesign_core::validation::{ensure_valid, validate_user_profile};

use crate::keys::USER_PROFILE_KEY;
use crate::kv::KeyValueStore;

pub struct ProfileRepo;

impl ProfileRepo {
    /// The stored profile, or `None` when no profile has been saved or the
    /// stored value cannot be read (logged).
    pub fn get(store: &dyn KeyValueStore) -> Option<UserProfile> {
        let raw = match store.get(USER_PROFILE_KEY) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read user profile from storage");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::error!(error = %e, "Stored user profile is unreadable");
                None
            }
        }
    }

    /// Validate and overwrite the stored profile.
    pub fn save(store: &dyn KeyValueStore, profile: &UserProfile) -> Result<(), CoreError> {
        ensure_valid(validate_user_profile(&PartialProfile::from(profile)))?;
        Self::write(store, profile)?;
        tracing::debug!("User profile saved");
        Ok(())
    }

    pub(crate) fn write(store: &dyn KeyValueStore, profile: &UserProfile) -> Result<(), CoreError> {
        let json = serde_json::to_string(profile)
            .map_err(|e| CoreError::Format(format!("cannot serialize profile: {e}")))?;
        store.set(USER_PROFILE_KEY, &json)
    }
}
