use arqdesign_core::stats::{estimate_bytes, StorageStats};

use crate::keys::{PROJECTS_KEY, USER_PROFILE_KEY};
use crate::kv::KeyValueStore;
use crate::repositories::{ProfileRepo, ProjectRepo};

/// Summarize what the store holds. Never fails: unreadable keys count as
/// empty.
pub fn storage_stats(store: &dyn KeyValueStore) -> StorageStats {
    let projects = ProjectRepo::list(store);
    let raw = |key: &str| store.get(key).ok().flatten().unwrap_or_default();
    let projects_raw = raw(PROJECTS_KEY);
    let profile_raw = raw(USER_PROFILE_KEY);

    StorageStats {
        projects_count: projects.len(),
        has_user_profile: ProfileRepo::get(store).is_some(),
        storage_used: estimate_bytes([projects_raw.as_str(), profile_raw.as_str()]),
        last_modified: projects.iter().map(|p| p.created_at).max(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn empty_store() {
        assert_eq!(storage_stats(&MemoryStore::new()), StorageStats::default());
    }

    #[test]
    fn reports_latest_creation_time_and_size() {
        let store = MemoryStore::new();
        let raw = r#"[{"id":"a","clientName":"Ana Costa","createdAt":"2024-01-02T00:00:00.000Z"},{"id":"b","clientName":"Rui Lopes","createdAt":"2024-01-05T00:00:00.000Z"}]"#;
        store.set(PROJECTS_KEY, raw).unwrap();
        store.set(USER_PROFILE_KEY, r#"{"name":"Ana","email":""}"#).unwrap();

        let stats = storage_stats(&store);
        assert_eq!(stats.projects_count, 2);
        assert!(stats.has_user_profile);
        assert_eq!(stats.storage_used, (raw.len() + 25) * 2);
        assert_eq!(
            stats.last_modified,
            Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap())
        );
    }
}
