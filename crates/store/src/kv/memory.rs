use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use arqdesign_core::error::CoreError;
use arqdesign_core::stats::estimate_bytes;

use super::KeyValueStore;

/// In-memory backend, optionally capped to emulate a storage quota.
///
/// The quota is measured like browser local storage: two bytes per UTF-16
/// unit over every key and value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes pushing total usage above `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, CoreError> {
        self.entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.lock()?;

        if let Some(quota) = self.quota_bytes {
            let others = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .flat_map(|(k, v)| [k.as_str(), v.as_str()]);
            let used = estimate_bytes(others.chain([key, value]));
            if used > quota {
                return Err(CoreError::Storage(format!(
                    "quota exceeded: writing '{key}' needs {used} bytes, limit is {quota}"
                )));
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
