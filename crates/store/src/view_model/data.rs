use arqdesign_core::error::CoreError;
use arqdesign_core::export::{backup_file_name, ImportSummary};
use arqdesign_core::stats::StorageStats;

use crate::backup::{clear_all, export_all, import_all};
use crate::stats::storage_stats;
use crate::SharedStore;

/// A backup ready to be handed to the user as a download.
#[derive(Debug, Clone)]
pub struct BackupFile {
    pub file_name: String,
    pub contents: String,
}

/// Export, import and reset actions over the whole store.
pub struct DataViewModel {
    store: SharedStore,
    is_loading: bool,
    error: Option<String>,
}

impl DataViewModel {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            is_loading: false,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn export(&mut self) -> Result<BackupFile, CoreError> {
        self.is_loading = true;
        let result = export_all(self.store.as_ref()).map(|contents| BackupFile {
            file_name: backup_file_name(chrono::Utc::now().date_naive()),
            contents,
        });
        self.finish(result)
    }

    pub async fn import(&mut self, contents: &str) -> Result<ImportSummary, CoreError> {
        self.is_loading = true;
        let result = import_all(self.store.as_ref(), contents);
        self.finish(result)
    }

    pub async fn clear(&mut self) -> Result<(), CoreError> {
        self.is_loading = true;
        let result = clear_all(self.store.as_ref());
        self.finish(result)
    }

    fn finish<T>(&mut self, result: Result<T, CoreError>) -> Result<T, CoreError> {
        self.is_loading = false;
        self.error = result.as_ref().err().map(ToString::to_string);
        result
    }
}

/// Storage usage summary with a manual refresh.
pub struct StorageInfoViewModel {
    store: SharedStore,
    info: StorageStats,
}

impl StorageInfoViewModel {
    pub async fn new(store: SharedStore) -> Self {
        let info = storage_stats(store.as_ref());
        Self { store, info }
    }

    pub fn info(&self) -> &StorageStats {
        &self.info
    }

    pub async fn refresh(&mut self) {
        self.info = storage_stats(self.store.as_ref());
    }
}
