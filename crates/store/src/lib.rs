//! Persistence for the ArqDesign project store: key-value backends,
//! repositories, backup import/export and async view models.

use std::path::Path;
use std::sync::Arc;

pub mod backup;
pub mod keys;
pub mod kv;
pub mod repositories;
pub mod stats;
pub mod view_model;

pub use kv::{FileStore, KeyValueStore, MemoryStore};

/// Store handle shared between view models and callers.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Open a directory-backed store, creating the directory if needed.
pub fn open_file_store(data_dir: &Path) -> Result<SharedStore, arqdesign_core::error::CoreError> {
    let store = FileStore::open(data_dir)?;
    Ok(Arc::new(store))
}
