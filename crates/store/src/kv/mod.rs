//! String-keyed persistent storage.
//!
//! The repositories never touch a concrete backend; they are handed a
//! [`KeyValueStore`] so the same code runs against a directory on disk or an
//! in-memory map in tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use arqdesign_core::error::CoreError;

/// Minimal get/set/remove contract over string values.
///
/// Writes are last-write-wins; nothing coordinates two handles that point at
/// the same underlying storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}
