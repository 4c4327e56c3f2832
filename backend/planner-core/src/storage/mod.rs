//! Local key-value persistence.
//!
//! The credential store only ever needs `get`/`set`/`remove` on a single
//! key, so the backend is a small trait. [`MemoryStore`] serves tests and
//! ephemeral sessions; [`FileStore`] keeps entries in a JSON object on disk.

pub mod file;
pub mod memory;
pub mod paths;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Single-origin string key-value store.
///
/// `set` overwrites, `remove` on a missing key succeeds. Implementations use
/// interior mutability so one handle can be shared.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
