//! JSON-file key-value store.
//!
//! Entries live in one `storage.json` object. Writes go through a temp file
//! and a rename so a crash never leaves a half-written store behind.

use super::KeyValueStore;
use crate::error::StorageError;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, info};

const STORAGE_FILE_NAME: &str = "storage.json";

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles from this handle.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Store backed by `{dir}/storage.json`. The directory is created lazily
    /// on first write.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(STORAGE_FILE_NAME),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No storage file at {}", self.path.display());
                return Ok(Entries::new());
            }
            Err(e) => return Err(StorageError::read(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|e| StorageError::parse(&self.path, e.to_string()))
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| StorageError::write(dir, e))?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::serialize(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(|e| StorageError::write(&temp_path, e))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| StorageError::write(&self.path, e))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;

        info!("Stored '{}' in {}", key, self.path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            debug!("'{}' not present in {}, nothing to remove", key, self.path.display());
            return Ok(());
        }
        self.write_entries(&entries)?;

        info!("Removed '{}' from {}", key, self.path.display());
        Ok(())
    }
}
