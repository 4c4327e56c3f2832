use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use thiserror::Error as ThisError;

/// Failures of the local key-value store.
#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("Storage Read Error: {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Storage Parse Error: {path}: {reason} {location}")]
    Parse {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Storage Write Error: {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Storage Serialization Error: {reason} {location}")]
    Serialize {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Storage Directory Not Found: {message} {location}")]
    DirectoryNotFound {
        message: String,
        location: ErrorLocation,
    },
}

impl StorageError {
    #[track_caller]
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        StorageError::Read {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn parse(path: &Path, reason: impl Into<String>) -> Self {
        StorageError::Parse {
            path: path.to_path_buf(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write(path: &Path, source: std::io::Error) -> Self {
        StorageError::Write {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialize(reason: impl Into<String>) -> Self {
        StorageError::Serialize {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn directory_not_found(message: impl Into<String>) -> Self {
        StorageError::DirectoryNotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_category(&self) -> &'static str {
        match self {
            StorageError::Read { .. } => "read",
            StorageError::Parse { .. } => "parse",
            StorageError::Write { .. } => "write",
            StorageError::Serialize { .. } => "serialize",
            StorageError::DirectoryNotFound { .. } => "directory_not_found",
        }
    }
}
