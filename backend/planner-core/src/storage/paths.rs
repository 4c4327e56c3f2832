//! Platform-aware detection of the planner's data directory.
//!
//! Lookup order:
//! 1. Explicit override from config (`storage.data_dir`)
//! 2. Platform-specific data directory via `dirs` crate
//! 3. `$HOME/.local/share` fallback on Linux
//!
//! Returns Result, never silently falls back to a wrong path.

use crate::APP_DIR_NAME;
use crate::error::StorageError;

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct DataDir {
    pub path: PathBuf,
    pub source: PathSource,
}

/// How the path was determined (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    ConfigOverride,
    PlatformDefault,
    HomeFallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::ConfigOverride => write!(f, "config override"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::HomeFallback => write!(f, "home fallback"),
        }
    }
}

/// Resolve the directory holding `storage.json` and the log file.
///
/// # Errors
/// Returns `StorageError::DirectoryNotFound` if no path can be determined.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<DataDir, StorageError> {
    if let Some(dir) = override_dir {
        info!("Using configured data dir: {}", dir.display());
        return Ok(DataDir {
            path: dir.to_path_buf(),
            source: PathSource::ConfigOverride,
        });
    }

    if let Some(data_dir) = dirs::data_local_dir() {
        let path = data_dir.join(APP_DIR_NAME);
        debug!("Platform data dir: {}", path.display());
        return Ok(DataDir {
            path,
            source: PathSource::PlatformDefault,
        });
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".local/share").join(APP_DIR_NAME);
            warn!("Using home fallback data dir: {}", path.display());
            return Ok(DataDir {
                path,
                source: PathSource::HomeFallback,
            });
        }
    }

    Err(StorageError::directory_not_found(
        "Cannot determine a data directory. Set storage.data_dir in config.json.",
    ))
}
