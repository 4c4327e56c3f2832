//! Planner configuration (`config.json`).
//!
//! Missing file means defaults. A present but unreadable or invalid file
//! is an error so a typo never silently points requests elsewhere.

use crate::error::config::ConfigError;
use crate::{APP_DIR_NAME, DEFAULT_GEMINI_MODEL, GEMINI_API_BASE_URL};

use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory for `storage.json` and logs.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            gemini: GeminiConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_api_base_url() -> String {
    GEMINI_API_BASE_URL.to_string()
}
fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}
fn default_request_timeout_secs() -> u64 {
    120
}

// ============================================
// IMPLEMENTATION
// ============================================

impl PlannerConfig {
    /// Platform config directory for the planner, e.g. `~/.config/nls-planner`.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Read `{config_dir}/config.json`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// A file that exists but cannot be read, parsed or validated is an
    /// error rather than a silent fallback.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let contents = match std::fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config at {}, using defaults", config_path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                info!("Failed to read config file: {}", e);
                return Err(ConfigError::read(&config_path, e));
            }
        };

        let config: PlannerConfig = serde_json::from_str(&contents).map_err(|e| {
            info!("Failed to parse config JSON: {}", e);
            ConfigError::parse(&config_path, e.to_string())
        })?;

        config.validate()?;

        info!(
            "Config loaded from {} (model {})",
            config_path.display(),
            config.gemini.model
        );
        Ok(config)
    }

    /// Validate, then write `{config_dir}/config.json` via a temp file and a
    /// rename.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::write(config_dir, e))?;

        let json =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::serialize(e.to_string()))?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_path.with_extension("json.tmp");

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::write(&temp_path, e))?;
        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::write(&config_path, e))?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::validation(format!(
                "Invalid version: {} (expected 1-{})",
                self.version, CONFIG_VERSION
            )));
        }

        let url = &self.gemini.api_base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::validation(format!(
                "Invalid gemini.api_base_url: {}",
                url
            )));
        }

        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::validation("gemini.model cannot be empty"));
        }

        let timeout = self.gemini.request_timeout_secs;
        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS).contains(&timeout) {
            return Err(ConfigError::validation(format!(
                "Invalid gemini.request_timeout_secs: {} (must be {}-{})",
                timeout, MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS
            )));
        }

        if let Some(dir) = &self.storage.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::validation("storage.data_dir cannot be empty"));
            }
        }

        Ok(())
    }
}
