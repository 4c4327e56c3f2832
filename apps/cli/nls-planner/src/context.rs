//! Wiring of config, storage and the Gemini client for one invocation.

use crate::error::PlannerError;

use planner_core::config::PlannerConfig;
use planner_core::credential::CredentialStore;
use planner_core::gemini_client::GeminiClient;
use planner_core::pipeline::LessonPipeline;
use planner_core::storage::FileStore;
use planner_core::storage::paths::{DataDir, resolve_data_dir};

use std::path::{Path, PathBuf};

use log::debug;

pub type PlannerCredentialStore = CredentialStore<FileStore, GeminiClient>;

#[derive(Clone)]
pub struct PlannerContext {
    pub config: PlannerConfig,
    pub config_dir: PathBuf,
    pub data_dir: DataDir,
    client: GeminiClient,
}

impl PlannerContext {
    /// Load config from `config_dir` (or the platform default) and resolve
    /// the data directory.
    pub fn load(config_dir: Option<&Path>) -> Result<Self, PlannerError> {
        let config_dir: PathBuf = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => PlannerConfig::default_dir().ok_or_else(|| {
                PlannerError::planner("Cannot determine config directory; pass --config-dir")
            })?,
        };
        debug!("Config dir: {}", config_dir.display());

        let config = PlannerConfig::load(&config_dir).inspect_err(|e| {
            debug!("Config rejected ({}): {}", e.error_category(), e);
        })?;
        Self::from_config(config_dir, config)
    }

    pub fn from_config(config_dir: PathBuf, config: PlannerConfig) -> Result<Self, PlannerError> {
        let data_dir = resolve_data_dir(config.storage.data_dir.as_deref())?;
        debug!("Data dir ({}): {}", data_dir.source, data_dir.path.display());

        let client = GeminiClient::from_config(&config.gemini)?;

        Ok(Self {
            config,
            config_dir,
            data_dir,
            client,
        })
    }

    pub fn credential_store(&self) -> PlannerCredentialStore {
        CredentialStore::new(FileStore::in_dir(&self.data_dir.path), self.client.clone())
    }

    pub fn pipeline(&self) -> LessonPipeline<GeminiClient> {
        LessonPipeline::new(self.client.clone()).with_model_id(self.config.gemini.model.clone())
    }
}
