use crate::cli::ConfigSetArgs;
use crate::error::PlannerError;

use planner_core::config::PlannerConfig;

use std::io::Write;
use std::path::Path;

use log::info;

pub fn show(config: &PlannerConfig, out: &mut impl Write) -> Result<(), PlannerError> {
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| PlannerError::planner(format!("Cannot render config: {e}")))?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Apply the given values on top of `current` and save to `config_dir`.
///
/// Validation runs before anything is written, so a bad value leaves the
/// existing file untouched.
pub fn set(
    config_dir: &Path,
    current: &PlannerConfig,
    args: &ConfigSetArgs,
    out: &mut impl Write,
) -> Result<PlannerConfig, PlannerError> {
    let mut updated = current.clone();

    if let Some(url) = &args.api_base_url {
        updated.gemini.api_base_url = url.clone();
    }
    if let Some(model) = &args.model {
        updated.gemini.model = model.clone();
    }
    if let Some(timeout) = args.request_timeout_secs {
        updated.gemini.request_timeout_secs = timeout;
    }
    if let Some(dir) = &args.data_dir {
        updated.storage.data_dir = Some(dir.clone());
    }

    updated.save(config_dir)?;
    info!("Config updated in {}", config_dir.display());
    writeln!(out, "Config saved to {}", config_dir.join("config.json").display())?;

    Ok(updated)
}
