mod config_command;
mod generate_command;
mod key_command;

use nls_planner::context::PlannerContext;

use planner_core::config::PlannerConfig;

use std::path::Path;

use wiremock::MockServer;

/// A key that passes the format check.
pub const TEST_KEY: &str = "AIzaSyD-cli-test-key-0123456789abcd";

/// Context pointing at a mock provider with its data and config kept in
/// `data_dir`.
pub fn context_for(server: &MockServer, data_dir: &Path) -> PlannerContext {
    let mut config = PlannerConfig::default();
    config.gemini.api_base_url = format!("{}/v1beta", server.uri());
    config.gemini.request_timeout_secs = 5;
    config.storage.data_dir = Some(data_dir.to_path_buf());
    PlannerContext::from_config(data_dir.to_path_buf(), config).unwrap()
}
