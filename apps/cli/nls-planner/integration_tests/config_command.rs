use crate::context_for;

use nls_planner::cli::{Command, ConfigCommand, ConfigSetArgs};
use nls_planner::commands;
use nls_planner::context::PlannerContext;

use planner_core::config::PlannerConfig;

use tempfile::TempDir;
use wiremock::MockServer;

/// **VALUE**: A value written by `config set` is what the next invocation
/// loads.
///
/// **BUG THIS CATCHES**: Saving to a different directory than the one
/// `PlannerContext::load` reads from.
#[tokio::test]
async fn given_config_set_when_loading_next_context_then_new_values_apply() {
    // GIVEN
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let context = context_for(&server, temp.path());

    let command = Command::Config(ConfigCommand::Set(ConfigSetArgs {
        model: Some("gemini-2.5-pro".to_string()),
        request_timeout_secs: Some(45),
        ..ConfigSetArgs::default()
    }));

    // WHEN
    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    commands::run(command, &context, &mut input, &mut out)
        .await
        .unwrap();

    // THEN: a fresh context sees the saved values and keeps the mock URL
    let reloaded = PlannerContext::load(Some(temp.path())).unwrap();
    assert_eq!(reloaded.config.gemini.model, "gemini-2.5-pro");
    assert_eq!(reloaded.config.gemini.request_timeout_secs, 45);
    assert_eq!(
        reloaded.config.gemini.api_base_url,
        context.config.gemini.api_base_url
    );
    assert_eq!(reloaded.data_dir.path, context.data_dir.path);

    let on_disk = PlannerConfig::load(temp.path()).unwrap();
    assert_eq!(on_disk, reloaded.config);
}
