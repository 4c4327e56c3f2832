use crate::{TEST_KEY, context_for};

use nls_planner::cli::{Command, KeyCommand};
use nls_planner::commands;
use nls_planner::error::PlannerError;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(
    command: Command,
    context: &nls_planner::context::PlannerContext,
    stdin: &str,
) -> (Result<(), PlannerError>, String) {
    let mut input = stdin.as_bytes();
    let mut out = Vec::new();
    let result = commands::run(command, context, &mut input, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

/// **VALUE**: set, status and remove work together across invocations.
///
/// **WHY THIS MATTERS**: Each CLI call is a fresh process; the only shared
/// state is storage.json in the data dir.
#[tokio::test]
async fn given_accepted_key_when_setting_then_status_shows_it_until_removed() {
    // GIVEN: A provider accepting the key
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
        .expect(1)
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let context = context_for(&server, temp.path());

    // WHEN: Setting the key from stdin
    let (result, out) = run(Command::Key(KeyCommand::Set { key: None }), &context, &format!("{TEST_KEY}\n")).await;

    // THEN: Saved, with only the masked key printed
    result.unwrap();
    assert!(out.starts_with("API key verified and saved (AIza"));
    assert!(!out.contains(TEST_KEY));

    // AND: Status reports it without probing again
    let (result, out) = run(Command::Key(KeyCommand::Status), &context, "").await;
    result.unwrap();
    assert!(out.starts_with("API key: stored"));

    // AND: Remove clears it
    let (result, out) = run(Command::Key(KeyCommand::Remove), &context, "").await;
    result.unwrap();
    assert_eq!(out, "API key removed\n");

    let (_, out) = run(Command::Key(KeyCommand::Status), &context, "").await;
    assert!(out.starts_with("API key: not set"));
}

#[tokio::test]
async fn given_rejected_key_when_setting_then_credential_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let context = context_for(&server, temp.path());

    let (result, _) = run(
        Command::Key(KeyCommand::Set { key: Some(TEST_KEY.to_string()) }),
        &context,
        "",
    )
    .await;

    let error = result.unwrap_err();
    assert!(matches!(error, PlannerError::Credential { .. }));
    assert_eq!(
        error.user_message(),
        "API key is not valid. Please check it and try again."
    );
    assert!(!temp.path().join("storage.json").exists());
}

#[tokio::test]
async fn given_malformed_key_when_setting_then_no_request_is_made() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let context = context_for(&server, temp.path());

    let (result, _) = run(
        Command::Key(KeyCommand::Set { key: Some(String::from("AIza-short")) }),
        &context,
        "",
    )
    .await;

    let error = result.unwrap_err();
    assert!(error.user_message().contains("does not look like a Gemini API key"));
}
