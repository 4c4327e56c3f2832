use crate::{TEST_KEY, context_for};

use nls_planner::cli::{Command, GenerateArgs};
use nls_planner::commands;
use nls_planner::error::PlannerError;

use planner_core::CREDENTIAL_STORAGE_KEY;
use planner_core::storage::{FileStore, KeyValueStore};

use std::path::Path;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash-exp:generateContent";

fn generate_args(dir: &Path) -> GenerateArgs {
    let content_file = dir.join("lesson.txt");
    std::fs::write(&content_file, "Lesson body").unwrap();

    GenerateArgs {
        textbook: String::from("Kết nối tri thức"),
        subject: String::from("Toán"),
        grade: String::from("5"),
        content_file,
        distribution_file: None,
        analyze_only: false,
        detailed_report: false,
        output: None,
    }
}

fn store_key(dir: &Path) {
    FileStore::in_dir(dir)
        .set(CREDENTIAL_STORAGE_KEY, TEST_KEY)
        .unwrap();
}

/// **VALUE**: End-to-end: stored key, lesson file in, model text on stdout.
#[tokio::test]
async fn given_stored_key_when_generating_then_model_text_is_printed() {
    // GIVEN: A stored key and a provider answering with marked-up text
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Lesson body <u>NLS</u>" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    store_key(temp.path());
    let context = context_for(&server, temp.path());
    let args = generate_args(temp.path());

    // WHEN: Running generate
    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    commands::run(Command::Generate(args), &context, &mut input, &mut out)
        .await
        .unwrap();

    // THEN: The text followed by a newline
    assert_eq!(String::from_utf8(out).unwrap(), "Lesson body <u>NLS</u>\n");
}

#[tokio::test]
async fn given_output_path_when_generating_then_text_is_written_to_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Phân tích" }] } }]
        })))
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    store_key(temp.path());
    let context = context_for(&server, temp.path());
    let mut args = generate_args(temp.path());
    let output = temp.path().join("result.txt");
    args.output = Some(output.clone());
    args.analyze_only = true;

    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    commands::run(Command::Generate(args), &context, &mut input, &mut out)
        .await
        .unwrap();

    assert!(out.is_empty());
    assert_eq!(std::fs::read_to_string(output).unwrap(), "Phân tích");
}

/// **VALUE**: Verifies generation without a stored key fails fast.
#[tokio::test]
async fn given_no_stored_key_when_generating_then_credential_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let context = context_for(&server, temp.path());

    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    let error = commands::run(
        Command::Generate(generate_args(temp.path())),
        &context,
        &mut input,
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(error, PlannerError::Generation(_)));
    assert_eq!(
        error.user_message(),
        "No API key configured. Add your Gemini API key first."
    );
}

#[tokio::test]
async fn given_quota_exhausted_when_generating_then_quota_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "You exceeded your current quota.", "status": "RESOURCE_EXHAUSTED" }
        })))
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    store_key(temp.path());
    let context = context_for(&server, temp.path());

    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    let error = commands::run(
        Command::Generate(generate_args(temp.path())),
        &context,
        &mut input,
        &mut out,
    )
    .await
    .unwrap_err();

    assert_eq!(
        error.user_message(),
        "API key has exceeded its usage quota. Please try again later."
    );
}
