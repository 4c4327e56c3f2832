// LessonPipeline over the real HTTP client and a mock provider

use crate::{TEST_KEY, base_url};

use planner_core::error::GenerationErrorKind;
use planner_core::gemini_client::GeminiClient;
use planner_core::pipeline::LessonPipeline;
use planner_core::prompt::SYSTEM_INSTRUCTION;

use common::RedactedApiKey;
use models::{LessonInfo, ProcessingOptions};

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.0-flash-exp:generateContent";

fn lesson() -> LessonInfo {
    LessonInfo::builder()
        .with_textbook("Kết nối tri thức")
        .with_subject("Toán")
        .with_grade("5")
        .with_content("Lesson body")
        .build()
        .unwrap()
}

async fn pipeline_answering(server: &MockServer, response: ResponseTemplate) -> LessonPipeline<GeminiClient> {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(response)
        .mount(server)
        .await;
    LessonPipeline::new(GeminiClient::new(&base_url(server)).unwrap())
}

async fn run(pipeline: &LessonPipeline<GeminiClient>) -> Result<String, planner_core::error::GenerationError> {
    pipeline
        .generate(
            &lesson(),
            &ProcessingOptions::default(),
            Some(&RedactedApiKey::new(TEST_KEY.to_string())),
        )
        .await
}

/// **VALUE**: End-to-end success: fixed system instruction on the wire and
/// the model's text returned byte-for-byte.
#[tokio::test]
async fn given_model_answers_when_generating_then_text_is_returned_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", TEST_KEY))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Lesson body <u>NLS</u>" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let pipeline = LessonPipeline::new(GeminiClient::new(&base_url(&server)).unwrap());

    assert_eq!(run(&pipeline).await.unwrap(), "Lesson body <u>NLS</u>");
}

#[tokio::test]
async fn given_quota_exhausted_when_generating_then_quota_exceeded() {
    let server = MockServer::start().await;
    let pipeline = pipeline_answering(
        &server,
        ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "You exceeded your current quota.", "status": "RESOURCE_EXHAUSTED" }
        })),
    )
    .await;

    let error = run(&pipeline).await.unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::QuotaExceeded);
}

#[tokio::test]
async fn given_invalid_key_when_generating_then_invalid_credential() {
    let server = MockServer::start().await;
    let pipeline = pipeline_answering(
        &server,
        ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT" }
        })),
    )
    .await;

    let error = run(&pipeline).await.unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::InvalidCredential);
}

#[tokio::test]
async fn given_prompt_blocked_for_safety_when_generating_then_content_policy_violation() {
    let server = MockServer::start().await;
    let pipeline = pipeline_answering(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })),
    )
    .await;

    let error = run(&pipeline).await.unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::ContentPolicyViolation);
}

/// **VALUE**: Verifies unrecognised server failures surface the provider's
/// own words to the user.
#[tokio::test]
async fn given_server_error_when_generating_then_unknown_provider_with_upstream_text() {
    let server = MockServer::start().await;
    let pipeline = pipeline_answering(
        &server,
        ResponseTemplate::new(500).set_body_string("internal failure"),
    )
    .await;

    let error = run(&pipeline).await.unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::UnknownProvider);
    assert_eq!(error.user_message(), "[500] internal failure");
}

#[tokio::test]
async fn given_blank_candidate_when_generating_then_empty_result() {
    let server = MockServer::start().await;
    let pipeline = pipeline_answering(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "  \n" }] } }]
        })),
    )
    .await;

    let error = run(&pipeline).await.unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::EmptyResult);
}

#[tokio::test]
async fn given_no_key_when_generating_then_missing_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let pipeline = LessonPipeline::new(GeminiClient::new(&base_url(&server)).unwrap());

    let error = pipeline
        .generate(&lesson(), &ProcessingOptions::default(), None)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::CredentialMissing);
}
