use crate::{TEST_KEY, base_url};

use planner_core::credential::CredentialProbe;
use planner_core::error::{GeminiError, ProbeError};
use planner_core::gemini_client::GeminiClient;
use planner_core::pipeline::{GenerationRequest, GenerativeModel};

use common::RedactedApiKey;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(prompt: &str) -> GenerationRequest {
    GenerationRequest {
        model: String::from("gemini-2.0-flash-exp"),
        system_instruction: String::from("system"),
        prompt: prompt.to_string(),
    }
}

/// **VALUE**: Verifies the probe hits the model listing with the key as a
/// `key` query parameter.
#[tokio::test]
async fn given_provider_accepts_key_when_probing_then_ok() {
    // GIVEN: A provider that lists models for our key
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "models": [] })))
        .expect(1)
        .mount(&server)
        .await;
    let client = GeminiClient::new(&base_url(&server)).unwrap();

    // WHEN: Probing
    let result = client.probe(&RedactedApiKey::new(TEST_KEY.to_string())).await;

    // THEN: Accepted
    assert!(result.is_ok(), "probe failed: {result:?}");
}

#[tokio::test]
async fn given_provider_rejects_key_when_probing_then_rejected_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;
    let client = GeminiClient::new(&base_url(&server)).unwrap();

    let error = client
        .probe(&RedactedApiKey::new(TEST_KEY.to_string()))
        .await
        .unwrap_err();

    assert!(matches!(error, ProbeError::Rejected { .. }));
    assert_eq!(error.status_code(), Some(400));
    assert_eq!(error.error_category(), "key_rejected");
}

/// **VALUE**: Verifies a transport failure never leaks the key.
///
/// **BUG THIS CATCHES**: Would catch dropping `without_url()`, which puts
/// `?key=AIza...` into every logged probe error.
#[tokio::test]
async fn given_unreachable_provider_when_probing_then_network_error_without_key() {
    let server = MockServer::start().await;
    let url = base_url(&server);
    drop(server);
    let client = GeminiClient::new(&url).unwrap();

    let error = client
        .probe(&RedactedApiKey::new(TEST_KEY.to_string()))
        .await
        .unwrap_err();

    assert!(matches!(error, ProbeError::Network { .. }));
    assert!(!error.to_string().contains(TEST_KEY));
}

/// **VALUE**: Verifies the generation call's URL, auth header and body.
#[tokio::test]
async fn given_model_answers_when_generating_then_text_of_first_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
        .and(header("x-goog-api-key", TEST_KEY))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": "system" }] },
            "contents": [{ "role": "user", "parts": [{ "text": "Lesson body" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Lesson body <u>NLS</u>" }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = GeminiClient::new(&base_url(&server)).unwrap();

    let text = client
        .generate_content(&RedactedApiKey::new(TEST_KEY.to_string()), &request("Lesson body"))
        .await
        .unwrap();

    assert_eq!(text, "Lesson body <u>NLS</u>");
}

#[tokio::test]
async fn given_error_envelope_when_generating_then_api_error_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "You exceeded your current quota, please check your plan and billing details.",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&server)
        .await;
    let client = GeminiClient::new(&base_url(&server)).unwrap();

    let error = client
        .generate_content(&RedactedApiKey::new(TEST_KEY.to_string()), &request("x"))
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(429));
    assert_eq!(
        error.diagnostic(),
        "[429 RESOURCE_EXHAUSTED] You exceeded your current quota, please check your plan and billing details."
    );
}

#[tokio::test]
async fn given_non_json_error_body_when_generating_then_raw_body_is_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;
    let client = GeminiClient::new(&base_url(&server)).unwrap();

    let error = client
        .generate_content(&RedactedApiKey::new(TEST_KEY.to_string()), &request("x"))
        .await
        .unwrap_err();

    assert!(matches!(error, GeminiError::Api { .. }));
    assert_eq!(error.diagnostic(), "[502] Bad Gateway");
}

#[tokio::test]
async fn given_success_with_garbage_body_when_generating_then_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;
    let client = GeminiClient::new(&base_url(&server)).unwrap();

    let error = client
        .generate_content(&RedactedApiKey::new(TEST_KEY.to_string()), &request("x"))
        .await
        .unwrap_err();

    assert!(matches!(error, GeminiError::Json { .. }));
}
