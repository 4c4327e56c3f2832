// Unit tests for the Generative Language API JSON shapes

use crate::error::GeminiError;
use crate::error::gemini::BlockScope;
use crate::gemini_client::wire::{GenerateContentRequest, GenerateContentResponse};

use serde_json::json;

fn parse(value: serde_json::Value) -> GenerateContentResponse {
    serde_json::from_value(value).unwrap()
}

/// **VALUE**: Verifies the request body uses the provider's camelCase
/// field names and puts the role only on user content.
///
/// **BUG THIS CATCHES**: Would catch a `system_instruction` key, which the
/// API silently ignores, dropping the fixed instruction.
#[test]
fn given_instruction_and_prompt_when_serializing_then_camel_case_body() {
    let body = GenerateContentRequest::new("be helpful", "Lesson body");

    let value = serde_json::to_value(&body).unwrap();

    assert_eq!(
        value,
        json!({
            "systemInstruction": { "parts": [{ "text": "be helpful" }] },
            "contents": [{ "role": "user", "parts": [{ "text": "Lesson body" }] }]
        })
    );
}

#[test]
fn given_multi_part_candidate_when_extracting_text_then_parts_are_concatenated() {
    let response = parse(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "Lesson body " }, { "text": "<u>NLS</u>" }] },
            "finishReason": "STOP"
        }]
    }));

    assert_eq!(response.into_text().unwrap(), "Lesson body <u>NLS</u>");
}

#[test]
fn given_several_candidates_when_extracting_text_then_only_first_is_used() {
    let response = parse(json!({
        "candidates": [
            { "content": { "parts": [{ "text": "first" }] } },
            { "content": { "parts": [{ "text": "second" }] } }
        ]
    }));

    assert_eq!(response.into_text().unwrap(), "first");
}

#[test]
fn given_no_candidates_when_extracting_text_then_empty_string() {
    assert_eq!(parse(json!({})).into_text().unwrap(), "");
    assert_eq!(parse(json!({ "candidates": [] })).into_text().unwrap(), "");
}

#[test]
fn given_prompt_block_reason_when_extracting_text_then_prompt_blocked() {
    let response = parse(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));

    let error = response.into_text().unwrap_err();

    match &error {
        GeminiError::Blocked { reason, scope, .. } => {
            assert_eq!(reason, "SAFETY");
            assert_eq!(*scope, BlockScope::Prompt);
        }
        other => panic!("Expected Blocked, got {other:?}"),
    }
    assert_eq!(error.diagnostic(), "Response was blocked due to SAFETY");
}

#[test]
fn given_candidate_stopped_for_safety_when_extracting_text_then_candidate_blocked() {
    let response = parse(json!({
        "candidates": [{ "content": { "parts": [] }, "finishReason": "SAFETY" }]
    }));

    let error = response.into_text().unwrap_err();

    assert_eq!(error.diagnostic(), "Candidate was blocked due to SAFETY");
}

/// **VALUE**: Verifies ordinary finish reasons keep the text.
///
/// **BUG THIS CATCHES**: Would catch treating `MAX_TOKENS` as a block and
/// throwing away a long but usable lesson.
#[test]
fn given_non_blocking_finish_reasons_when_extracting_text_then_text_is_kept() {
    for reason in ["STOP", "MAX_TOKENS", "OTHER"] {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] }, "finishReason": reason }]
        }));

        assert_eq!(response.into_text().unwrap(), "ok", "finish reason {reason}");
    }
}
