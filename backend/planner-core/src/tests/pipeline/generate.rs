// Unit tests for LessonPipeline::generate
// The remote model is a scripted fake

use crate::DEFAULT_GEMINI_MODEL;
use crate::error::GenerationErrorKind;
use crate::pipeline::LessonPipeline;
use crate::prompt::{SYSTEM_INSTRUCTION, build_user_prompt};
use crate::tests::fakes::{FakeModel, Reply, VALID_FORMAT_KEY};

use common::RedactedApiKey;
use models::{LessonInfo, ProcessingOptions};

fn sample_lesson() -> LessonInfo {
    LessonInfo {
        textbook: String::from("A"),
        subject: String::from("Math"),
        grade: String::from("5"),
        content: String::from("Lesson body"),
        distribution_content: String::new(),
    }
}

fn key() -> RedactedApiKey {
    RedactedApiKey::new(VALID_FORMAT_KEY.to_string())
}

/// **VALUE**: End-to-end happy path with the default options.
///
/// **WHY THIS MATTERS**: The model's text must come back byte-for-byte; the
/// `<u>` markers are what the presentation layer highlights.
#[tokio::test]
async fn given_valid_inputs_when_model_answers_then_text_is_returned_unchanged() {
    // GIVEN: A model answering with marked-up text
    let model = FakeModel::text("Lesson body <u>NLS</u>");
    let pipeline = LessonPipeline::new(model.clone());
    let lesson = sample_lesson();
    let options = ProcessingOptions::default();

    // WHEN: Generating
    let result = pipeline.generate(&lesson, &options, Some(&key())).await;

    // THEN: Exact text back, one request with the fixed model and instruction
    assert_eq!(result.unwrap(), "Lesson body <u>NLS</u>");

    let requests = model.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model, DEFAULT_GEMINI_MODEL);
    assert_eq!(requests[0].system_instruction, SYSTEM_INSTRUCTION);
    assert_eq!(requests[0].prompt, build_user_prompt(&lesson, &options));
}

#[tokio::test]
async fn given_model_throws_quota_error_when_generating_then_quota_exceeded() {
    let pipeline = LessonPipeline::new(FakeModel::failing("quota exceeded"));

    let error = pipeline
        .generate(&sample_lesson(), &ProcessingOptions::default(), Some(&key()))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::QuotaExceeded);
}

/// **VALUE**: Verifies a missing key fails before any network attempt.
///
/// **BUG THIS CATCHES**: Would catch sending requests with an empty key
/// after the user removed it.
#[tokio::test]
async fn given_no_or_blank_credential_when_generating_then_missing_without_request() {
    let model = FakeModel::text("unused");
    let pipeline = LessonPipeline::new(model.clone());
    let blank = RedactedApiKey::new(String::from("   "));

    let without = pipeline
        .generate(&sample_lesson(), &ProcessingOptions::default(), None)
        .await
        .unwrap_err();
    let with_blank = pipeline
        .generate(&sample_lesson(), &ProcessingOptions::default(), Some(&blank))
        .await
        .unwrap_err();

    assert_eq!(without.kind(), GenerationErrorKind::CredentialMissing);
    assert_eq!(with_blank.kind(), GenerationErrorKind::CredentialMissing);
    assert!(model.requests().is_empty());
}

/// **VALUE**: Verifies whitespace-only output is a failure, not a result.
#[tokio::test]
async fn given_blank_model_output_when_generating_then_empty_result() {
    let pipeline = LessonPipeline::new(FakeModel::text(" \n "));

    let error = pipeline
        .generate(&sample_lesson(), &ProcessingOptions::default(), Some(&key()))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::EmptyResult);
}

#[tokio::test]
async fn given_provider_rejects_key_when_generating_then_invalid_credential() {
    let pipeline = LessonPipeline::new(FakeModel::replying(Reply::Api {
        status_code: 400,
        status: Some(String::from("INVALID_ARGUMENT")),
        message: String::from("API key not valid. Please pass a valid API key."),
    }));

    let error = pipeline
        .generate(&sample_lesson(), &ProcessingOptions::default(), Some(&key()))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::InvalidCredential);
}

/// **VALUE**: Verifies an unrecognised 4xx falls through to UnknownProvider
/// with the provider's wording.
#[tokio::test]
async fn given_unclassified_client_error_when_generating_then_unknown_provider() {
    let pipeline = LessonPipeline::new(FakeModel::replying(Reply::Api {
        status_code: 404,
        status: Some(String::from("NOT_FOUND")),
        message: String::from("models/gemini-x is not found"),
    }));

    let error = pipeline
        .generate(&sample_lesson(), &ProcessingOptions::default(), Some(&key()))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), GenerationErrorKind::UnknownProvider);
    assert_eq!(error.user_message(), "[404 NOT_FOUND] models/gemini-x is not found");
}

#[tokio::test]
async fn given_custom_model_id_when_generating_then_request_uses_it() {
    let model = FakeModel::text("ok");
    let pipeline = LessonPipeline::new(model.clone()).with_model_id("gemini-1.5-pro");

    pipeline
        .generate(&sample_lesson(), &ProcessingOptions::default(), Some(&key()))
        .await
        .unwrap();

    assert_eq!(pipeline.model_id(), "gemini-1.5-pro");
    assert_eq!(model.requests()[0].model, "gemini-1.5-pro");
}

#[test]
fn given_options_when_building_request_then_prompt_reflects_options() {
    let pipeline = LessonPipeline::new(FakeModel::text("unused"));
    let options = ProcessingOptions {
        analyze_only: true,
        detailed_report: true,
    };

    let request = pipeline.build_request(&sample_lesson(), &options);

    assert_eq!(request.prompt, build_user_prompt(&sample_lesson(), &options));
    assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
}
