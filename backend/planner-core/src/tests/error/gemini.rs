use crate::error::GeminiError;
use crate::error::gemini::BlockScope;

/// **VALUE**: Verifies diagnostics use the provider's phrasing.
///
/// **WHY THIS MATTERS**: The classifier matches on this text; changing the
/// wording silently changes which error users see.
#[test]
fn given_api_error_when_rendering_diagnostic_then_status_prefix_and_message() {
    let with_status = GeminiError::api(
        429,
        Some(String::from("RESOURCE_EXHAUSTED")),
        "You exceeded your current quota.",
    );
    let without_status = GeminiError::api(500, None, "Internal error");

    assert_eq!(
        with_status.diagnostic(),
        "[429 RESOURCE_EXHAUSTED] You exceeded your current quota."
    );
    assert_eq!(without_status.diagnostic(), "[500] Internal error");
    assert_eq!(with_status.status_code(), Some(429));
}

#[test]
fn given_block_when_rendering_diagnostic_then_scope_is_named() {
    assert_eq!(
        GeminiError::blocked(BlockScope::Prompt, "SAFETY").diagnostic(),
        "Response was blocked due to SAFETY"
    );
    assert_eq!(
        GeminiError::blocked(BlockScope::Candidate, "RECITATION").diagnostic(),
        "Candidate was blocked due to RECITATION"
    );
}

#[test]
fn given_other_error_when_rendering_diagnostic_then_message_only() {
    let error = GeminiError::other("quota exceeded");

    assert_eq!(error.diagnostic(), "quota exceeded");
    assert_eq!(error.status_code(), None);
}

#[test]
fn given_invalid_json_when_converting_then_json_variant() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let error = GeminiError::from(parse_error);

    assert!(matches!(error, GeminiError::Json { .. }));
}
