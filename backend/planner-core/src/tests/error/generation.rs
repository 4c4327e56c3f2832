use crate::error::generation::GENERIC_PROVIDER_FAILURE;
use crate::error::{GenerationError, GenerationErrorKind};

#[test]
fn given_blank_upstream_when_building_unknown_provider_then_generic_text() {
    for blank in ["", "   "] {
        let error = GenerationError::unknown_provider(blank);

        assert_eq!(error.user_message(), GENERIC_PROVIDER_FAILURE);
        assert_eq!(error.kind(), GenerationErrorKind::UnknownProvider);
    }
}

/// **VALUE**: Verifies every classified failure has its own short message.
///
/// **WHY THIS MATTERS**: The host prints `user_message()` verbatim; two
/// kinds sharing text would leave users guessing what to fix.
#[test]
fn given_each_kind_when_reading_user_message_then_messages_are_distinct() {
    let errors = [
        GenerationError::credential_missing(),
        GenerationError::empty_result(),
        GenerationError::invalid_credential("x"),
        GenerationError::quota_exceeded("x"),
        GenerationError::content_policy_violation("x"),
        GenerationError::unknown_provider("x"),
    ];

    let mut messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
    assert!(messages.iter().all(|m| !m.trim().is_empty()));
    messages.sort();
    messages.dedup();
    assert_eq!(messages.len(), errors.len());
}

#[test]
fn given_errors_when_reading_category_then_matches_kind() {
    assert_eq!(GenerationError::credential_missing().error_category(), "credential_missing");
    assert_eq!(GenerationError::quota_exceeded("q").error_category(), "quota_exceeded");
    assert_eq!(
        GenerationError::content_policy_violation("s").error_category(),
        "content_policy"
    );
}

#[test]
fn given_error_when_displayed_then_includes_source_location() {
    let error = GenerationError::empty_result();

    let display = error.to_string();

    assert!(display.starts_with("Gemini API returned an empty result"));
    assert!(display.contains("generation.rs"));
}
