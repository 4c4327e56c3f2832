// Unit tests for provider diagnostic classification
// Rules are literal substring checks, first match wins

use crate::error::GenerationErrorKind;
use crate::error::generation::GENERIC_PROVIDER_FAILURE;
use crate::pipeline::{classify_diagnostic, normalize_output};
use crate::error::GenerationError;

#[test]
fn given_known_diagnostics_when_classifying_then_each_maps_to_its_kind() {
    let cases = [
        (
            "[400 INVALID_ARGUMENT] API key not valid. Please pass a valid API key.",
            GenerationErrorKind::InvalidCredential,
        ),
        (
            "[429 RESOURCE_EXHAUSTED] You exceeded your current quota, please check your plan.",
            GenerationErrorKind::QuotaExceeded,
        ),
        ("Response was blocked due to SAFETY", GenerationErrorKind::ContentPolicyViolation),
        ("Candidate was blocked due to SAFETY", GenerationErrorKind::ContentPolicyViolation),
        ("[503 UNAVAILABLE] The model is overloaded.", GenerationErrorKind::UnknownProvider),
    ];

    for (diagnostic, expected) in cases {
        assert_eq!(
            classify_diagnostic(diagnostic).kind(),
            expected,
            "diagnostic: {diagnostic}"
        );
    }
}

/// **VALUE**: Verifies the first matching rule wins.
///
/// **WHY THIS MATTERS**: Consumers rely on the exact priority. A message
/// mentioning both the key and the quota is reported as a key problem.
///
/// **BUG THIS CATCHES**: Would catch reordering the checks.
#[test]
fn given_message_matching_several_rules_when_classifying_then_first_rule_wins() {
    assert_eq!(
        classify_diagnostic("API key quota exceeded").kind(),
        GenerationErrorKind::InvalidCredential
    );
    assert_eq!(
        classify_diagnostic("quota hit while checking SAFETY").kind(),
        GenerationErrorKind::QuotaExceeded
    );
}

/// **VALUE**: Verifies matching is case-sensitive.
///
/// **BUG THIS CATCHES**: Would catch an "improvement" to case-insensitive
/// matching, which changes which errors users see.
#[test]
fn given_differently_cased_markers_when_classifying_then_falls_through() {
    assert_eq!(
        classify_diagnostic("api key invalid").kind(),
        GenerationErrorKind::UnknownProvider
    );
    assert_eq!(
        classify_diagnostic("Blocked for Safety reasons").kind(),
        GenerationErrorKind::UnknownProvider
    );
    assert_eq!(
        classify_diagnostic("QUOTA").kind(),
        GenerationErrorKind::UnknownProvider
    );
}

#[test]
fn given_unknown_diagnostic_when_classifying_then_upstream_message_is_forwarded() {
    let error = classify_diagnostic("[404 NOT_FOUND] models/foo is not found");

    assert_eq!(error.user_message(), "[404 NOT_FOUND] models/foo is not found");
}

#[test]
fn given_empty_diagnostic_when_classifying_then_generic_fallback_is_used() {
    let error = classify_diagnostic("");

    match error {
        GenerationError::UnknownProvider { message, .. } => {
            assert_eq!(message, GENERIC_PROVIDER_FAILURE);
        }
        other => panic!("Expected UnknownProvider, got {other:?}"),
    }
}

/// **VALUE**: Verifies classified messages are short and do not leak the
/// raw provider text (except for unknown errors).
#[test]
fn given_classified_errors_when_reading_user_message_then_upstream_is_hidden() {
    let upstream = "[400 INVALID_ARGUMENT] API key not valid.";

    let message = classify_diagnostic(upstream).user_message();

    assert!(!message.contains("INVALID_ARGUMENT"));
    assert!(message.contains("invalid or expired"));
}

#[test]
fn given_blank_output_when_normalizing_then_empty_result() {
    for blank in ["", "   ", "\n\t\n"] {
        let result = normalize_output(blank.to_string());

        assert!(matches!(result, Err(GenerationError::EmptyResult { .. })));
    }
}

#[test]
fn given_text_output_when_normalizing_then_returned_unchanged() {
    let text = String::from("  Lesson body <u>NLS</u>\n");

    assert_eq!(normalize_output(text.clone()).unwrap(), text);
}
