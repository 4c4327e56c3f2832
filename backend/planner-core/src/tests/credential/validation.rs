use crate::credential::validation::{GEMINI_KEY_MIN_LENGTH, GEMINI_KEY_PREFIX};
use crate::credential::{InvalidReason, KeyFormatFailure, KeyValidator};

use common::RedactedApiKey;

fn key(value: &str) -> RedactedApiKey {
    RedactedApiKey::from_input(value)
}

/// **VALUE**: Verifies the boundary of the minimum length rule.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one (`<=` instead of `<`)
/// that rejects real 30-character keys or accepts 29-character ones.
#[test]
fn given_keys_around_min_length_when_validating_then_boundary_is_inclusive() {
    let validator = KeyValidator::gemini();
    let exactly_min = format!("{GEMINI_KEY_PREFIX}{}", "x".repeat(GEMINI_KEY_MIN_LENGTH - 4));
    let one_short = format!("{GEMINI_KEY_PREFIX}{}", "x".repeat(GEMINI_KEY_MIN_LENGTH - 5));

    assert_eq!(validator.validate(&key(&exactly_min)), Ok(()));
    assert_eq!(
        validator.validate(&key(&one_short)),
        Err(KeyFormatFailure::TooShort { min: 30, actual: 29 })
    );
}

/// **VALUE**: Verifies keys from other providers are rejected by prefix.
///
/// **WHY THIS MATTERS**: Users often paste an OpenAI or Anthropic key by
/// mistake. That must fail locally, before the key is sent to Google.
#[test]
fn given_foreign_prefix_when_validating_then_returns_invalid_prefix() {
    let validator = KeyValidator::gemini();

    let result = validator.validate(&key("sk-ant-REDACTED"));

    assert_eq!(
        result,
        Err(KeyFormatFailure::InvalidPrefix { expected: "AIza" })
    );
}

#[test]
fn given_lowercase_prefix_when_validating_then_rejected() {
    let validator = KeyValidator::gemini();

    let result = validator.validate(&key("aizaSyD-test-key-0123456789abcdef"));

    assert!(matches!(result, Err(KeyFormatFailure::InvalidPrefix { .. })));
}

#[test]
fn given_empty_key_when_validating_then_returns_empty() {
    let validator = KeyValidator::default();

    assert_eq!(validator.validate(&key("   ")), Err(KeyFormatFailure::Empty));
}

#[test]
fn given_failures_when_displayed_then_messages_name_the_cause() {
    let short = KeyFormatFailure::TooShort { min: 30, actual: 12 };
    let prefix = KeyFormatFailure::InvalidPrefix { expected: "AIza" };

    assert_eq!(short.to_string(), "key too short (12 chars, minimum 30)");
    assert_eq!(prefix.to_string(), "expected prefix 'AIza'");
}

/// **VALUE**: Verifies a wrong-prefix failure never repeats the input.
///
/// **WHY THIS MATTERS**: The failure text is logged and shown next to the
/// input field. A key from another provider is still a live secret.
///
/// **BUG THIS CATCHES**: Would catch copying the leading characters of the
/// rejected key into the failure or its message.
#[test]
fn given_foreign_key_when_rejected_then_failure_text_holds_no_key_characters() {
    let secret = "sk-proj-Zq9xLiveSecret0123456789abcdef";

    let failure = KeyValidator::gemini().validate(&key(secret)).unwrap_err();
    let reason = InvalidReason::Format(failure.clone());

    for text in [failure.to_string(), format!("{failure:?}"), reason.message()] {
        assert!(!text.contains("sk-p"), "leaked key prefix: {text}");
        assert!(!text.contains("Zq9x"), "leaked key text: {text}");
    }
}
