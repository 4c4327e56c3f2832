use crate::credential::{CredentialState, InvalidReason, KeyFormatFailure};

#[test]
fn given_reasons_when_reading_kind_then_tags_are_stable() {
    assert_eq!(InvalidReason::Empty.kind(), "empty");
    assert_eq!(InvalidReason::Format(KeyFormatFailure::Empty).kind(), "format");
    assert_eq!(
        InvalidReason::Rejected {
            status_code: Some(400),
            detail: String::new(),
        }
        .kind(),
        "rejected"
    );
    assert_eq!(
        InvalidReason::Storage {
            detail: String::new()
        }
        .kind(),
        "storage"
    );
}

/// **VALUE**: Verifies the rejection message does not echo provider detail.
///
/// **WHY THIS MATTERS**: The detail holds the raw HTTP error, which is noise
/// to the lesson author. The displayed text must stay short and actionable.
#[test]
fn given_rejected_reason_when_reading_message_then_detail_is_not_shown() {
    let reason = InvalidReason::Rejected {
        status_code: Some(400),
        detail: String::from("HTTP 400 - INVALID_ARGUMENT [src/gemini_client/mod.rs:1:1]"),
    };

    let message = reason.message();

    assert!(!message.contains("INVALID_ARGUMENT"));
    assert!(message.contains("not valid"));
}

#[test]
fn given_states_when_checking_confirmed_then_only_confirmed_matches() {
    assert!(CredentialState::Confirmed.is_confirmed());
    assert!(!CredentialState::Absent.is_confirmed());
    assert!(!CredentialState::PendingInput.is_confirmed());
    assert!(!CredentialState::Validating.is_confirmed());
    assert!(!CredentialState::Invalid(InvalidReason::Empty).is_confirmed());
    assert_eq!(CredentialState::Validating.label(), "validating");
}
