use super::validation::KeyFormatFailure;

/// Where the credential currently stands. Exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialState {
    /// Store created, nothing read yet.
    Absent,
    /// No usable key; waiting for the user to enter one.
    PendingInput,
    /// Probe in flight.
    Validating,
    /// Key accepted and persisted (or read back from storage).
    Confirmed,
    Invalid(InvalidReason),
}

impl CredentialState {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, CredentialState::Confirmed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CredentialState::Absent => "absent",
            CredentialState::PendingInput => "pending_input",
            CredentialState::Validating => "validating",
            CredentialState::Confirmed => "confirmed",
            CredentialState::Invalid(_) => "invalid",
        }
    }
}

/// Why a submitted key was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// Nothing but whitespace was entered.
    Empty,
    /// Failed the prefix/length check; no network call was made.
    Format(KeyFormatFailure),
    /// The probe returned a non-success status or failed in transport.
    Rejected {
        status_code: Option<u16>,
        detail: String,
    },
    /// The key was accepted but could not be written to local storage.
    Storage { detail: String },
}

impl InvalidReason {
    /// Short machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            InvalidReason::Empty => "empty",
            InvalidReason::Format(_) => "format",
            InvalidReason::Rejected { .. } => "rejected",
            InvalidReason::Storage { .. } => "storage",
        }
    }

    /// Text shown next to the input field.
    pub fn message(&self) -> String {
        match self {
            InvalidReason::Empty => String::from("Please enter an API key."),
            InvalidReason::Format(failure) => format!(
                "This does not look like a Gemini API key ({failure}). Keys start with \"AIza\"."
            ),
            InvalidReason::Rejected { .. } => {
                String::from("API key is not valid. Please check it and try again.")
            }
            InvalidReason::Storage { detail } => {
                format!("API key is valid but could not be saved: {detail}")
            }
        }
    }
}
