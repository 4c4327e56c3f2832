//! Classified outcome of a failed generation request.
//!
//! Every failure of [`crate::pipeline::LessonPipeline::generate`] ends up as
//! exactly one of these variants. Nothing is retried.

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Fallback text when the provider failed without saying anything.
pub const GENERIC_PROVIDER_FAILURE: &str = "Could not connect to the Gemini API";

#[derive(Debug, ThisError)]
pub enum GenerationError {
    #[error("API key was not provided {location}")]
    CredentialMissing { location: ErrorLocation },

    #[error("Gemini API returned an empty result {location}")]
    EmptyResult { location: ErrorLocation },

    #[error("API key is invalid or expired: {upstream} {location}")]
    InvalidCredential {
        upstream: String,
        location: ErrorLocation,
    },

    #[error("API key quota exceeded: {upstream} {location}")]
    QuotaExceeded {
        upstream: String,
        location: ErrorLocation,
    },

    #[error("Content blocked by provider safety policy: {upstream} {location}")]
    ContentPolicyViolation {
        upstream: String,
        location: ErrorLocation,
    },

    #[error("Provider error: {message} {location}")]
    UnknownProvider {
        message: String,
        location: ErrorLocation,
    },
}

/// Location-free discriminant of [`GenerationError`], handy for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationErrorKind {
    CredentialMissing,
    EmptyResult,
    InvalidCredential,
    QuotaExceeded,
    ContentPolicyViolation,
    UnknownProvider,
}

impl GenerationError {
    #[track_caller]
    pub fn credential_missing() -> Self {
        GenerationError::CredentialMissing {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_result() -> Self {
        GenerationError::EmptyResult {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credential(upstream: impl Into<String>) -> Self {
        GenerationError::InvalidCredential {
            upstream: upstream.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn quota_exceeded(upstream: impl Into<String>) -> Self {
        GenerationError::QuotaExceeded {
            upstream: upstream.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn content_policy_violation(upstream: impl Into<String>) -> Self {
        GenerationError::ContentPolicyViolation {
            upstream: upstream.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// An empty upstream message is replaced by [`GENERIC_PROVIDER_FAILURE`].
    #[track_caller]
    pub fn unknown_provider(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_PROVIDER_FAILURE.to_string()
        } else {
            message
        };

        GenerationError::UnknownProvider {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> GenerationErrorKind {
        match self {
            GenerationError::CredentialMissing { .. } => GenerationErrorKind::CredentialMissing,
            GenerationError::EmptyResult { .. } => GenerationErrorKind::EmptyResult,
            GenerationError::InvalidCredential { .. } => GenerationErrorKind::InvalidCredential,
            GenerationError::QuotaExceeded { .. } => GenerationErrorKind::QuotaExceeded,
            GenerationError::ContentPolicyViolation { .. } => {
                GenerationErrorKind::ContentPolicyViolation
            }
            GenerationError::UnknownProvider { .. } => GenerationErrorKind::UnknownProvider,
        }
    }

    /// Short, actionable text for the person at the keyboard.
    ///
    /// Only `UnknownProvider` forwards the upstream message.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::CredentialMissing { .. } => {
                String::from("No API key configured. Add your Gemini API key first.")
            }
            GenerationError::EmptyResult { .. } => {
                String::from("Gemini returned an empty result. Please try again.")
            }
            GenerationError::InvalidCredential { .. } => {
                String::from("API key is invalid or expired. Please check it and try again.")
            }
            GenerationError::QuotaExceeded { .. } => {
                String::from("API key has exceeded its usage quota. Please try again later.")
            }
            GenerationError::ContentPolicyViolation { .. } => String::from(
                "The lesson content may contain restricted material. Please review it.",
            ),
            GenerationError::UnknownProvider { message, .. } => message.clone(),
        }
    }

    pub fn error_category(&self) -> &'static str {
        match self.kind() {
            GenerationErrorKind::CredentialMissing => "credential_missing",
            GenerationErrorKind::EmptyResult => "empty_result",
            GenerationErrorKind::InvalidCredential => "invalid_credential",
            GenerationErrorKind::QuotaExceeded => "quota_exceeded",
            GenerationErrorKind::ContentPolicyViolation => "content_policy",
            GenerationErrorKind::UnknownProvider => "unknown_provider",
        }
    }
}
