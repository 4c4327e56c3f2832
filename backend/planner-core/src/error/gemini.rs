//! Diagnostics surfaced by the Gemini generation endpoint.
//!
//! [`GeminiError::diagnostic`] renders the failure the way the provider
//! phrases it (no source location), which is the text the pipeline
//! classifies.

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum GeminiError {
    /// Non-success HTTP status, with the provider's `error` object if any.
    #[error("Gemini API Error: HTTP {status_code} - {message} {location}")]
    Api {
        status_code: HttpStatusCode,
        status: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    /// The prompt or the first candidate was blocked (e.g. `SAFETY`).
    #[error("Gemini Blocked Error: {reason} {location}")]
    Blocked {
        reason: String,
        scope: BlockScope,
        location: ErrorLocation,
    },

    #[error("Gemini Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Gemini JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Gemini URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// Anything else the capability reports, including client construction.
    #[error("Gemini Error: {message} {location}")]
    Other {
        message: String,
        location: ErrorLocation,
    },
}

/// What part of the exchange the provider blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockScope {
    Prompt,
    Candidate,
}

impl GeminiError {
    #[track_caller]
    pub fn api(status_code: u16, status: Option<String>, message: impl Into<String>) -> Self {
        GeminiError::Api {
            status_code: HttpStatusCode(status_code),
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn blocked(scope: BlockScope, reason: impl Into<String>) -> Self {
        GeminiError::Blocked {
            reason: reason.into(),
            scope,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn other(message: impl Into<String>) -> Self {
        GeminiError::Other {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Provider-style message used for classification and user display.
    pub fn diagnostic(&self) -> String {
        match self {
            GeminiError::Api {
                status_code,
                status: Some(status),
                message,
                ..
            } => format!("[{status_code} {status}] {message}"),
            GeminiError::Api {
                status_code,
                status: None,
                message,
                ..
            } => format!("[{status_code}] {message}"),
            GeminiError::Blocked {
                reason,
                scope: BlockScope::Prompt,
                ..
            } => format!("Response was blocked due to {reason}"),
            GeminiError::Blocked {
                reason,
                scope: BlockScope::Candidate,
                ..
            } => format!("Candidate was blocked due to {reason}"),
            GeminiError::Network { message, .. }
            | GeminiError::Json { message, .. }
            | GeminiError::UrlParse { message, .. }
            | GeminiError::Other { message, .. } => message.clone(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            GeminiError::Api { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeminiError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        GeminiError::Network {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for GeminiError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        GeminiError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for GeminiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        GeminiError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
