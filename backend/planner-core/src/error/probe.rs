//! Errors from the credential probe (the model-listing call).
//!
//! - HTTP status codes stored directly (not parsed from strings)
//! - All errors include ErrorLocation for debugging
//! - `#[track_caller]` for automatic location capture

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Why the provider did not accept a candidate key.
#[derive(Debug, ThisError)]
pub enum ProbeError {
    #[error("Key rejected by provider: HTTP {status_code} - {message} {location}")]
    Rejected {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error during key probe: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Invalid probe URL: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl ProbeError {
    /// Create from reqwest error with proper categorization.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return ProbeError::Rejected {
                status_code: HttpStatusCode(status.as_u16()),
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        ProbeError::Network {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create from a non-success HTTP response.
    #[track_caller]
    pub fn from_http_response(status_code: u16, body: impl Into<String>) -> Self {
        ProbeError::Rejected {
            status_code: HttpStatusCode(status_code),
            message: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url_parse(error: &url::ParseError) -> Self {
        ProbeError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Get error category for logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            ProbeError::Rejected { status_code, .. } if status_code.is_auth_rejection() => {
                "key_rejected"
            }
            ProbeError::Rejected { status_code, .. } if status_code.is_rate_limited() => {
                "rate_limited"
            }
            ProbeError::Rejected { status_code, .. } if status_code.is_server_error() => {
                "server_error"
            }
            ProbeError::Rejected { .. } => "http_error",
            ProbeError::Network { is_timeout: true, .. } => "timeout",
            ProbeError::Network { is_connection: true, .. } => "connection",
            ProbeError::Network { .. } => "network",
            ProbeError::UrlParse { .. } => "url_parse",
        }
    }

    /// Get HTTP status code if the provider answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeError::Rejected { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }
}
