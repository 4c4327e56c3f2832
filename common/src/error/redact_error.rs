use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Raised when a secret is pushed through a serializer.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Secret Serialization Refused: {message} {location}")]
    SerializationRefused {
        message: String,
        location: ErrorLocation,
    },
}

impl RedactError {
    #[track_caller]
    pub fn serialization_refused(type_name: &str) -> Self {
        RedactError::SerializationRefused {
            message: format!("{type_name} cannot be serialized; write as_str() to storage explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
