use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Lesson data rejected before it reaches the pipeline.
#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Lesson Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ModelError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
