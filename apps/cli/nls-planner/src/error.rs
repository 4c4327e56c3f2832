use common::ErrorLocation;

use models::ModelError;
use planner_core::error::{ConfigError, GeminiError, GenerationError, StorageError};

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the command-line host.
///
/// Core failures keep their own location; [`PlannerError::user_message`]
/// is what gets printed for the person at the terminal.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Error from this app (I/O, logger setup, ...)
    #[error("Planner Error: {message} {location}")]
    Planner {
        message: String,
        location: ErrorLocation,
    },

    /// Bad command-line input (missing file, empty content, ...)
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    /// Key could not be set; carries the reason shown to the user
    #[error("Credential Error: {message} {location}")]
    Credential {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Lesson(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Client(#[from] GeminiError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl PlannerError {
    #[track_caller]
    pub fn planner(message: impl Into<String>) -> Self {
        PlannerError::Planner {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        PlannerError::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn credential(message: impl Into<String>) -> Self {
        PlannerError::Credential {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// One line for stderr, without source locations.
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Planner { message, .. }
            | PlannerError::Input { message, .. }
            | PlannerError::Credential { message, .. } => message.clone(),
            PlannerError::Generation(e) => e.user_message(),
            PlannerError::Client(e) => e.diagnostic(),
            PlannerError::Lesson(ModelError::Validation { message, .. }) => message.clone(),
            PlannerError::Config(e) => e.to_string(),
            PlannerError::Storage(e) => e.to_string(),
        }
    }
}

impl From<std::io::Error> for PlannerError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        PlannerError::planner(format!("I/O error: {error}"))
    }
}
