//! Gemini API key format check.
//!
//! Runs before any network call so obviously wrong input fails fast.

use common::RedactedApiKey;

/// Every Gemini API key starts with this literal.
pub const GEMINI_KEY_PREFIX: &str = "AIza";

/// Shortest key accepted before probing.
pub const GEMINI_KEY_MIN_LENGTH: usize = 30;

/// Specific reasons a key fails the format check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFormatFailure {
    Empty,
    /// The rejected text is not kept; it may be most of a real secret.
    InvalidPrefix { expected: &'static str },
    TooShort {
        min: usize,
        actual: usize,
    },
}

impl std::fmt::Display for KeyFormatFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "key is empty"),
            Self::InvalidPrefix { expected } => write!(f, "expected prefix '{}'", expected),
            Self::TooShort { min, actual } => {
                write!(f, "key too short ({} chars, minimum {})", actual, min)
            }
        }
    }
}

/// Prefix and length rules for a provider's keys.
#[derive(Debug, Clone)]
pub struct KeyValidator {
    expected_prefix: &'static str,
    min_length: usize,
}

impl Default for KeyValidator {
    fn default() -> Self {
        Self::gemini()
    }
}

impl KeyValidator {
    pub fn gemini() -> Self {
        Self {
            expected_prefix: GEMINI_KEY_PREFIX,
            min_length: GEMINI_KEY_MIN_LENGTH,
        }
    }

    /// Check an already-trimmed key.
    ///
    /// Length is counted in characters, prefix is compared case-sensitively.
    pub fn validate(&self, key: &RedactedApiKey) -> Result<(), KeyFormatFailure> {
        let value = key.as_str();

        if value.is_empty() {
            return Err(KeyFormatFailure::Empty);
        }

        if !value.starts_with(self.expected_prefix) {
            return Err(KeyFormatFailure::InvalidPrefix {
                expected: self.expected_prefix,
            });
        }

        let length = value.chars().count();
        if length < self.min_length {
            return Err(KeyFormatFailure::TooShort {
                min: self.min_length,
                actual: length,
            });
        }

        Ok(())
    }
}
