//! Gemini API key wrapper that keeps the secret out of logs.

use crate::RedactError;

use std::fmt;

use serde::ser::Error;
use zeroize::Zeroize;

/// Number of leading characters shown by [`RedactedApiKey::masked`].
const MASK_PREFIX_LEN: usize = 4;

/// Number of trailing characters shown by [`RedactedApiKey::masked`].
const MASK_SUFFIX_LEN: usize = 4;

/// An API key that never exposes its value in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    /// Wrap a key value as-is.
    pub fn new(key: String) -> Self {
        Self { inner: key }
    }

    /// Wrap raw user input, dropping surrounding whitespace.
    pub fn from_input(raw: &str) -> Self {
        Self {
            inner: raw.trim().to_string(),
        }
    }

    /// Get the actual key value for transmission.
    ///
    /// # Security Note
    /// Only call this when actually sending the key to the provider or
    /// writing it to the local store.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the key length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Empty or whitespace only.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.inner.trim().is_empty()
    }

    /// Short preview for status displays, e.g. `AIza…wxyz`.
    ///
    /// Keys too short to hide anything in the middle are fully masked.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.inner.chars().collect();
        if chars.len() <= MASK_PREFIX_LEN + MASK_SUFFIX_LEN {
            return "*".repeat(chars.len());
        }

        let head: String = chars[..MASK_PREFIX_LEN].iter().collect();
        let tail: String = chars[chars.len() - MASK_SUFFIX_LEN..].iter().collect();
        format!("{head}…{tail}")
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Keys reach the local store through as_str(), never through serde.
impl serde::Serialize for RedactedApiKey {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::serialization_refused(
            "RedactedApiKey",
        )))
    }
}
