//! Mapping of provider diagnostics onto [`GenerationError`].
//!
//! Plain case-sensitive substring checks in a fixed order; the first
//! match wins. Callers may depend on this exact behaviour, so the rules
//! stay literal.

use crate::error::GenerationError;

const CREDENTIAL_MARKER: &str = "API key";
const QUOTA_MARKER: &str = "quota";
const SAFETY_MARKER: &str = "SAFETY";

/// Classify a failure message from the remote capability.
#[track_caller]
pub fn classify_diagnostic(diagnostic: &str) -> GenerationError {
    if diagnostic.contains(CREDENTIAL_MARKER) {
        GenerationError::invalid_credential(diagnostic)
    } else if diagnostic.contains(QUOTA_MARKER) {
        GenerationError::quota_exceeded(diagnostic)
    } else if diagnostic.contains(SAFETY_MARKER) {
        GenerationError::content_policy_violation(diagnostic)
    } else {
        GenerationError::unknown_provider(diagnostic)
    }
}

/// Reject blank output; otherwise return the text untouched.
#[track_caller]
pub fn normalize_output(text: String) -> Result<String, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::empty_result());
    }
    Ok(text)
}
