//! Shared primitives for the NLS lesson planner.
//!
//! Everything here is domain-neutral: error locations, HTTP status
//! categorisation and the redacted credential wrapper. Higher crates
//! build on these without pulling in any I/O.
//!
//! ## Architecture
//!
//! - **common** (this crate): Shared primitives
//! - **models**: Lesson data passed in from the presentation layer
//! - **planner-core**: Credential lifecycle and the generation pipeline
//! - **nls-planner**: Command-line host wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
