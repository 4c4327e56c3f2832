//! Core of the NLS lesson planner.
//!
//! Two loosely coupled halves:
//!
//! - [`credential`]: acquires, checks, probes and persists the user's Gemini
//!   API key, exposing its state and announcing changes to the owner.
//! - [`pipeline`]: turns a lesson, processing options and a confirmed key
//!   into either the transformed lesson or a classified error.
//!
//! [`gemini_client`] is the only place that talks HTTP; [`storage`] is the
//! only place that touches the disk.

pub mod config;
pub mod credential;
pub mod error;
pub mod gemini_client;
pub mod pipeline;
pub mod prompt;
pub mod storage;

#[cfg(test)]
mod tests;

pub const GEMINI_API_HOST: &str = "generativelanguage.googleapis.com";
pub const GEMINI_API_BASE_URL: &str = const_format::concatcp!("https://", GEMINI_API_HOST, "/v1beta");
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

/// Key under which the confirmed API key is persisted.
pub const CREDENTIAL_STORAGE_KEY: &str = "gemini_api_key";

/// Application directory name under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "nls-planner";
