pub mod config;
pub mod gemini;
pub mod generation;
pub mod probe;
pub mod storage;

pub use config::ConfigError;
pub use gemini::GeminiError;
pub use generation::{GenerationError, GenerationErrorKind};
pub use probe::ProbeError;
pub use storage::StorageError;
