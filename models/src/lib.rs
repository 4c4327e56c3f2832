//! Domain models for the NLS lesson planner.
//!
//! Plain data handed over by the presentation layer: the lesson being
//! transformed and the flags that steer the transformation. Models carry
//! no I/O and no provider knowledge.

pub mod error;
pub mod lesson;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use lesson::builder::LessonInfoBuilder;
pub use lesson::{LessonInfo, ProcessingOptions};

#[cfg(test)]
mod tests;
