pub mod builder;

use builder::LessonInfoBuilder;

use serde::{Deserialize, Serialize};

/// A lesson plan submitted for competency integration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonInfo {
    /// Textbook series, e.g. "Kết nối tri thức".
    pub textbook: String,
    pub subject: String,
    pub grade: String,
    /// Original lesson body. Free text, may contain markup.
    pub content: String,
    /// Curriculum distribution (PPCT) excerpt. Empty when not supplied.
    #[serde(default)]
    pub distribution_content: String,
}

impl LessonInfo {
    pub fn builder() -> LessonInfoBuilder {
        LessonInfoBuilder::default()
    }

    /// True when the lesson body has something other than whitespace.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// The distribution excerpt, or `None` when it is blank.
    pub fn distribution_reference(&self) -> Option<&str> {
        if self.distribution_content.trim().is_empty() {
            None
        } else {
            Some(&self.distribution_content)
        }
    }
}

/// Flags steering the transformation. Independent of each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// Analyse and suggest competencies without touching the lesson body.
    #[serde(default)]
    pub analyze_only: bool,
    /// Ask for a rationale section explaining each chosen competency.
    #[serde(default)]
    pub detailed_report: bool,
}
