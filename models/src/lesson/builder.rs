use crate::LessonInfo;
use crate::error::model_error::ModelError;

/// Builder for creating validated LessonInfo instances.
///
/// Textbook, subject and grade must be present and non-blank. Content must
/// be supplied but may be empty; deciding whether an empty lesson is worth
/// sending is left to the caller.
#[derive(Debug, Default)]
pub struct LessonInfoBuilder {
    textbook: Option<String>,
    subject: Option<String>,
    grade: Option<String>,
    content: Option<String>,
    distribution_content: Option<String>,
}

impl LessonInfoBuilder {
    pub fn with_textbook(mut self, textbook: impl Into<String>) -> Self {
        self.textbook = Some(textbook.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_distribution_content(mut self, distribution: impl Into<String>) -> Self {
        self.distribution_content = Some(distribution.into());
        self
    }

    /// Build the LessonInfo with validation.
    #[track_caller]
    pub fn build(self) -> Result<LessonInfo, ModelError> {
        let textbook = required_text(self.textbook, "Textbook")?;
        let subject = required_text(self.subject, "Subject")?;
        let grade = required_text(self.grade, "Grade")?;

        let content = self
            .content
            .ok_or_else(|| ModelError::validation("Content is required"))?;

        Ok(LessonInfo {
            textbook,
            subject,
            grade,
            content,
            distribution_content: self.distribution_content.unwrap_or_default(),
        })
    }
}

#[track_caller]
fn required_text(value: Option<String>, field: &str) -> Result<String, ModelError> {
    let value = value.ok_or_else(|| ModelError::validation(format!("{field} is required")))?;

    if value.trim().is_empty() {
        return Err(ModelError::validation(format!("{field} cannot be empty")));
    }

    Ok(value)
}
