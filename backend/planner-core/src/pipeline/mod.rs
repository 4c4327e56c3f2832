//! Lesson transformation pipeline.
//!
//! `generate(lesson, options, credential)` builds the prompt, calls the
//! remote model once and returns either the model's text or a classified
//! [`GenerationError`]. The pipeline holds no mutable state; concurrent
//! calls are independent.

pub mod classify;

pub use classify::{classify_diagnostic, normalize_output};

use crate::DEFAULT_GEMINI_MODEL;
use crate::error::{GeminiError, GenerationError};
use crate::prompt::{SYSTEM_INSTRUCTION, build_user_prompt};

use common::RedactedApiKey;
use models::{LessonInfo, ProcessingOptions};

use async_trait::async_trait;
use log::{debug, info};

/// One call to the remote text-generation capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
}

/// The opaque remote capability: prompt in, text or diagnostic out.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &RedactedApiKey,
        request: &GenerationRequest,
    ) -> Result<String, GeminiError>;
}

#[async_trait]
impl<T: GenerativeModel + ?Sized> GenerativeModel for std::sync::Arc<T> {
    async fn generate_content(
        &self,
        api_key: &RedactedApiKey,
        request: &GenerationRequest,
    ) -> Result<String, GeminiError> {
        (**self).generate_content(api_key, request).await
    }
}

pub struct LessonPipeline<M> {
    model: M,
    model_id: String,
}

impl<M: GenerativeModel> LessonPipeline<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            model_id: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Assemble the request for a lesson without sending it.
    pub fn build_request(&self, lesson: &LessonInfo, options: &ProcessingOptions) -> GenerationRequest {
        GenerationRequest {
            model: self.model_id.clone(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: build_user_prompt(lesson, options),
        }
    }

    /// Transform a lesson with the given key.
    ///
    /// # Errors
    /// - `CredentialMissing` when no key (or a blank key) is supplied; no
    ///   network call is made
    /// - `EmptyResult` when the model answers with blank text
    /// - otherwise the provider diagnostic classified by
    ///   [`classify_diagnostic`]
    pub async fn generate(
        &self,
        lesson: &LessonInfo,
        options: &ProcessingOptions,
        credential: Option<&RedactedApiKey>,
    ) -> Result<String, GenerationError> {
        let api_key = match credential {
            Some(key) if !key.is_blank() => key,
            _ => return Err(GenerationError::credential_missing()),
        };

        let request = self.build_request(lesson, options);
        info!(
            "Requesting lesson transformation from {} (analyze_only={}, detailed_report={})",
            request.model, options.analyze_only, options.detailed_report
        );
        debug!("Prompt length: {} chars", request.prompt.chars().count());

        let text = self
            .model
            .generate_content(api_key, &request)
            .await
            .map_err(|e| {
                info!("Gemini service error: {}", e);
                classify_diagnostic(&e.diagnostic())
            })?;

        let text = normalize_output(text).inspect_err(|_| {
            info!("Gemini returned an empty result");
        })?;

        info!("Received {} chars from {}", text.chars().count(), request.model);
        Ok(text)
    }
}
