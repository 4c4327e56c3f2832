//! HTTP client for the Gemini Generative Language API.
//!
//! Serves both halves of the core: the key probe (model listing) and
//! content generation. The key is passed per call; the client itself holds
//! no credential.
//!
//! # Security
//! - Probe URLs carry the key as a query parameter, so reqwest errors are
//!   stripped of their URL before being logged or stored

pub mod wire;

use crate::config::GeminiConfig;
use crate::credential::CredentialProbe;
use crate::error::{GeminiError, ProbeError};
use crate::pipeline::{GenerationRequest, GenerativeModel};

use wire::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

use common::RedactedApiKey;

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(120);
const GEMINI_API_KEY_HEADER: &str = "x-goog-api-key";
const GEMINI_KEY_QUERY_PARAM: &str = "key";
const GEMINI_MODELS_ENDPOINT: &str = "models";

#[derive(Clone)]
pub struct GeminiClient {
    base_url: Url,
    client: Client,
}

impl GeminiClient {
    /// Create a client for `base_url` (e.g. `https://…/v1beta`).
    pub fn new(base_url_str: &str) -> Result<Self, GeminiError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(base_url_str: &str, timeout: Duration) -> Result<Self, GeminiError> {
        let mut base_url = Url::parse(base_url_str)?;

        // Url::join replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeminiError::other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    pub fn from_config(config: &GeminiConfig) -> Result<Self, GeminiError> {
        Self::with_timeout(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn generate_url(&self, model: &str) -> Result<Url, url::ParseError> {
        self.base_url
            .join(&format!("{GEMINI_MODELS_ENDPOINT}/{model}:generateContent"))
    }
}

#[async_trait]
impl CredentialProbe for GeminiClient {
    /// `GET {base}/models?key=…`; any 2xx accepts the key, the body is ignored.
    async fn probe(&self, candidate: &RedactedApiKey) -> Result<(), ProbeError> {
        let mut url = self
            .base_url
            .join(GEMINI_MODELS_ENDPOINT)
            .map_err(|e| ProbeError::url_parse(&e))?;
        url.query_pairs_mut()
            .append_pair(GEMINI_KEY_QUERY_PARAM, candidate.as_str());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(&e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProbeError::from_http_response(status.as_u16(), body));
        }

        debug!("Key probe succeeded: HTTP {}", status.as_u16());
        Ok(())
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &RedactedApiKey,
        request: &GenerationRequest,
    ) -> Result<String, GeminiError> {
        let url = self.generate_url(&request.model)?;
        let body = GenerateContentRequest::new(&request.system_instruction, &request.prompt);

        let response = self
            .client
            .post(url)
            .header(GEMINI_API_KEY_HEADER, api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            info!("Gemini generateContent failed: HTTP {}", status.as_u16());
            return Err(match serde_json::from_str::<ApiErrorEnvelope>(&text) {
                Ok(envelope) => GeminiError::api(
                    status.as_u16(),
                    envelope.error.status,
                    envelope.error.message,
                ),
                Err(_) => GeminiError::api(status.as_u16(), None, text),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        parsed.into_text()
    }
}
