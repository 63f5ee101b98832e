//! OpenAI API Backend
//!
//! Remote backend using OpenAI's Chat Completions API. Every call is a
//! single attempt with a bounded timeout; failures are reported to the
//! orchestrator, which owns the degradation policy. Batch calls scale the
//! token budget linearly with the element count and double the timeout.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::{ExplanationBackend, batch};
use crate::config::OpenAiConfig;
use crate::types::{BackendError, Eli5Error, ErrorCategory, ExplanationRequest, Result};

/// API key environment fallback, checked when the config carries no key
const API_KEY_ENV: &str = "ELI5_API_KEY";

/// OpenAI Chat Completions backend with secure API key handling
pub struct OpenAiBackend {
    /// API key stored securely - never exposed in logs or debug output
    api_key: Option<SecretString>,
    api_base: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
    timeout: Duration,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiBackend")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OpenAiBackend {
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(API_KEY_ENV)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
            .map(SecretString::from);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                Eli5Error::Backend(BackendError::with_backend(
                    ErrorCategory::Unknown,
                    format!("Failed to create HTTP client: {}", e),
                    "openai",
                ))
            })?;

        Ok(Self {
            api_key,
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: Duration::from_secs(config.timeout_secs),
            client,
        })
    }

    fn api_key(&self) -> Result<&SecretString> {
        self.api_key.as_ref().ok_or_else(|| {
            BackendError::unavailable(
                format!("API key not configured. Set {} or openai.api_key", API_KEY_ENV),
                "openai",
            )
            .into()
        })
    }

    /// Issue one chat-completion call and extract the generated text
    async fn complete(&self, prompt: &str, max_tokens: usize, timeout: Duration) -> Result<String> {
        let api_key = self.api_key()?;

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            max_tokens,
        };

        let url = format!("{}/chat/completions", self.api_base);
        debug!("Sending request to OpenAI API (max_tokens: {})", max_tokens);

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::network(format!("OpenAI request failed: {}", e), "openai"))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::from_http_status(
                status,
                format!("OpenAI API error: {}", body),
                "openai",
            )
            .into());
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            BackendError::network(format!("Failed to parse OpenAI response: {}", e), "openai")
        })?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                Eli5Error::Backend(BackendError::with_backend(
                    ErrorCategory::Unknown,
                    "No content in OpenAI response",
                    "openai",
                ))
            })?;

        debug!("Received explanation ({} chars)", content.len());
        Ok(content)
    }
}

#[async_trait]
impl ExplanationBackend for OpenAiBackend {
    async fn explain_one(&self, request: &ExplanationRequest) -> Result<String> {
        debug!("Generating explanation for: {}", request.signature);
        let prompt = batch::build_single_prompt(request);
        self.complete(&prompt, self.max_tokens, self.timeout).await
    }

    async fn explain_batch(&self, requests: &[ExplanationRequest]) -> Result<Vec<String>> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Generating batch explanations for {} elements", requests.len());
        let prompt = batch::build_batch_prompt(requests);

        // Token budget scales linearly with batch size; the timeout doubles
        let response = self
            .complete(&prompt, self.max_tokens * requests.len(), self.timeout * 2)
            .await?;

        Ok(batch::parse_batch_response(&response, requests.len()))
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    fn name(&self) -> &str {
        "openai"
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
