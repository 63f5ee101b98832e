//! Stub Backend
//!
//! Always-available fallback that synthesizes a deterministic templated
//! string instead of calling a generative service. Never fails.

use async_trait::async_trait;
use tracing::debug;

use super::ExplanationBackend;
use crate::constants::stub;
use crate::types::{ExplanationRequest, Result};

/// Fallback backend used when no real generative backend is configured
#[derive(Debug, Default)]
pub struct StubBackend;

impl StubBackend {
    pub fn new() -> Self {
        Self
    }
}

/// Deterministic placeholder text for a request.
///
/// Shared with the orchestrator, which emits the identical text when a
/// per-element remote fallback fails.
pub fn stub_explanation(request: &ExplanationRequest) -> String {
    let mut text = format!(
        "This is a placeholder explanation for: {}",
        request.signature
    );

    if let Some(body) = request.body.as_deref().filter(|b| !b.trim().is_empty()) {
        text.push_str("\n\nCode body: ");
        if body.chars().count() > stub::BODY_PREVIEW_LIMIT {
            text.extend(body.chars().take(stub::BODY_PREVIEW_LIMIT));
            text.push_str("...");
        } else {
            text.push_str(body);
        }
    }

    if let Some(prompt) = request
        .custom_prompt
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        text.push_str("\n\nCustom prompt: ");
        text.push_str(prompt);
    }

    text.push_str("\n\n");
    text.push_str(stub::STUB_NOTICE);
    text
}

#[async_trait]
impl ExplanationBackend for StubBackend {
    async fn explain_one(&self, request: &ExplanationRequest) -> Result<String> {
        debug!("Generating stub explanation for: {}", request.signature);
        Ok(stub_explanation(request))
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "stub"
    }
}
