//! Explanation Backend Abstraction
//!
//! Defines the ExplanationBackend trait for pluggable natural-language
//! generation backends, with two variants: a remote generative backend
//! (OpenAI) and an always-available stub. Selection between them is an
//! explicit strategy, not implicit dispatch.
//!
//! ## Modules
//!
//! - `batch`: text-level batch framing protocol (prompt assembly, parsing)
//! - `openai`: remote Chat Completions backend
//! - `stub`: deterministic placeholder backend

pub mod batch;
mod openai;
mod stub;

pub use batch::{build_batch_prompt, build_single_prompt, parse_batch_response, shortfall_placeholder};
pub use openai::OpenAiBackend;
pub use stub::{StubBackend, stub_explanation};

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::OpenAiConfig;
use crate::types::{ExplanationRequest, Result};

/// Shared backend handle passed into the orchestrator
pub type SharedBackend = Arc<dyn ExplanationBackend + Send + Sync>;

// =============================================================================
// Explanation Backend Trait
// =============================================================================

/// Capability set implemented by every explanation backend
#[async_trait]
pub trait ExplanationBackend: Send + Sync {
    /// Generate an explanation for a single element
    async fn explain_one(&self, request: &ExplanationRequest) -> Result<String>;

    /// Generate explanations for multiple elements in one backend invocation.
    ///
    /// Returns exactly one entry per request, in request order. The default
    /// implementation issues sequential `explain_one` calls, collecting
    /// per-item failures into inline error strings rather than aborting.
    async fn explain_batch(&self, requests: &[ExplanationRequest]) -> Result<Vec<String>> {
        let mut explanations = Vec::with_capacity(requests.len());
        for request in requests {
            match self.explain_one(request).await {
                Ok(text) => explanations.push(text),
                Err(e) => explanations.push(format!("Error generating explanation: {}", e)),
            }
        }
        Ok(explanations)
    }

    /// Check if the backend is configured and usable
    fn is_available(&self) -> bool;

    /// Backend name for logging
    fn name(&self) -> &str;
}

// =============================================================================
// Backend Selection
// =============================================================================

/// Select the backend for a run: the remote backend when a credential is
/// configured, the stub otherwise. The stub path never touches the network.
pub fn select_backend(config: &OpenAiConfig) -> SharedBackend {
    match OpenAiBackend::new(config) {
        Ok(backend) if backend.is_available() => {
            info!("Using {} backend", backend.name());
            Arc::new(backend)
        }
        Ok(_) => {
            warn!(
                "OpenAI backend not available, using stub backend. \
                 Set ELI5_API_KEY for real explanations."
            );
            Arc::new(StubBackend::new())
        }
        Err(e) => {
            warn!("Failed to initialize OpenAI backend, using stub backend: {}", e);
            Arc::new(StubBackend::new())
        }
    }
}
