//! eli5doc - Explain-Like-I'm-5 Documentation Generator
//!
//! Discovers marked code elements in a source tree, sends them to a
//! pluggable natural-language generation backend for simplified
//! explanations, and assembles the results into a Markdown document.
//!
//! ## Core Features
//!
//! - **Heuristic Scanning**: best-effort, marker-driven element discovery
//!   without a full language parser
//! - **Pluggable Backends**: remote generative backend with an
//!   always-available stub fallback
//! - **Batched Explanations**: one network call amortized across all
//!   elements, with a three-tier degradation policy
//! - **Total Coverage**: every scanned element yields exactly one result,
//!   in scan order, regardless of backend failures
//!
//! ## Quick Start
//!
//! ```ignore
//! use eli5doc::{BatchOrchestrator, ConfigLoader, ElementScanner, select_backend};
//!
//! let config = ConfigLoader::load()?;
//! let elements = ElementScanner::new("src/main/java", &config.scan).scan()?;
//! let orchestrator = BatchOrchestrator::new(select_backend(&config.openai));
//! let results = orchestrator.explain_all(&elements).await;
//! ```
//!
//! ## Modules
//!
//! - [`scanner`]: source tree walking and marked-element discovery
//! - [`backend`]: explanation backend abstraction and batch protocol
//! - [`pipeline`]: batch orchestration and result assembly
//! - [`output`]: document rendering
//! - [`config`]: layered configuration loading

pub mod backend;
pub mod cli;
pub mod config;
pub mod constants;
pub mod output;
pub mod pipeline;
pub mod scanner;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, OpenAiConfig, OutputConfig, ScanConfig};

// Error Types
pub use types::error::{BackendError, Eli5Error, ErrorCategory, Result};

// Data Model
pub use types::{ElementKind, ExplanationRequest, ExplanationResult, MarkedElement};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use pipeline::{BatchOrchestrator, assemble};

// =============================================================================
// Backend Re-exports
// =============================================================================

pub use backend::{
    ExplanationBackend, OpenAiBackend, SharedBackend, StubBackend, select_backend,
};

// =============================================================================
// Scanner & Output Re-exports
// =============================================================================

pub use output::{DocumentRenderer, MarkdownRenderer};
pub use scanner::{ElementScanner, FileScanner};
