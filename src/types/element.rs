//! Core Data Model
//!
//! Entities flowing through the pipeline: scanned elements, backend
//! requests, and resolved results. All are transient and single-pass:
//! created once, never mutated, consumed within one invocation. Element
//! identity is positional (its index in the scan's output sequence), so
//! duplicate signatures are legal and distinct.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Element Kind
// =============================================================================

/// Kind of a marked code element, derived from its declaration keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Class,
    Interface,
    Enum,
    Method,
    Field,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Class => write!(f, "Class"),
            ElementKind::Interface => write!(f, "Interface"),
            ElementKind::Enum => write!(f, "Enum"),
            ElementKind::Method => write!(f, "Method"),
            ElementKind::Field => write!(f, "Field"),
        }
    }
}

// =============================================================================
// Marked Element
// =============================================================================

/// A code element discovered by the scanner, immutable once produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkedElement {
    /// Element name extracted from its declaration
    pub name: String,
    /// Declaration kind
    pub kind: ElementKind,
    /// Declaration signature as found in the source
    pub signature: String,
    /// Method body text, when extraction was requested and succeeded
    pub body: Option<String>,
    /// Inline prompt attribute carried by the marker, if any
    pub custom_prompt: Option<String>,
    /// File the element was found in
    pub source_file: PathBuf,
    /// 1-based line number of the marker occurrence
    pub source_line: usize,
}

impl MarkedElement {
    /// Project this element into a backend request.
    ///
    /// The orchestrator owns a 1:1, order-preserving mapping from elements
    /// to requests; this is its per-element step.
    pub fn to_request(&self) -> ExplanationRequest {
        ExplanationRequest {
            signature: self.signature.clone(),
            body: self.body.clone(),
            custom_prompt: self.custom_prompt.clone(),
        }
    }
}

// =============================================================================
// Explanation Request
// =============================================================================

/// Read-only projection of a MarkedElement for backend consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationRequest {
    pub signature: String,
    pub body: Option<String>,
    pub custom_prompt: Option<String>,
}

// =============================================================================
// Explanation Result
// =============================================================================

/// One resolved explanation per element, emitted in input order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationResult {
    pub element_name: String,
    pub element_kind: ElementKind,
    pub signature: String,
    pub body: Option<String>,
    pub explanation: String,
    pub custom_prompt: Option<String>,
}
