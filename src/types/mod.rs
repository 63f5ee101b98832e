//! Core Types
//!
//! Data model and error types shared across the application.

pub mod element;
pub mod error;

pub use element::{ElementKind, ExplanationRequest, ExplanationResult, MarkedElement};
pub use error::{BackendError, Eli5Error, ErrorCategory, Result};
