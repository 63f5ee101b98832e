//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Categories
//!
//! - **Auth**: credential missing or rejected (select stub backend)
//! - **Network**: transport or timeout failures (degrade, never abort)
//! - **Transient**: temporary server issues
//! - **Unavailable**: backend unreachable
//!
//! ## Design Principles
//!
//! - Single unified error type (Eli5Error) for the entire application
//! - Backend failures degrade explanation quality, they never abort the run
//! - No panic/unwrap - all errors are recoverable

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

/// Backend error categories for logging and fallback decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Authentication failed - credential missing or rejected
    Auth,
    /// Network/connectivity issues, including timeouts
    Network,
    /// Rate limited by the remote API
    RateLimit,
    /// Invalid request - fix request, don't retry
    BadRequest,
    /// Temporary server issues
    Transient,
    /// Backend unreachable or not configured
    Unavailable,
    /// Unknown error
    Unknown,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth => write!(f, "AUTH"),
            Self::Network => write!(f, "NETWORK"),
            Self::RateLimit => write!(f, "RATE_LIMIT"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Transient => write!(f, "TRANSIENT"),
            Self::Unavailable => write!(f, "UNAVAILABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// =============================================================================
// Backend Error
// =============================================================================

/// Structured backend error with category and originating backend
#[derive(Debug, Clone)]
pub struct BackendError {
    /// Error category for routing decisions
    pub category: ErrorCategory,
    /// Detailed error message
    pub message: String,
    /// Backend that produced the error
    pub backend: Option<String>,
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(backend) = &self.backend {
            write!(f, "[{}:{}] {}", backend, self.category, self.message)
        } else {
            write!(f, "[{}] {}", self.category, self.message)
        }
    }
}

impl std::error::Error for BackendError {}

impl BackendError {
    /// Create a new backend error
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            backend: None,
        }
    }

    /// Create error with backend context
    pub fn with_backend(
        category: ErrorCategory,
        message: impl Into<String>,
        backend: impl Into<String>,
    ) -> Self {
        Self {
            category,
            message: message.into(),
            backend: Some(backend.into()),
        }
    }

    /// Classify an HTTP status code into an error category
    pub fn from_http_status(status: u16, message: impl Into<String>, backend: impl Into<String>) -> Self {
        let category = match status {
            401 | 403 => ErrorCategory::Auth,
            429 => ErrorCategory::RateLimit,
            400 => ErrorCategory::BadRequest,
            404 => ErrorCategory::Unavailable,
            500 | 502 | 503 | 504 => ErrorCategory::Transient,
            _ => ErrorCategory::Unknown,
        };
        Self::with_backend(category, message, backend)
    }

    /// Unavailable backend (missing credential, not configured)
    pub fn unavailable(message: impl Into<String>, backend: impl Into<String>) -> Self {
        Self::with_backend(ErrorCategory::Unavailable, message, backend)
    }

    /// Network or transport failure
    pub fn network(message: impl Into<String>, backend: impl Into<String>) -> Self {
        Self::with_backend(ErrorCategory::Network, message, backend)
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum Eli5Error {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Structured backend error with category
    #[error("Backend error: {0}")]
    Backend(BackendError),

    #[error("Config error: {0}")]
    Config(String),

    /// Invalid invocation arguments; the only hard failure in normal operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<BackendError> for Eli5Error {
    fn from(err: BackendError) -> Self {
        Eli5Error::Backend(err)
    }
}

pub type Result<T> = std::result::Result<T, Eli5Error>;

// =============================================================================
// Tests
// =============================================================================
