//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Element scanner constants
pub mod scanner {
    /// Marker token identifying elements selected for explanation
    pub const MARKER: &str = "@ExplainLikeImFive";

    /// Number of lines after a marker searched for a declaration
    pub const DECLARATION_WINDOW: usize = 4;

    /// File extension of scanned source files
    pub const SOURCE_EXTENSION: &str = "java";

    /// Maximum file size to scan (1MB)
    pub const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Line prefixes recognized as the start of a declaration
    pub const DECLARATION_KEYWORDS: &[&str] =
        &["public", "private", "protected", "class", "interface"];
}

/// Batch protocol constants
pub mod batch {
    /// Delimiter separating per-element answers in a batch response
    pub const EXPLANATION_DELIMITER: &str = "---EXPLANATION---";
}

/// Remote backend constants
pub mod openai {
    /// Default API base URL
    pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

    /// Default model for explanation generation
    pub const DEFAULT_MODEL: &str = "gpt-4.1-nano";

    /// Default token budget per element
    pub const DEFAULT_MAX_TOKENS: usize = 500;

    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;

    /// Default request timeout (seconds); batch requests get double
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Stub backend constants
pub mod stub {
    /// Maximum characters of body text echoed in a stub explanation
    pub const BODY_PREVIEW_LIMIT: usize = 100;

    /// Notice appended to every stub explanation
    pub const STUB_NOTICE: &str =
        "[This is a stub explanation. Configure a real AI backend for actual ELI5 explanations.]";
}

/// Output constants
pub mod output {
    /// Default documentation output path
    pub const DEFAULT_OUTPUT_PATH: &str = "eli5-docs/eli5.md";
}
