//! Configuration Types
//!
//! All configuration structures with sensible defaults. Loaded once into an
//! immutable snapshot and passed into components at construction time.

use serde::{Deserialize, Serialize};

use crate::constants::{openai, output, scanner};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Remote backend settings
    pub openai: OpenAiConfig,

    /// Element scanning settings
    pub scan: ScanConfig,

    /// Documentation output settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            openai: OpenAiConfig::default(),
            scan: ScanConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `Eli5Error::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(crate::types::Eli5Error::Config(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.openai.temperature
            )));
        }

        if self.openai.timeout_secs == 0 {
            return Err(crate::types::Eli5Error::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.openai.max_tokens == 0 {
            return Err(crate::types::Eli5Error::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }

        if self.scan.marker.trim().is_empty() {
            return Err(crate::types::Eli5Error::Config(
                "scan marker must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Remote Backend Configuration
// =============================================================================

/// Settings for the OpenAI-compatible remote backend.
///
/// The API key is resolved here or from the `ELI5_API_KEY` environment
/// variable inside the backend constructor; it is never serialized back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// API key; never written to output
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL (for custom endpoints)
    pub api_base: String,

    /// Model identifier
    pub model: String,

    /// Token budget per element (scaled linearly for batch calls)
    pub max_tokens: usize,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in seconds (doubled for batch calls)
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: openai::DEFAULT_API_BASE.to_string(),
            model: openai::DEFAULT_MODEL.to_string(),
            max_tokens: openai::DEFAULT_MAX_TOKENS,
            temperature: openai::DEFAULT_TEMPERATURE,
            timeout_secs: openai::DEFAULT_TIMEOUT_SECS,
        }
    }
}

// =============================================================================
// Scan Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Marker token identifying elements to explain
    pub marker: String,

    /// Whether to extract method bodies for explanation context
    pub include_body: bool,

    /// Glob patterns of paths to skip
    pub exclude: Vec<String>,

    /// Maximum file size to scan (bytes)
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            marker: scanner::MARKER.to_string(),
            include_body: true,
            exclude: vec![
                "target/**".to_string(),
                "build/**".to_string(),
                ".git/**".to_string(),
            ],
            max_file_size: scanner::MAX_FILE_SIZE,
        }
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Documentation output path
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: output::DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.openai.model, "gpt-4.1-nano");
        assert_eq!(config.openai.max_tokens, 500);
        assert_eq!(config.openai.timeout_secs, 30);
    }

    #[test]
    fn test_validate_rejects_bad_temperature() {
        let mut config = Config::default();
        config.openai.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.openai.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_marker() {
        let mut config = Config::default();
        config.scan.marker = "   ".to_string();
        assert!(config.validate().is_err());
    }
}
