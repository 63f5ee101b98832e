//! Document Output
//!
//! Renderer interface for turning the ordered explanation results into a
//! document. The pipeline only depends on the trait; Markdown is the
//! default format.

mod markdown;

pub use markdown::MarkdownRenderer;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::types::{ExplanationResult, Result};

/// Output format for explanation results
pub trait DocumentRenderer {
    /// Render results to document text
    fn render(&self, results: &[ExplanationResult]) -> String;

    /// Render and write to a file, creating parent directories as needed
    fn write(&self, results: &[ExplanationResult], output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(output_path, self.render(results))?;
        info!(
            "Wrote {} explanations to: {}",
            results.len(),
            output_path.display()
        );
        Ok(())
    }

    /// File extension for this format (e.g. ".md")
    fn file_extension(&self) -> &str;

    /// Default output filename for this format
    fn default_filename(&self) -> &str;
}
