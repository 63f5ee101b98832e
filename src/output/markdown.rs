//! Markdown Renderer
//!
//! Renders the ordered explanation results as a Markdown document with a
//! generated-on header, a table of contents, and one section per element.

use chrono::Local;

use super::DocumentRenderer;
use crate::types::ExplanationResult;

pub struct MarkdownRenderer;

impl MarkdownRenderer {
    fn section(result: &ExplanationResult) -> String {
        let mut section = format!(
            "## {}: {}\n\n**Code:**\n```java\n{}",
            result.element_kind, result.element_name, result.signature
        );

        if let Some(body) = result.body.as_deref().filter(|b| !b.trim().is_empty()) {
            section.push('\n');
            section.push_str(body);
        }
        section.push_str("\n```\n\n");

        if let Some(prompt) = result
            .custom_prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
        {
            section.push_str(&format!("**Custom Context:** {}\n\n", prompt));
        }

        section.push_str(&format!(
            "**Explanation:**\n{}\n\n---\n\n",
            result.explanation
        ));
        section
    }

    fn anchor(name: &str) -> String {
        name.to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect()
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, results: &[ExplanationResult]) -> String {
        let mut markdown = String::from("# ELI5 Documentation\n\n");
        markdown.push_str(&format!(
            "*Generated on {}*\n\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        markdown.push_str(
            "This documentation explains the code in simple terms, as if explaining to a 5-year-old.\n\n",
        );

        if !results.is_empty() {
            markdown.push_str("## Table of Contents\n\n");
            for result in results {
                markdown.push_str(&format!(
                    "- [{}](#{})\n",
                    result.element_name,
                    Self::anchor(&result.element_name)
                ));
            }
            markdown.push('\n');
        }

        for result in results {
            markdown.push_str(&Self::section(result));
        }

        markdown
    }

    fn file_extension(&self) -> &str {
        ".md"
    }

    fn default_filename(&self) -> &str {
        "eli5.md"
    }
}
