//! Generate Command
//!
//! The full pipeline: scan the source tree, select a backend, generate
//! explanations in batch, and write the document.

use console::style;
use std::path::PathBuf;

use crate::backend::select_backend;
use crate::config::ConfigLoader;
use crate::output::{DocumentRenderer, MarkdownRenderer};
use crate::pipeline::BatchOrchestrator;
use crate::scanner::ElementScanner;
use crate::types::Result;

pub async fn run(source: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let config = ConfigLoader::load()?;

    println!(
        "Scanning for {} markers in: {}",
        style(&config.scan.marker).cyan(),
        source.display()
    );

    // The scanner rejects a missing source directory before anything runs
    let elements = ElementScanner::new(&source, &config.scan).scan()?;

    if elements.is_empty() {
        println!("No {} markers found.", config.scan.marker);
        return Ok(());
    }

    println!("Found {} marked elements:", style(elements.len()).green());
    for element in &elements {
        println!("  - {}: {}", element.kind, style(&element.name).bold());
    }

    let backend = select_backend(&config.openai);
    println!("Generating explanations with {} backend...", backend.name());

    let orchestrator = BatchOrchestrator::new(backend);
    let results = orchestrator.explain_all(&elements).await;

    let output_path = output.unwrap_or_else(|| PathBuf::from(&config.output.path));
    println!("Writing documentation to: {}", output_path.display());

    MarkdownRenderer.write(&results, &output_path)?;

    println!("{} Documentation generated successfully", style("✓").green());
    Ok(())
}
