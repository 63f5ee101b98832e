//! Scan Command
//!
//! Lists marked elements found in a source tree without generating
//! explanations.

use console::style;
use std::path::PathBuf;

use crate::config::ConfigLoader;
use crate::scanner::ElementScanner;
use crate::types::Result;

pub fn run(source: PathBuf) -> Result<()> {
    let config = ConfigLoader::load()?;

    println!(
        "Scanning for {} markers in: {}",
        style(&config.scan.marker).cyan(),
        source.display()
    );

    let elements = ElementScanner::new(&source, &config.scan).scan()?;

    if elements.is_empty() {
        println!("No {} markers found.", config.scan.marker);
        return Ok(());
    }

    println!("Found {} marked elements:", style(elements.len()).green());
    for element in &elements {
        println!(
            "  - {}: {} ({}:{})",
            element.kind,
            style(&element.name).bold(),
            element.source_file.display(),
            element.source_line
        );
    }

    Ok(())
}
