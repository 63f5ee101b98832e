//! Marked Element Discovery
//!
//! Heuristic, best-effort location of marked declarations in source text.
//! This is deliberately not a parser: each marker line opens a small
//! bounded window of subsequent lines, and the first line starting with a
//! recognized declaration keyword determines the element's kind and name.
//! A marker with no declaration inside its window is silently dropped.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::file_scanner::FileScanner;
use crate::config::ScanConfig;
use crate::constants::scanner;
use crate::types::{Eli5Error, ElementKind, MarkedElement, Result};

/// Scans a source tree for marked elements, in file-then-line order.
pub struct ElementScanner {
    root: PathBuf,
    marker: String,
    include_body: bool,
    exclude: Vec<String>,
    max_file_size: u64,
}

impl ElementScanner {
    pub fn new<P: AsRef<Path>>(root: P, config: &ScanConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            marker: config.marker.clone(),
            include_body: config.include_body,
            exclude: config.exclude.clone(),
            max_file_size: config.max_file_size,
        }
    }

    /// Scan the source tree.
    ///
    /// A missing root directory is the only hard failure; unreadable files
    /// are logged and skipped so one bad file never aborts the scan.
    pub fn scan(&self) -> Result<Vec<MarkedElement>> {
        if !self.root.exists() {
            return Err(Eli5Error::InvalidInput(format!(
                "Source directory does not exist: {}",
                self.root.display()
            )));
        }

        let files = FileScanner::new(&self.root)
            .with_exclude(self.exclude.clone())
            .with_max_file_size(self.max_file_size)
            .scan()?;

        debug!("Scanning {} source files for {}", files.len(), self.marker);

        let mut elements = Vec::new();
        for path in &files {
            match fs::read_to_string(path) {
                Ok(content) => elements.extend(self.scan_content(&content, path)),
                Err(e) => {
                    warn!("Error scanning file {}: {}", path.display(), e);
                }
            }
        }

        debug!("Found {} marked elements", elements.len());
        Ok(elements)
    }

    /// Scan a single file's text for marked elements.
    fn scan_content(&self, content: &str, path: &Path) -> Vec<MarkedElement> {
        if !content.contains(&self.marker) {
            return Vec::new();
        }

        let lines: Vec<&str> = content.lines().collect();
        let mut elements = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if !line.contains(&self.marker) {
                continue;
            }

            let custom_prompt = extract_custom_prompt(line, &self.marker);

            // Look for the declaration on the next few lines
            let window_end = (i + 1 + scanner::DECLARATION_WINDOW).min(lines.len());
            for j in (i + 1)..window_end {
                let declaration = lines[j].trim();
                if !starts_with_declaration_keyword(declaration) {
                    continue;
                }

                let kind = extract_kind(declaration);
                let name = extract_name(declaration);
                let body = if self.include_body && kind == ElementKind::Method {
                    extract_method_body(&lines, j)
                } else {
                    None
                };

                elements.push(MarkedElement {
                    name,
                    kind,
                    signature: extract_signature(declaration),
                    body,
                    custom_prompt,
                    source_file: path.to_path_buf(),
                    source_line: i + 1,
                });
                break;
            }
            // No declaration in the window: the marker is silently dropped
        }

        elements
    }
}

/// Check whether a trimmed line starts with a recognized declaration keyword
fn starts_with_declaration_keyword(line: &str) -> bool {
    scanner::DECLARATION_KEYWORDS
        .iter()
        .any(|kw| line.starts_with(kw))
}

/// Classify a declaration line into an element kind
fn extract_kind(line: &str) -> ElementKind {
    if line.contains("class") {
        ElementKind::Class
    } else if line.contains("interface") {
        ElementKind::Interface
    } else if line.contains("enum") {
        ElementKind::Enum
    } else if line.contains('(') {
        ElementKind::Method
    } else {
        ElementKind::Field
    }
}

/// Heuristic name extraction from a declaration line.
///
/// For type declarations: the identifier following the type keyword,
/// generics stripped. For members: the identifier after the modifier and
/// return type, parameter list stripped.
fn extract_name(line: &str) -> String {
    let parts: Vec<&str> = line.split_whitespace().collect();

    for (i, part) in parts.iter().enumerate() {
        if matches!(*part, "class" | "interface" | "enum") {
            if let Some(next) = parts.get(i + 1) {
                return next
                    .split(['<', '{'])
                    .next()
                    .unwrap_or(next)
                    .to_string();
            }
        } else if matches!(*part, "public" | "private" | "protected")
            && i + 2 < parts.len()
            && parts[i + 1] != "class"
            && parts[i + 1] != "interface"
        {
            let candidate = parts[i + 2];
            return candidate
                .split(['(', ';'])
                .next()
                .unwrap_or(candidate)
                .to_string();
        }
    }

    "Unknown".to_string()
}

/// Declaration signature: the trimmed line, without a trailing block opener
fn extract_signature(line: &str) -> String {
    line.trim_end_matches('{').trim().to_string()
}

/// Extract a quoted `prompt = "..."` attribute from the marker line, if any
fn extract_custom_prompt(line: &str, marker: &str) -> Option<String> {
    let after_marker = &line[line.find(marker)? + marker.len()..];
    let after_key = &after_marker[after_marker.find("prompt")? + "prompt".len()..];
    let after_eq = &after_key[after_key.find('=')? + 1..];

    let open = after_eq.find('"')?;
    let quoted = &after_eq[open + 1..];
    let close = quoted.find('"')?;

    let prompt = quoted[..close].trim();
    if prompt.is_empty() {
        None
    } else {
        Some(prompt.to_string())
    }
}

/// Best-effort extraction of a method body by brace matching.
///
/// Returns the text between the declaration's outer braces, one trimmed
/// statement line per line. Declarations without a block (abstract or
/// interface methods) and unbalanced constructs yield `None` rather than
/// failing the scan. Braces inside string literals are an accepted blind
/// spot of the heuristic.
fn extract_method_body(lines: &[&str], decl_idx: usize) -> Option<String> {
    let text = lines[decl_idx..].join("\n");
    let open = text.find('{')?;

    // A ';' before any block means there is no body to extract
    if text[..open].contains(';') {
        return None;
    }

    let mut depth = 0usize;
    for (idx, ch) in text[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let inner = &text[open + 1..open + idx];
                    let body = inner
                        .lines()
                        .map(str::trim)
                        .filter(|l| !l.is_empty())
                        .collect::<Vec<_>>()
                        .join("\n");
                    return if body.is_empty() { None } else { Some(body) };
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scanner_for(dir: &TempDir) -> ElementScanner {
        ElementScanner::new(dir.path(), &ScanConfig::default())
    }

    const SAMPLE: &str = r#"
package com.example;

public class Calculator {

    @ExplainLikeImFive
    public int add(int a, int b) {
        return a + b;
    }

    @ExplainLikeImFive(prompt = "Focus on the rounding behavior")
    private double divide(double a, double b) {
        double result = a / b;
        return result;
    }
}
"#;

    #[test]
    fn test_scan_finds_marked_methods() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Calculator.java"), SAMPLE).unwrap();

        let elements = scanner_for(&dir).scan().unwrap();
        assert_eq!(elements.len(), 2);

        assert_eq!(elements[0].name, "add");
        assert_eq!(elements[0].kind, ElementKind::Method);
        assert_eq!(elements[0].signature, "public int add(int a, int b)");
        assert_eq!(elements[0].body.as_deref(), Some("return a + b;"));
        assert_eq!(elements[0].custom_prompt, None);

        assert_eq!(elements[1].name, "divide");
        assert_eq!(
            elements[1].custom_prompt.as_deref(),
            Some("Focus on the rounding behavior")
        );
        assert_eq!(
            elements[1].body.as_deref(),
            Some("double result = a / b;\nreturn result;")
        );
    }

    #[test]
    fn test_scan_missing_root_is_hard_failure() {
        let dir = TempDir::new().unwrap();
        let scanner = ElementScanner::new(dir.path().join("no-such-dir"), &ScanConfig::default());
        assert!(matches!(
            scanner.scan(),
            Err(Eli5Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_marker_without_declaration_is_dropped() {
        let dir = TempDir::new().unwrap();
        let source = "// @ExplainLikeImFive\n\n\n\n\n\nint later;\n";
        fs::write(dir.path().join("Orphan.java"), source).unwrap();

        let elements = scanner_for(&dir).scan().unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_class_declaration() {
        let dir = TempDir::new().unwrap();
        let source = "@ExplainLikeImFive\npublic class Inventory<T> {\n}\n";
        fs::write(dir.path().join("Inventory.java"), source).unwrap();

        let elements = scanner_for(&dir).scan().unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "Inventory");
        assert_eq!(elements[0].kind, ElementKind::Class);
        assert_eq!(elements[0].body, None);
    }

    #[test]
    fn test_interface_and_field_declarations() {
        let dir = TempDir::new().unwrap();
        let source = "\
@ExplainLikeImFive
public interface Repository {
}

class Holder {
    @ExplainLikeImFive
    private int counter;
}
";
        fs::write(dir.path().join("Mixed.java"), source).unwrap();

        let elements = scanner_for(&dir).scan().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].kind, ElementKind::Interface);
        assert_eq!(elements[0].name, "Repository");
        assert_eq!(elements[1].kind, ElementKind::Field);
        assert_eq!(elements[1].name, "counter");
    }

    #[test]
    fn test_abstract_method_has_no_body() {
        let dir = TempDir::new().unwrap();
        let source = "\
public interface Shape {
    @ExplainLikeImFive
    public double area(double radius);
}
";
        fs::write(dir.path().join("Shape.java"), source).unwrap();

        let elements = scanner_for(&dir).scan().unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind, ElementKind::Method);
        assert_eq!(elements[0].body, None);
    }

    #[test]
    fn test_duplicate_signatures_are_distinct_elements() {
        let dir = TempDir::new().unwrap();
        let method = "    @ExplainLikeImFive\n    public int get() {\n        return 1;\n    }\n";
        let source = format!("class A {{\n{m}{m}}}\n", m = method);
        fs::write(dir.path().join("A.java"), source).unwrap();

        let elements = scanner_for(&dir).scan().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].signature, elements[1].signature);
        assert_ne!(elements[0].source_line, elements[1].source_line);
    }

    #[test]
    fn test_file_then_line_order() {
        let dir = TempDir::new().unwrap();
        let source_a = "@ExplainLikeImFive\nclass First {}\n";
        let source_b = "@ExplainLikeImFive\nclass Second {}\n";
        fs::write(dir.path().join("B.java"), source_b).unwrap();
        fs::write(dir.path().join("A.java"), source_a).unwrap();

        let elements = scanner_for(&dir).scan().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].name, "First");
        assert_eq!(elements[1].name, "Second");
    }

    #[test]
    fn test_unreadable_file_does_not_abort_scan() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Good.java"), "@ExplainLikeImFive\nclass Good {}\n").unwrap();
        // Invalid UTF-8 makes read_to_string fail for this file only
        fs::write(dir.path().join("Bad.java"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let elements = scanner_for(&dir).scan().unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "Good");
    }

    #[test]
    fn test_extract_name_fallback() {
        assert_eq!(extract_name("protected transient"), "Unknown");
        assert_eq!(extract_name("public static void main(String[] args)"), "void");
    }

    #[test]
    fn test_extract_kind_precedence() {
        assert_eq!(extract_kind("public class Foo {"), ElementKind::Class);
        assert_eq!(extract_kind("public interface Foo {"), ElementKind::Interface);
        assert_eq!(extract_kind("public enum Color {"), ElementKind::Enum);
        assert_eq!(extract_kind("public int add(int a)"), ElementKind::Method);
        assert_eq!(extract_kind("private int counter;"), ElementKind::Field);
    }
}
