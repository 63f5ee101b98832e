use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::constants::scanner;
use crate::types::Result;

/// Walks a source tree collecting files eligible for marker scanning.
///
/// Only files carrying the recognized source extension are returned, in
/// sorted path order so downstream element discovery is deterministic.
pub struct FileScanner {
    root: PathBuf,
    exclude: Vec<String>,
    max_file_size: u64,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            exclude: vec![],
            max_file_size: scanner::MAX_FILE_SIZE,
        }
    }

    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .follow_links(false) // Security: prevent symlink traversal attacks
            .build();

        for entry in walker.filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            if self.should_exclude(path) {
                continue;
            }

            if !self.check_source_extension(path) {
                continue;
            }

            if let Ok(metadata) = path.metadata() {
                if metadata.len() > self.max_file_size {
                    continue;
                }

                files.push(path.to_path_buf());
            }
        }

        // Walk order depends on the file system; sort for a stable sequence
        files.sort();

        Ok(files)
    }

    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return true;
            }
        }

        false
    }

    fn check_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| ext == scanner::SOURCE_EXTENSION)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A.java"), "class A {}").unwrap();
        fs::write(dir.path().join("b.txt"), "not source").unwrap();
        fs::write(dir.path().join("c.rs"), "fn main() {}").unwrap();

        let files = FileScanner::new(dir.path()).scan().unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("A.java"));
    }

    #[test]
    fn test_scan_returns_sorted_paths() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Zeta.java"), "").unwrap();
        fs::write(dir.path().join("Alpha.java"), "").unwrap();
        fs::write(dir.path().join("Mid.java"), "").unwrap();

        let files = FileScanner::new(dir.path()).scan().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha.java", "Mid.java", "Zeta.java"]);
    }

    #[test]
    fn test_scan_respects_exclude_patterns() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("generated")).unwrap();
        fs::write(dir.path().join("Keep.java"), "").unwrap();
        fs::write(dir.path().join("generated/Skip.java"), "").unwrap();

        let files = FileScanner::new(dir.path())
            .with_exclude(vec!["**/generated/**".to_string()])
            .scan()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("Keep.java"));
    }

    #[test]
    fn test_scan_skips_oversized_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Big.java"), "x".repeat(4096)).unwrap();

        let files = FileScanner::new(dir.path())
            .with_max_file_size(1024)
            .scan()
            .unwrap();
        assert!(files.is_empty());
    }
}
