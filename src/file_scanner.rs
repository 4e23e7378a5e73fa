use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

use crate::scan::glob::IgnoreMatcher;

/// A candidate source file discovered by traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path on disk, used for reading.
    pub path: PathBuf,
    /// Path relative to the scan root with `/` separators, used for ignore
    /// matching and display.
    pub relative: String,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Candidate files sorted by relative path for deterministic output.
    pub files: Vec<SourceFile>,
    pub skipped_count: usize,
}

pub fn scan_files(root: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let matcher = IgnoreMatcher::new(ignore_patterns);
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !is_scannable_file(path) {
            continue;
        }

        let relative = relative_path(root, path);
        if matcher.is_ignored(&relative) {
            continue;
        }

        files.push(SourceFile {
            path: path.to_path_buf(),
            relative,
        });
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));

    ScanResult {
        files,
        skipped_count,
    }
}

// Relative path as a forward-slash string, so ignore patterns behave the
// same on every platform.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
