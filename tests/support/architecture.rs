//! Source-tree scans backing the architecture contract tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A matching source line: relative path, 1-based line number, text.
pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn relative_path(path: &Path) -> String {
    path.strip_prefix(root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn collect_rs_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|e| {
        panic!("failed to read dir {}: {e}", dir.display());
    });

    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();
        if path.is_dir() {
            collect_rs_files_recursive(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

fn collect_rs_files(relative_dir: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_rs_files_recursive(&root().join(relative_dir), &mut files);
    files.sort();
    files
}

/// Lines of non-test code, i.e. everything before a file's `#[cfg(test)]`.
fn production_lines(file: &Path) -> Vec<(usize, String)> {
    let content = fs::read_to_string(file).unwrap_or_else(|e| {
        panic!("failed to read {}: {e}", file.display());
    });
    content
        .lines()
        .take_while(|line| line.trim() != "#[cfg(test)]")
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.to_string()))
        .collect()
}

/// Production lines under `relative_dir` containing any of `patterns`.
pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for file in collect_rs_files(relative_dir) {
        for (line_no, line) in production_lines(&file) {
            if patterns.iter().any(|p| line.contains(p)) {
                hits.push((relative_path(&file), line_no, line));
            }
        }
    }
    hits
}

/// Lines in `mod.rs` files that are not module declarations or comments.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    let mut violations = Vec::new();

    for file in collect_rs_files(relative_dir) {
        if file.file_name().and_then(|s| s.to_str()) != Some("mod.rs") {
            continue;
        }
        for (line_no, raw_line) in production_lines(&file) {
            let line = raw_line.trim();
            if line.is_empty()
                || line.starts_with("//")
                || line.starts_with("pub mod ")
                || line.starts_with("mod ")
                || line.starts_with("#[cfg")
            {
                continue;
            }
            violations.push((relative_path(&file), line_no, raw_line));
        }
    }

    violations
}
