//! Recursive file-content scanner.
//!
//! Used by checkpoints that need to know whether a pattern occurs anywhere
//! under a source tree (e.g. raw SQL escape hatches). Scans are read-only,
//! skip dependency directories, and only look inside source files.

use std::fs;
use std::path::Path;

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

/// Directory names whose entire subtree is skipped.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build"];

/// File extensions whose contents are scanned.
pub const SCANNED_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Test whether `pattern` matches the contents of `path`.
///
/// - A missing path is `false`, not an error.
/// - A single file is tested against its full text, whatever its extension.
/// - A directory is walked recursively (symlinks are not followed, so link
///   cycles cannot recurse); subtrees named in [`EXCLUDED_DIRS`] are
///   skipped, only files with a [`SCANNED_EXTENSIONS`] extension are read,
///   and the walk short-circuits on the first match.
///
/// Unreadable files are skipped rather than treated as matches or errors.
pub fn contains_pattern(path: &Path, pattern: &Regex) -> bool {
    if path.is_file() {
        return file_matches(path, pattern);
    }
    if !path.is_dir() {
        return false;
    }

    let walker = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry));

    for entry in walker {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_file() {
            continue;
        }
        if !has_scanned_extension(entry.path()) {
            continue;
        }
        if file_matches(entry.path(), pattern) {
            return true;
        }
    }
    false
}

fn file_matches(path: &Path, pattern: &Regex) -> bool {
    match fs::read_to_string(path) {
        Ok(contents) => pattern.is_match(&contents),
        Err(_) => false,
    }
}

/// The walk root itself is never excluded (depth 0), only subdirectories.
fn is_excluded(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

fn has_scanned_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCANNED_EXTENSIONS.contains(&ext))
}
