//! File collection for scans
//!
//! Builds the ordered list of files to scan and records what the extension
//! filter rejected. A `--file` target bypasses filtering entirely; a
//! `--directory` target is walked recursively in traversal order.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Case-insensitive include/exclude filter over filename extensions.
///
/// An empty include list admits everything; an empty exclude list rejects
/// nothing. Exclusion wins over inclusion.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    included: Vec<String>,
    excluded: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from the raw comma-separated CLI lists.
    pub fn from_args(included: Option<&str>, excluded: Option<&str>) -> Self {
        Self {
            included: normalize_list(included),
            excluded: normalize_list(excluded),
        }
    }

    pub fn admits(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if self.excluded.iter().any(|x| *x == ext) {
            return false;
        }
        self.included.is_empty() || self.included.iter().any(|x| *x == ext)
    }
}

/// Normalize one CLI list: split on commas, trim, strip a leading dot,
/// lowercase, drop empties.
fn normalize_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(|item| item.trim().trim_start_matches('.').to_lowercase())
            .filter(|item| !item.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

/// The ordered scan list plus the files the filter rejected.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    pub files: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Walk `root` recursively, keeping regular files the filter admits.
/// Unreadable directory entries are passed over; per-file read failures are
/// the scanner's concern, not the walker's.
pub fn collect_directory(root: &Path, filter: &ExtensionFilter) -> FileSelection {
    let mut selection = FileSelection::default();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if filter.admits(&path) {
            selection.files.push(path);
        } else {
            selection.skipped.push(path);
        }
    }
    selection
}

/// A single-file target: no filtering, nothing skipped.
pub fn single_file(path: &Path) -> FileSelection {
    FileSelection {
        files: vec![path.to_path_buf()],
        skipped: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_admit_everything() {
        let filter = ExtensionFilter::from_args(None, None);
        assert!(filter.admits(Path::new("a.js")));
        assert!(filter.admits(Path::new("Makefile")));
    }

    #[test]
    fn test_include_list_is_exclusive() {
        let filter = ExtensionFilter::from_args(Some("js,py"), None);
        assert!(filter.admits(Path::new("app.js")));
        assert!(filter.admits(Path::new("run.PY")));
        assert!(!filter.admits(Path::new("notes.txt")));
        assert!(!filter.admits(Path::new("Makefile")));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filter = ExtensionFilter::from_args(Some("js"), Some("js"));
        assert!(!filter.admits(Path::new("app.js")));
    }

    #[test]
    fn test_list_normalization() {
        let filter = ExtensionFilter::from_args(Some(" .Js , PY ,"), None);
        assert!(filter.admits(Path::new("app.js")));
        assert!(filter.admits(Path::new("run.py")));
        assert!(!filter.admits(Path::new("data.json")));
    }

    #[test]
    fn test_single_file_bypasses_filtering() {
        let selection = single_file(Path::new("whatever.xyz"));
        assert_eq!(selection.files.len(), 1);
        assert!(selection.skipped.is_empty());
    }
}
