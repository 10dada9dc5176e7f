//! Sequential scan pass
//!
//! Walks the file list in order, checks every line against every operator
//! in the compatibility table, and accumulates findings into an owned
//! outcome value — no ambient state, so two scans of the same inputs
//! produce identical results.

use crate::keywords::{KeywordTable, Profile, Support};
use crate::matcher::line_contains_token;
use crate::progress;
use crate::walk::FileSelection;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Line numbers where one token was found in one file, in scan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHits {
    pub path: PathBuf,
    pub lines: Vec<usize>,
}

/// Accumulated findings for one token across the whole scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenHits {
    pub count: u64,
    /// Per-file detail, in the order files were scanned.
    pub files: Vec<FileHits>,
}

impl TokenHits {
    fn record(&mut self, path: &Path, line_number: usize) {
        self.count += 1;
        // Files are scanned one at a time, so the current file is always
        // the last detail entry if it already has hits.
        match self.files.last_mut() {
            Some(hits) if hits.path == path => hits.lines.push(line_number),
            _ => self.files.push(FileHits {
                path: path.to_path_buf(),
                lines: vec![line_number],
            }),
        }
    }
}

/// Everything one scan pass produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// token -> count and per-file line detail; always populated.
    pub unsupported: HashMap<&'static str, TokenHits>,
    /// token -> count only; populated only when supported findings were
    /// requested.
    pub supported: HashMap<&'static str, u64>,
    /// Files the extension filter rejected.
    pub skipped: Vec<PathBuf>,
    /// Files that could not be read or decoded.
    pub excepted: Vec<PathBuf>,
    /// Files successfully read and scanned.
    pub files_processed: usize,
}

/// Single-threaded scanner over the global keyword table.
pub struct Scanner {
    table: &'static KeywordTable,
    profile: Profile,
    include_supported: bool,
}

impl Scanner {
    pub fn new(profile: Profile, include_supported: bool) -> Self {
        Self {
            table: KeywordTable::global(),
            profile,
            include_supported,
        }
    }

    /// Scan the selection's files strictly in order. A file that cannot be
    /// read or decoded lands in `excepted` and the scan moves on; nothing
    /// aborts the pass.
    pub fn scan(&self, selection: FileSelection) -> ScanOutcome {
        let mut outcome = ScanOutcome {
            skipped: selection.skipped,
            ..ScanOutcome::default()
        };
        for path in &selection.files {
            self.scan_file(path, &mut outcome);
        }
        outcome
    }

    fn scan_file(&self, path: &Path, outcome: &mut ScanOutcome) {
        progress::file_started(path);
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                outcome.excepted.push(path.to_path_buf());
                return;
            }
        };
        outcome.files_processed += 1;

        for (index, line) in contents.lines().enumerate() {
            let line_number = index + 1;
            // Every keyword is checked against every line; the table order
            // carries no precedence.
            for entry in self.table.entries() {
                match entry.status(self.profile) {
                    Support::No => {
                        if line_contains_token(line, entry.token) {
                            outcome
                                .unsupported
                                .entry(entry.token)
                                .or_default()
                                .record(path, line_number);
                        }
                    }
                    Support::Yes if self.include_supported => {
                        if line_contains_token(line, entry.token) {
                            *outcome.supported.entry(entry.token).or_default() += 1;
                        }
                    }
                    Support::Yes => {}
                }
            }
            progress::line_tick(line_number);
        }
    }
}
