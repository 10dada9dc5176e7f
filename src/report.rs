//! Report assembly and rendering
//!
//! Turns a scan outcome into deterministic output. The ordering is a hard
//! contract: both aggregates sort by count descending, ties broken by
//! token ascending.

use crate::keywords::{KeywordTable, Profile};
use crate::scanner::{FileHits, ScanOutcome};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// One unsupported token with its full location detail.
#[derive(Debug, Clone, Serialize)]
pub struct UnsupportedFinding {
    pub token: &'static str,
    pub count: u64,
    pub files: Vec<FileHits>,
}

/// One supported token; counts only, no locations.
#[derive(Debug, Clone, Serialize)]
pub struct SupportedFinding {
    pub token: &'static str,
    pub count: u64,
}

/// Final, sorted, read-only view of a scan.
#[derive(Debug, Serialize)]
pub struct Report {
    pub profile: Profile,
    pub files_processed: usize,
    /// Extension-skipped plus unreadable files, the summary-line number.
    pub files_skipped: usize,
    pub unsupported: Vec<UnsupportedFinding>,
    pub supported: Vec<SupportedFinding>,
    pub skipped_files: Vec<PathBuf>,
    pub excepted_files: Vec<PathBuf>,
}

impl Report {
    pub fn build(profile: Profile, outcome: ScanOutcome) -> Self {
        let mut unsupported: Vec<UnsupportedFinding> = outcome
            .unsupported
            .into_iter()
            .map(|(token, hits)| UnsupportedFinding {
                token,
                count: hits.count,
                files: hits.files,
            })
            .collect();
        unsupported.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(b.token)));

        let mut supported: Vec<SupportedFinding> = outcome
            .supported
            .into_iter()
            .map(|(token, count)| SupportedFinding { token, count })
            .collect();
        supported.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(b.token)));

        Self {
            profile,
            files_processed: outcome.files_processed,
            files_skipped: outcome.skipped.len() + outcome.excepted.len(),
            unsupported,
            supported,
            skipped_files: outcome.skipped,
            excepted_files: outcome.excepted,
        }
    }

    /// 0 when no unsupported operator was found, 1 otherwise. The sole
    /// success/failure signal for the invoking shell.
    pub fn exit_code(&self) -> i32 {
        if self.unsupported.is_empty() {
            0
        } else {
            1
        }
    }

    /// Human-readable report. `color` wraps section headers in ANSI codes;
    /// detail lines stay plain either way.
    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Processed {} files, skipped {} files",
            self.files_processed, self.files_skipped
        );

        if self.unsupported.is_empty() {
            out.push('\n');
            out.push_str(&paint("No unsupported operators found.", GREEN, color));
            out.push('\n');
        } else {
            out.push('\n');
            let header = format!(
                "The following {} unsupported operators were found:",
                self.unsupported.len()
            );
            out.push_str(&paint(&header, RED, color));
            out.push('\n');
            for finding in &self.unsupported {
                let _ = writeln!(out, "  {} | found {} time(s)", finding.token, finding.count);
            }

            out.push('\n');
            out.push_str(&paint(
                "Unsupported operators by filename and line number:",
                RED,
                color,
            ));
            out.push('\n');
            for finding in &self.unsupported {
                let _ = writeln!(out, "  {} | found {} time(s)", finding.token, finding.count);
                for hits in &finding.files {
                    let _ = writeln!(out, "    {} | lines = {:?}", hits.path.display(), hits.lines);
                }
            }
        }

        if !self.supported.is_empty() {
            out.push('\n');
            let header = format!(
                "The following {} supported operators were found:",
                self.supported.len()
            );
            out.push_str(&paint(&header, GREEN, color));
            out.push('\n');
            for finding in &self.supported {
                let _ = writeln!(out, "  - {} | found {} time(s)", finding.token, finding.count);
            }
        }

        if !self.skipped_files.is_empty() {
            out.push('\n');
            out.push_str("List of skipped files - excluded extensions\n");
            for path in &self.skipped_files {
                let _ = writeln!(out, "  {}", path.display());
            }
        }

        if !self.excepted_files.is_empty() {
            out.push('\n');
            out.push_str("List of skipped files - unsupported file type/content\n");
            for path in &self.excepted_files {
                let _ = writeln!(out, "  {}", path.display());
            }
        }

        out
    }

    /// Machine-readable report with the same sorted aggregates.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Dump the whole operator table as seen under one profile.
pub fn render_operator_list(profile: Profile) -> String {
    let table = KeywordTable::global();
    let mut out = String::new();
    let _ = writeln!(out, "Operator support for target {}:", profile);
    let mut supported = 0usize;
    for entry in table.entries() {
        let status = entry.status(profile);
        if status.is_supported() {
            supported += 1;
        }
        let _ = writeln!(
            out,
            "  {} | {} | introduced in {}",
            entry.token,
            status.as_str(),
            entry.introduced
        );
    }
    let _ = writeln!(
        out,
        "{} operators, {} supported, {} unsupported",
        table.len(),
        supported,
        table.len() - supported
    );
    out
}

const RED: &str = "31";
const GREEN: &str = "32";

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
