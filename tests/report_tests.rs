//! Full-pipeline tests: scan, build the report, render it

use opcheck::keywords::Profile;
use opcheck::report::Report;
use opcheck::scanner::Scanner;
use opcheck::walk::{self, FileSelection};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn scan_report(files: Vec<PathBuf>, profile: Profile, show_supported: bool) -> Report {
    let scanner = Scanner::new(profile, show_supported);
    let outcome = scanner.scan(FileSelection {
        files,
        skipped: Vec::new(),
    });
    Report::build(profile, outcome)
}

#[test]
fn test_ordering_is_count_desc_then_token_asc() {
    let dir = TempDir::new().unwrap();
    // $text twice, $where and $redact once each: the tie must resolve
    // lexicographically.
    let file = write_file(&dir, "q.js", "$text\n$text\n$redact\n$where\n");

    let report = scan_report(vec![file], Profile::V6_0, false);
    let tokens: Vec<&str> = report.unsupported.iter().map(|f| f.token).collect();
    assert_eq!(tokens, vec!["$text", "$redact", "$where"]);
}

#[test]
fn test_report_text_layout() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "q.js", "$where\nagain $where\n");

    let report = scan_report(vec![file.clone()], Profile::V6_0, false);
    let text = report.render(false);

    assert!(text.contains("Processed 1 files, skipped 0 files"));
    assert!(text.contains("The following 1 unsupported operators were found:"));
    assert!(text.contains("  $where | found 2 time(s)"));
    assert!(text.contains("Unsupported operators by filename and line number:"));
    assert!(text.contains(&format!("    {} | lines = [1, 2]", file.display())));
}

#[test]
fn test_clean_scan_reports_nothing_found() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "clean.js", "no operators in here\n");

    let report = scan_report(vec![file], Profile::V6_0, false);
    assert_eq!(report.exit_code(), 0);
    assert!(report.render(false).contains("No unsupported operators found."));
}

#[test]
fn test_exit_code_reflects_findings() {
    let dir = TempDir::new().unwrap();
    let dirty = write_file(&dir, "dirty.js", "$where\n");

    let report = scan_report(vec![dirty], Profile::V6_0, false);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_supported_section_counts_only() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "agg.js", "{ \"$sum\": 1 }\n{ \"$sum\": 2 }\n");

    let report = scan_report(vec![file], Profile::V5_0, true);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.supported.len(), 1);
    assert_eq!(report.supported[0].count, 2);

    let text = report.render(false);
    assert!(text.contains("The following 1 supported operators were found:"));
    assert!(text.contains("  - $sum | found 2 time(s)"));
    // Supported findings never carry line detail.
    assert!(!text.contains("$sum | lines"));
}

#[test]
fn test_json_report_carries_sorted_aggregates() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "q.js", "$text\n$text\n$where\n");

    let report = scan_report(vec![file], Profile::V6_0, false);
    let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

    assert_eq!(json["profile"], "6.0");
    assert_eq!(json["files_processed"], 1);
    assert_eq!(json["unsupported"][0]["token"], "$text");
    assert_eq!(json["unsupported"][0]["count"], 2);
    assert_eq!(json["unsupported"][1]["token"], "$where");
    assert_eq!(json["unsupported"][1]["files"][0]["lines"][0], 3);
}

#[test]
fn test_same_file_differs_across_profiles() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "mix.js", "{ \"$sum\": 1, \"$where\": \"f\" }\n");

    let under_50 = scan_report(vec![file.clone()], Profile::V5_0, false);
    let under_60 = scan_report(vec![file], Profile::V6_0, false);

    let tokens_50: Vec<&str> = under_50.unsupported.iter().map(|f| f.token).collect();
    let tokens_60: Vec<&str> = under_60.unsupported.iter().map(|f| f.token).collect();
    assert_eq!(tokens_50, vec!["$where"]);
    assert_eq!(tokens_60, vec!["$sum", "$where"]);
}
