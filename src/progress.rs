// Progress feedback for long scans
//
// Observational only: everything here goes to stderr so stdout stays a
// clean report surface for shells and CI.

use std::path::Path;

/// Emit a line tick every this many lines within a single file.
pub const LINE_FEEDBACK_INTERVAL: usize = 10_000;

pub fn file_started(path: &Path) {
    eprintln!("processing file {}", path.display());
}

pub fn line_tick(line_number: usize) {
    if line_number % LINE_FEEDBACK_INTERVAL == 0 {
        eprintln!("  processing line {}", line_number);
    }
}
