// Library interface for opcheck
// Exposes the scan engine to integration tests and benches

pub mod cli;
pub mod error;
pub mod keywords;
pub mod matcher;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod walk;
