//! Typed errors for opcheck
//!
//! Only pre-scan failures are errors: a bad target path is fatal and maps
//! to the usage exit code, while per-file read problems during a scan are
//! recorded in the excepted list and never surface here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpcheckError {
    #[error("one of --directory or --file is required")]
    MissingTarget,

    #[error("unable to locate file {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unable to locate directory {}", .0.display())]
    DirectoryNotFound(PathBuf),
}
