//! Command-line surface
//!
//! Flag names and semantics mirror the scanner's contract: exactly one of
//! `--directory`/`--file`, comma-separated extension filters that only
//! apply to directory walks, and `--version` selecting the target profile.
//! Conflicting flags are clap usage errors; a missing or nonexistent
//! target is caught by [`Cli::target`] and mapped to the same usage exit.

use crate::error::OpcheckError;
use crate::keywords::Profile;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "opcheck")]
#[command(about = "Scan source trees for query operators unsupported by a target compatibility profile")]
#[command(group(ArgGroup::new("target").args(["directory", "file"]).multiple(false)))]
pub struct Cli {
    /// Directory containing files to scan for compatibility
    #[arg(long, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Specific file to scan for compatibility
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Filename extensions to exclude from scanning, comma separated
    #[arg(long, value_name = "LIST")]
    pub excluded_extensions: Option<String>,

    /// Filename extensions to include in scanning, comma separated
    #[arg(long, value_name = "LIST")]
    pub included_extensions: Option<String>,

    /// Include supported operators in the report
    #[arg(long)]
    pub show_supported: bool,

    /// Target compatibility profile (4.0, 5.0, 6.0)
    #[arg(long = "version", value_name = "PROFILE", default_value = "6.0")]
    pub version: Profile,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Print the operator table for the selected profile and exit
    #[arg(long)]
    pub list_operators: bool,
}

/// What a run scans: a whole tree or one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    Directory(PathBuf),
    File(PathBuf),
}

impl Cli {
    /// Resolve and validate the scan target. clap already rejects the
    /// both-flags case; this covers neither-flag and nonexistent paths.
    pub fn target(&self) -> Result<ScanTarget, OpcheckError> {
        match (&self.directory, &self.file) {
            (Some(dir), None) => {
                if dir.is_dir() {
                    Ok(ScanTarget::Directory(dir.clone()))
                } else {
                    Err(OpcheckError::DirectoryNotFound(dir.clone()))
                }
            }
            (None, Some(file)) => {
                if file.is_file() {
                    Ok(ScanTarget::File(file.clone()))
                } else {
                    Err(OpcheckError::FileNotFound(file.clone()))
                }
            }
            _ => Err(OpcheckError::MissingTarget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_directory_and_file_conflict() {
        let result = Cli::try_parse_from(["opcheck", "--directory", "/tmp", "--file", "/tmp/x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_target_is_usage_error() {
        let cli = Cli::try_parse_from(["opcheck"]).unwrap();
        assert!(matches!(cli.target(), Err(OpcheckError::MissingTarget)));
    }

    #[test]
    fn test_profile_default_and_override() {
        let cli = Cli::try_parse_from(["opcheck", "--file", "/tmp/x"]).unwrap();
        assert_eq!(cli.version, Profile::V6_0);

        let cli = Cli::try_parse_from(["opcheck", "--file", "/tmp/x", "--version", "5.0"]).unwrap();
        assert_eq!(cli.version, Profile::V5_0);

        assert!(Cli::try_parse_from(["opcheck", "--file", "/tmp/x", "--version", "9.9"]).is_err());
    }

    #[test]
    fn test_nonexistent_paths_rejected() {
        let cli =
            Cli::try_parse_from(["opcheck", "--file", "/nonexistent/opcheck-no-such-file"]).unwrap();
        assert!(matches!(cli.target(), Err(OpcheckError::FileNotFound(_))));

        let cli = Cli::try_parse_from(["opcheck", "--directory", "/nonexistent/opcheck-no-such-dir"])
            .unwrap();
        assert!(matches!(cli.target(), Err(OpcheckError::DirectoryNotFound(_))));
    }
}
