//! Top-level error types for the command line tool.
//!
//! This module defines the errors surfaced to the operator or deployment
//! agent, with recovery suggestions for the common failure modes.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bundling and lifecycle errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as E;

        match self {
            Self::Bundler(E::NotFound { extension, .. }) => vec![
                format!("Check that --root points at a tree containing a *.{extension} file"),
                "Use --descriptor-extension to search for a different project type".to_string(),
            ],
            Self::Bundler(E::ToolchainNotFound { program, .. }) => vec![
                format!("Install `{program}` or add it to PATH"),
                "Point BUNDLE_TOOLCHAIN_PATHS at the toolchain executable".to_string(),
            ],
            Self::Bundler(E::ToolchainError { .. }) => {
                vec!["Run the build manually to reproduce the toolchain failure".to_string()]
            }
            Self::Bundler(E::MissingBuildOutput { .. }) => {
                vec!["Check that the build produced output in the staging root".to_string()]
            }
            Self::Bundler(E::StartupFailed { service, .. }) => vec![
                format!("Inspect logs with `journalctl -u {service}`"),
                "Check the unit file and the installed application files".to_string(),
            ],
            Self::Bundler(E::ServiceManagerError { .. }) => {
                vec!["Check that the hook runs with permission to manage services".to_string()]
            }
            Self::Cli(_) => vec!["Run with --help for usage".to_string()],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
