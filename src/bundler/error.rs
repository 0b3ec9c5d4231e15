//! Error taxonomy for bundling and deployment lifecycle operations.
//!
//! Every failure aborts the current phase and carries enough context
//! (path, exit code, captured diagnostic text) for an operator to act on it.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the locator, build invoker, assembler and lifecycle hooks.
#[derive(Error, Debug)]
pub enum Error {
    /// No project descriptor exists under the search root.
    #[error("no *.{extension} project descriptor found under {}", root.display())]
    NotFound {
        /// Directory that was searched
        root: PathBuf,
        /// Descriptor extension that was searched for
        extension: String,
    },

    /// No invocable toolchain binary could be resolved.
    #[error(
        "build toolchain `{program}` not found (probed {probed} candidate path(s) and the executable search path)"
    )]
    ToolchainNotFound {
        /// Toolchain program name
        program: String,
        /// Number of explicit candidate paths probed
        probed: usize,
    },

    /// The toolchain exited unsuccessfully.
    #[error("build toolchain failed with exit code {}: {stderr}", display_code(*exit_code))]
    ToolchainError {
        /// Exit code, `None` when terminated by a signal
        exit_code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// Build output directory is absent or holds no files.
    #[error("build output is missing or empty: {}", path.display())]
    MissingBuildOutput {
        /// Expected build output directory
        path: PathBuf,
    },

    /// The service did not reach the running state after start.
    #[error("service `{service}` is not running after start\n{status_text}")]
    StartupFailed {
        /// Service unit name
        service: String,
        /// Diagnostic status text reported by the service manager
        status_text: String,
    },

    /// A service manager command exited unsuccessfully.
    #[error("`{command}` failed with exit code {}: {stderr}", display_code(*exit_code))]
    ServiceManagerError {
        /// Command line that failed
        command: String,
        /// Exit code, `None` when terminated by a signal
        exit_code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// The service was still running after the stop poll was exhausted.
    #[error("service `{service}` still running after {observations} observations")]
    ServiceDidNotStop {
        /// Service unit name
        service: String,
        /// Number of state observations made
        observations: u32,
    },

    /// Filesystem error with the operation and path that caused it.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path being operated on
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// IO errors
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Archive errors
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Directory traversal errors
    #[error("directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix errors
    #[error("path prefix error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Invalid archive pattern
    #[error("invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Anything else
    #[error("{0}")]
    GenericError(String),
}

fn display_code(code: Option<i32>) -> String {
    code.map_or_else(|| "<signal>".to_string(), |c| c.to_string())
}

/// Attaches filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wraps the error with the operation and the path it concerned.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts missing values and foreign errors into [`Error::GenericError`].
pub trait Context<T> {
    /// Attaches a message to the failure.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
