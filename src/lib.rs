//! Release bundling and deployment lifecycle hooks for web applications.
//!
//! This library provides the two phases of a release:
//! - Build host: locate the web project, build it, and package the output
//!   with its deployment manifest and hook scripts into one archive
//!   ([`bundler`])
//! - Target host: the pre-install/post-install hooks that stop, reinstall
//!   around, and restart the service ([`lifecycle`])
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod lifecycle;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
