//! Command execution functions for the release bundler.
//!
//! One function per subcommand; each returns the process exit code.

mod assemble;
mod bundle;
mod hook;
mod locate;

pub use assemble::assemble;
pub use bundle::bundle;
pub use hook::hook;
pub use locate::locate;

use anyhow::Context;
use path_absolutize::Absolutize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Resolves `path` against the current directory once, so nothing
/// downstream depends on the process working directory.
fn absolute(path: &Path) -> crate::error::Result<PathBuf> {
    let resolved = path
        .absolutize()
        .with_context(|| format!("resolving {}", path.display()))?;
    Ok(resolved.into_owned())
}

fn print_json<T: Serialize>(value: &T) -> crate::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
