//! Build toolchain resolution.
//!
//! Resolution is an ordered list of strategies, first success wins:
//! explicit candidate paths, then the executable search path, then the bare
//! program name left to the OS at spawn time.

use crate::bundler::settings::ToolchainSettings;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Outcome of toolchain resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolchainResolution {
    /// One of the configured candidate paths exists.
    Candidate(PathBuf),
    /// Found on the executable search path.
    SearchPath(PathBuf),
    /// Nothing resolved; spawn by bare name and let the OS decide.
    Ambient(String),
}

impl ToolchainResolution {
    /// Program to hand to the process spawner.
    pub fn program(&self) -> &OsStr {
        match self {
            Self::Candidate(path) | Self::SearchPath(path) => path.as_os_str(),
            Self::Ambient(name) => OsStr::new(name),
        }
    }

    /// Returns true for the fallback sentinel.
    pub fn is_ambient(&self) -> bool {
        matches!(self, Self::Ambient(_))
    }
}

/// Resolves the toolchain executable.
pub fn resolve(settings: &ToolchainSettings) -> ToolchainResolution {
    if let Some(path) = settings.candidates.iter().find(|p| is_executable(p)) {
        log::debug!("Using toolchain candidate {}", path.display());
        return ToolchainResolution::Candidate(path.clone());
    }

    match which::which(&settings.program) {
        Ok(path) => {
            log::debug!("Found {} at: {}", settings.program, path.display());
            ToolchainResolution::SearchPath(path)
        }
        Err(e) => {
            log::debug!(
                "{} not found in PATH: {}. Deferring to the OS at spawn time.",
                settings.program,
                e
            );
            ToolchainResolution::Ambient(settings.program.clone())
        }
    }
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}
