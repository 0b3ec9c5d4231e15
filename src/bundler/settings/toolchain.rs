//! Toolchain resolution settings.

use std::path::PathBuf;

/// Default toolchain program name.
pub const DEFAULT_TOOLCHAIN: &str = "dotnet";

/// Settings for resolving and invoking the build toolchain.
///
/// Resolution order: each of [`candidates`](Self::candidates) in turn, then
/// the executable search path for [`program`](Self::program), then the bare
/// program name handed to the OS.
#[derive(Debug, Clone)]
pub struct ToolchainSettings {
    /// Program name looked up on the executable search path.
    pub program: String,

    /// Explicit executable locations, probed in order.
    pub candidates: Vec<PathBuf>,

    /// Subcommand passed before the project path.
    pub subcommand: String,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_TOOLCHAIN.into(),
            candidates: default_candidates(),
            subcommand: "build".into(),
        }
    }
}

/// Well-known install locations for the default toolchain.
fn default_candidates() -> Vec<PathBuf> {
    if cfg!(windows) {
        vec![PathBuf::from(r"C:\Program Files\dotnet\dotnet.exe")]
    } else {
        vec![
            PathBuf::from("/usr/share/dotnet/dotnet"),
            PathBuf::from("/usr/local/share/dotnet/dotnet"),
            PathBuf::from("/usr/lib/dotnet/dotnet"),
        ]
    }
}
