//! Build configuration names passed to the toolchain.

use std::fmt;

/// Build configuration handed to the toolchain as `--configuration <name>`.
///
/// # Examples
///
/// ```
/// use release_bundler::bundler::BuildConfiguration;
///
/// assert_eq!(BuildConfiguration::default().as_str(), "Release");
/// assert_eq!(BuildConfiguration::Debug.to_string(), "Debug");
/// ```
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
pub enum BuildConfiguration {
    /// Unoptimized build with debug symbols
    #[value(name = "Debug", alias = "debug")]
    Debug,
    /// Optimized build, the deployment default
    #[default]
    #[value(name = "Release", alias = "release")]
    Release,
}

impl BuildConfiguration {
    /// Returns the name understood by the toolchain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
