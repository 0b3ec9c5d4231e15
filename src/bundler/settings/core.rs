//! Core Settings struct and implementations.

use super::{BuildConfiguration, LocatorSettings, ToolchainSettings};
use std::path::{Path, PathBuf};

/// Main settings for the release pipeline.
///
/// Central configuration for locating, building and bundling a project,
/// constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Staging layout
///
/// ```text
/// <staging_root>/
///   publish/        build output
///   bundle/         bundle staging root (app/, manifest, scripts/)
///   <archive_name>  produced archive
/// ```
///
/// # Examples
///
/// ```no_run
/// use release_bundler::bundler::{BuildConfiguration, SettingsBuilder};
///
/// # fn example() -> release_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/src/shop")
///     .configuration(BuildConfiguration::Release)
///     .build()?;
///
/// assert!(settings.archive_path().ends_with("bundle.zip"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Root of the tree searched for project descriptors.
    project_root: PathBuf,

    /// Scratch directory holding build output, staging and the archive.
    staging_root: PathBuf,

    /// Build configuration passed to the toolchain.
    configuration: BuildConfiguration,

    /// Expected location of the deployment manifest.
    manifest_path: PathBuf,

    /// Expected location of the hook scripts directory.
    scripts_dir: PathBuf,

    /// File name of the produced archive.
    archive_name: String,

    /// Glob patterns of archive files stripped from build output.
    archive_patterns: Vec<String>,

    locator: LocatorSettings,

    toolchain: ToolchainSettings,
}

impl Settings {
    /// Returns the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the staging root.
    pub fn staging_root(&self) -> &Path {
        &self.staging_root
    }

    /// Returns the build configuration.
    pub fn configuration(&self) -> BuildConfiguration {
        self.configuration
    }

    /// Returns the expected manifest location. The file itself is optional.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Returns the expected scripts directory. The directory itself is optional.
    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// Directory the toolchain writes build output into.
    pub fn publish_dir(&self) -> PathBuf {
        self.staging_root.join("publish")
    }

    /// Directory the bundle contents are staged in before archiving.
    pub fn bundle_dir(&self) -> PathBuf {
        self.staging_root.join("bundle")
    }

    /// Full path of the produced archive.
    pub fn archive_path(&self) -> PathBuf {
        self.staging_root.join(&self.archive_name)
    }

    /// Returns the archive patterns stripped from build output.
    pub fn archive_patterns(&self) -> &[String] {
        &self.archive_patterns
    }

    /// Returns the locator settings.
    pub fn locator(&self) -> &LocatorSettings {
        &self.locator
    }

    /// Returns the toolchain settings.
    pub fn toolchain(&self) -> &ToolchainSettings {
        &self.toolchain
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        project_root: PathBuf,
        staging_root: PathBuf,
        configuration: BuildConfiguration,
        manifest_path: PathBuf,
        scripts_dir: PathBuf,
        archive_name: String,
        archive_patterns: Vec<String>,
        locator: LocatorSettings,
        toolchain: ToolchainSettings,
    ) -> Self {
        Self {
            project_root,
            staging_root,
            configuration,
            manifest_path,
            scripts_dir,
            archive_name,
            archive_patterns,
            locator,
            toolchain,
        }
    }
}
