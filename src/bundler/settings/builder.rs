//! Builder for constructing Settings.

use super::{BuildConfiguration, LocatorSettings, Settings, ToolchainSettings};
use std::path::{Path, PathBuf};

/// Default deployment manifest file name.
pub const DEFAULT_MANIFEST_NAME: &str = "appspec.yml";

/// Default hook scripts directory name.
pub const DEFAULT_SCRIPTS_DIR: &str = "scripts";

/// Default staging root directory name, relative to the project root.
pub const DEFAULT_STAGING_DIR: &str = "artifacts";

/// Default archive file name.
pub const DEFAULT_ARCHIVE_NAME: &str = "bundle.zip";

/// Builder for constructing [`Settings`].
///
/// Everything except the project root has a default derived from it.
///
/// # Examples
///
/// ```no_run
/// use release_bundler::bundler::{BuildConfiguration, SettingsBuilder};
///
/// # fn example() -> release_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/src/shop")
///     .staging_root("/tmp/shop-release")
///     .configuration(BuildConfiguration::Debug)
///     .archive_name("shop.zip")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    staging_root: Option<PathBuf>,
    configuration: BuildConfiguration,
    manifest_path: Option<PathBuf>,
    scripts_dir: Option<PathBuf>,
    archive_name: Option<String>,
    archive_patterns: Option<Vec<String>>,
    locator: LocatorSettings,
    toolchain: ToolchainSettings,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the root of the tree searched for project descriptors.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the staging root.
    ///
    /// Default: `<project_root>/artifacts`
    pub fn staging_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.staging_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build configuration.
    ///
    /// Default: [`BuildConfiguration::Release`]
    pub fn configuration(mut self, configuration: BuildConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Sets the manifest source location.
    ///
    /// Default: `<project_root>/appspec.yml`
    pub fn manifest_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.manifest_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the hook scripts source directory.
    ///
    /// Default: `<project_root>/scripts`
    pub fn scripts_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.scripts_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the archive file name, placed directly under the staging root.
    ///
    /// Default: `bundle.zip`
    pub fn archive_name(mut self, name: impl Into<String>) -> Self {
        self.archive_name = Some(name.into());
        self
    }

    /// Sets the glob patterns of archive files stripped from build output.
    ///
    /// Default: `["*.zip"]`
    pub fn archive_patterns(mut self, patterns: Vec<String>) -> Self {
        self.archive_patterns = Some(patterns);
        self
    }

    /// Sets the locator settings.
    pub fn locator(mut self, locator: LocatorSettings) -> Self {
        self.locator = locator;
        self
    }

    /// Sets the toolchain settings.
    pub fn toolchain(mut self, toolchain: ToolchainSettings) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Builds the settings.
    ///
    /// The staging root is added to the locator exclusions so a staged copy
    /// of a project descriptor is never picked up on a re-run.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_root` is missing or the archive name is
    /// not a plain file name.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let project_root = self.project_root.context("project_root is required")?;
        let staging_root = self
            .staging_root
            .unwrap_or_else(|| project_root.join(DEFAULT_STAGING_DIR));
        let manifest_path = self
            .manifest_path
            .unwrap_or_else(|| project_root.join(DEFAULT_MANIFEST_NAME));
        let scripts_dir = self
            .scripts_dir
            .unwrap_or_else(|| project_root.join(DEFAULT_SCRIPTS_DIR));

        let archive_name = self
            .archive_name
            .unwrap_or_else(|| DEFAULT_ARCHIVE_NAME.to_string());
        if archive_name.is_empty() || archive_name.contains(['/', '\\']) {
            crate::bail!("archive name must be a plain file name, got {archive_name:?}");
        }

        let archive_patterns = self
            .archive_patterns
            .unwrap_or_else(|| vec!["*.zip".to_string()]);

        let mut locator = self.locator;
        locator.exclude.push(staging_root.clone());

        Ok(Settings::new(
            project_root,
            staging_root,
            self.configuration,
            manifest_path,
            scripts_dir,
            archive_name,
            archive_patterns,
            locator,
            self.toolchain,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_derive_from_project_root() {
        let settings = SettingsBuilder::new()
            .project_root("/src/shop")
            .build()
            .unwrap();

        assert_eq!(settings.staging_root(), Path::new("/src/shop/artifacts"));
        assert_eq!(settings.manifest_path(), Path::new("/src/shop/appspec.yml"));
        assert_eq!(settings.scripts_dir(), Path::new("/src/shop/scripts"));
        assert_eq!(settings.archive_path(), Path::new("/src/shop/artifacts/bundle.zip"));
        assert_eq!(settings.configuration(), BuildConfiguration::Release);
        assert!(
            settings
                .locator()
                .exclude
                .contains(&PathBuf::from("/src/shop/artifacts"))
        );
    }

    #[test]
    fn missing_project_root_is_rejected() {
        assert!(SettingsBuilder::new().build().is_err());
    }

    #[test]
    fn archive_name_must_be_a_file_name() {
        let result = SettingsBuilder::new()
            .project_root("/src/shop")
            .archive_name("../escape.zip")
            .build();
        assert!(result.is_err());
    }
}
