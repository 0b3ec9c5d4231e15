//! Release pipeline orchestration.
//!
//! This module provides the [`ReleasePipeline`] that runs the build-host
//! phase end to end: locate, build, strip nested archives, assemble.

use crate::bundler::{
    AssembleRequest, BundledArtifact, Result, Settings,
    assembler::assemble,
    error::ErrorExt,
    locator::{self, CandidateProject},
    utils::fs,
};

use super::{checksum::calculate_sha256, invoker};

/// Build-host release pipeline.
///
/// Each step is idempotent: the staging root is wiped at the start of every
/// run, so re-running after an interruption converges on the same bundle.
///
/// # Examples
///
/// ```no_run
/// use release_bundler::bundler::{ReleasePipeline, SettingsBuilder};
///
/// # async fn example() -> release_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new().project_root(".").build()?;
/// let artifact = ReleasePipeline::new(settings).run().await?;
///
/// println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
/// println!("SHA256: {}", artifact.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReleasePipeline {
    settings: Settings,
}

impl ReleasePipeline {
    /// Creates a pipeline with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Runs every step in order, aborting on the first failure.
    pub async fn run(&self) -> Result<BundledArtifact> {
        let project = self.locate().await?;
        self.prepare_staging().await?;
        self.build(&project).await?;
        self.strip_nested_archives().await?;
        self.assemble(&project).await
    }

    /// Returns a reference to the pipeline settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    async fn locate(&self) -> Result<CandidateProject> {
        locator::locate(self.settings.project_root(), self.settings.locator()).await
    }

    /// Removes the whole staging root and recreates an empty one.
    async fn prepare_staging(&self) -> Result<()> {
        log::debug!(
            "Resetting staging root {}",
            self.settings.staging_root().display()
        );
        fs::create_dir_all(self.settings.staging_root(), true).await?;
        fs::create_dir_all(&self.settings.publish_dir(), false).await
    }

    async fn build(&self, project: &CandidateProject) -> Result<()> {
        invoker::build(
            project,
            self.settings.configuration(),
            &self.settings.publish_dir(),
            self.settings.toolchain(),
        )
        .await
    }

    /// Deletes archives the toolchain left in the build output.
    async fn strip_nested_archives(&self) -> Result<()> {
        let removed =
            fs::remove_matching_files(&self.settings.publish_dir(), self.settings.archive_patterns())
                .await?;
        for path in &removed {
            log::warn!("Removed nested archive from build output: {}", path.display());
        }
        Ok(())
    }

    async fn assemble(&self, project: &CandidateProject) -> Result<BundledArtifact> {
        let request = AssembleRequest {
            build_output: self.settings.publish_dir(),
            manifest: Some(self.settings.manifest_path().to_path_buf()),
            scripts_dir: Some(self.settings.scripts_dir().to_path_buf()),
            staging_dir: self.settings.bundle_dir(),
            destination: self.settings.archive_path(),
        };
        let bundle = assemble(&request).await?;

        let size = tokio::fs::metadata(&bundle.archive)
            .await
            .fs_context("reading artifact metadata", &bundle.archive)?
            .len();
        let checksum = calculate_sha256(&bundle.archive).await?;

        Ok(BundledArtifact {
            path: bundle.archive,
            size,
            checksum,
            project: project.path.clone(),
            configuration: self.settings.configuration(),
            entries: bundle.entries,
            created_at: chrono::Utc::now(),
        })
    }
}
