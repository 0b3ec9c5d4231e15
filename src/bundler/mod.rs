//! Build-host release bundling.
//!
//! Locates a web application project, builds it with the external toolchain,
//! and packages the output together with its deployment manifest and hook
//! scripts into a single archive.
//!
//! # Example
//!
//! ```no_run
//! use release_bundler::bundler::{BuildConfiguration, ReleasePipeline, SettingsBuilder};
//!
//! # async fn example() -> release_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .project_root("/src/shop")
//!     .configuration(BuildConfiguration::Release)
//!     .build()?;
//!
//! let artifact = ReleasePipeline::new(settings).run().await?;
//! println!("{} ({})", artifact.path.display(), artifact.checksum);
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod builder;
pub mod error;
pub mod locator;
pub mod settings;
pub mod utils;

pub use assembler::{AssembleRequest, AssembledBundle, assemble};
pub use builder::ReleasePipeline;
pub use error::{Error, Result};
pub use locator::{CandidateProject, locate};
pub use settings::{
    BuildConfiguration, DeploySettings, LocatorSettings, Settings, SettingsBuilder,
    ToolchainSettings,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// A bundle produced by [`ReleasePipeline::run`].
#[derive(Debug, Clone, Serialize)]
pub struct BundledArtifact {
    /// Path of the archive.
    pub path: PathBuf,
    /// Archive size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive.
    pub checksum: String,
    /// Project descriptor that was built.
    pub project: PathBuf,
    /// Configuration it was built with.
    pub configuration: BuildConfiguration,
    /// Archive entries in the order written.
    pub entries: Vec<String>,
    /// When the bundle was produced.
    pub created_at: DateTime<Utc>,
}
