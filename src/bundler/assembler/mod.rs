//! Bundle assembly.
//!
//! Turns build output, an optional deployment manifest and optional hook
//! scripts into one archive whose root holds exactly:
//!
//! ```text
//! app/           copy of the build output
//! <manifest>     deployment descriptor, copied verbatim
//! scripts/       hook scripts, LF line endings, mode 0755
//! ```
//!
//! Every run starts from a clean staging directory and a removed destination
//! archive, so stale files never leak into a new bundle.

mod archive;
mod scripts;

pub use scripts::{is_shell_script, normalize_line_endings};

use crate::{
    bail,
    bundler::{
        error::{Context, Error, Result},
        utils::fs,
    },
    lifecycle::LifecycleHook,
};
use serde::Serialize;
use std::path::PathBuf;

/// Name of the build output subtree inside the bundle.
pub const APP_DIR: &str = "app";

/// Name of the hook scripts subtree inside the bundle.
pub const SCRIPTS_DIR: &str = "scripts";

/// Inputs for [`assemble`].
#[derive(Debug, Clone)]
pub struct AssembleRequest {
    /// Build output directory; must exist and be non-empty.
    pub build_output: PathBuf,
    /// Expected manifest location; skipped when the file does not exist.
    pub manifest: Option<PathBuf>,
    /// Expected scripts directory; skipped when it does not exist.
    pub scripts_dir: Option<PathBuf>,
    /// Staging root, recreated from scratch.
    pub staging_dir: PathBuf,
    /// Archive to produce, replaced if present.
    pub destination: PathBuf,
}

/// Result of a successful [`assemble`].
#[derive(Debug, Clone, Serialize)]
pub struct AssembledBundle {
    /// Produced archive.
    pub archive: PathBuf,
    /// Archive entries in the order written.
    pub entries: Vec<String>,
    /// Manifest file name at the bundle root, if one was included.
    pub manifest: Option<String>,
    /// Shell scripts included under `scripts/`, relative to it.
    pub scripts: Vec<String>,
}

/// Assembles the bundle archive.
///
/// # Errors
///
/// [`Error::MissingBuildOutput`] if the build output is absent or holds no files.
/// Fails without touching the filesystem if the staging directory or the
/// archive lies inside the build output, or the archive inside staging.
/// Missing manifest or scripts are logged and skipped.
pub async fn assemble(request: &AssembleRequest) -> Result<AssembledBundle> {
    if request.destination.starts_with(&request.staging_dir) {
        bail!(
            "archive {} must not be inside the staging directory {}",
            request.destination.display(),
            request.staging_dir.display()
        );
    }

    for (what, path) in [
        ("staging directory", &request.staging_dir),
        ("archive", &request.destination),
    ] {
        if path.starts_with(&request.build_output) {
            bail!(
                "{} {} must not be inside the build output {}",
                what,
                path.display(),
                request.build_output.display()
            );
        }
    }

    // 0. Clear leftovers from any previous run
    fs::remove_dir_all(&request.staging_dir).await?;
    fs::remove_file(&request.destination).await?;

    if !fs::contains_files(&request.build_output).await? {
        return Err(Error::MissingBuildOutput {
            path: request.build_output.clone(),
        });
    }

    log::info!("Assembling bundle in {}", request.staging_dir.display());

    // 1. Build output -> app/
    fs::create_dir_all(&request.staging_dir, true).await?;
    fs::copy_dir(&request.build_output, &request.staging_dir.join(APP_DIR)).await?;

    // 2. Manifest -> bundle root
    let manifest = match &request.manifest {
        Some(path) if path.is_file() => {
            let name = path
                .file_name()
                .context("manifest path has no file name")?
                .to_string_lossy()
                .into_owned();
            fs::copy_file(path, &request.staging_dir.join(&name)).await?;
            log::info!("Included manifest {}", name);
            Some(name)
        }
        Some(path) => {
            log::warn!("No manifest at {}; bundling without one", path.display());
            None
        }
        None => None,
    };

    // 3. Scripts -> scripts/, replacing any stale copy
    let staged_scripts = request.staging_dir.join(SCRIPTS_DIR);
    let mut executables = Vec::new();
    match &request.scripts_dir {
        Some(dir) if dir.is_dir() => {
            fs::remove_dir_all(&staged_scripts).await?;
            fs::copy_dir(dir, &staged_scripts).await?;

            // 4. Normalize line endings of shell scripts
            let root = staged_scripts.clone();
            executables = tokio::task::spawn_blocking(move || scripts::normalize_scripts(&root))
                .await
                .map_err(|e| Error::GenericError(format!("Script normalization task panicked: {e}")))??;

            report_missing_hooks(&staged_scripts);
        }
        Some(dir) => {
            log::warn!(
                "No scripts directory at {}; bundling without lifecycle hooks",
                dir.display()
            );
        }
        None => {}
    }

    let scripts = executables
        .iter()
        .filter_map(|p| p.strip_prefix(&staged_scripts).ok())
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .collect();

    // 5. Archive the contents of staging/
    if let Some(parent) = request.destination.parent() {
        fs::create_dir_all(parent, false).await?;
    }
    let root = request.staging_dir.clone();
    let destination = request.destination.clone();
    let entries =
        tokio::task::spawn_blocking(move || archive::write_zip(&root, &destination, &executables))
            .await
            .map_err(|e| Error::GenericError(format!("Archive task panicked: {e}")))??;

    log::info!(
        "✓ Created bundle {} ({} entries)",
        request.destination.display(),
        entries.len()
    );

    Ok(AssembledBundle {
        archive: request.destination.clone(),
        entries,
        manifest,
        scripts,
    })
}

fn report_missing_hooks(scripts_dir: &std::path::Path) {
    for hook in LifecycleHook::ALL {
        if !scripts_dir.join(hook.script_name()).is_file() {
            log::info!(
                "Scripts directory has no {} hook ({})",
                hook,
                hook.script_name()
            );
        }
    }
}
