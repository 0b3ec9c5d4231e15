//! Project discovery.
//!
//! Finds the single buildable project under a root directory. Traversal is
//! depth-first in file-name order, so the same filesystem snapshot always
//! yields the same selection.

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::LocatorSettings,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A project descriptor found under the search root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateProject {
    /// Path to the descriptor file.
    pub path: PathBuf,
    /// Whether the descriptor carries the web application marker.
    pub is_web_project: bool,
}

/// Locates the project to build under `root`.
///
/// Picks the first web project in traversal order, falling back to the first
/// candidate of any kind.
///
/// # Errors
///
/// [`Error::NotFound`] if no descriptor exists under `root`.
pub async fn locate(root: &Path, settings: &LocatorSettings) -> Result<CandidateProject> {
    let candidates = discover(root, settings).await?;

    let selected = candidates
        .iter()
        .find(|c| c.is_web_project)
        .or_else(|| candidates.first())
        .cloned()
        .ok_or_else(|| Error::NotFound {
            root: root.to_path_buf(),
            extension: settings.descriptor_extension.clone(),
        })?;

    if selected.is_web_project {
        log::info!("Selected web project {}", selected.path.display());
    } else {
        log::warn!(
            "No descriptor contains `{}`; falling back to {}",
            settings.web_marker,
            selected.path.display()
        );
    }

    Ok(selected)
}

/// Enumerates every candidate descriptor under `root` in traversal order.
pub async fn discover(root: &Path, settings: &LocatorSettings) -> Result<Vec<CandidateProject>> {
    let root = root.to_path_buf();
    let settings = settings.clone();

    tokio::task::spawn_blocking(move || discover_blocking(&root, &settings))
        .await
        .map_err(|e| Error::GenericError(format!("Project discovery task panicked: {e}")))?
}

fn discover_blocking(root: &Path, settings: &LocatorSettings) -> Result<Vec<CandidateProject>> {
    if !root.is_dir() {
        log::warn!("Search root {} is not a directory", root.display());
        return Err(Error::NotFound {
            root: root.to_path_buf(),
            extension: settings.descriptor_extension.clone(),
        });
    }

    let mut candidates = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e, settings));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), &settings.descriptor_extension)
        {
            continue;
        }

        // Descriptors may be UTF-16 or carry a BOM; match on raw bytes
        let contents =
            std::fs::read(entry.path()).fs_context("reading project descriptor", entry.path())?;
        let is_web_project = contains_marker(&contents, settings.web_marker.as_bytes());
        log::debug!(
            "Candidate {} (web: {})",
            entry.path().display(),
            is_web_project
        );

        candidates.push(CandidateProject {
            path: entry.into_path(),
            is_web_project,
        });
    }

    Ok(candidates)
}

fn is_skipped(entry: &DirEntry, settings: &LocatorSettings) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || settings.skip_dirs.iter().any(|d| d == name.as_ref())
        || settings.exclude.iter().any(|p| p == entry.path())
}

fn contains_marker(contents: &[u8], marker: &[u8]) -> bool {
    !marker.is_empty() && contents.windows(marker.len()).any(|w| w == marker)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
