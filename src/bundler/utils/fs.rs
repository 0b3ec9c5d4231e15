//! File system utilities for bundling.
//!
//! Provides idempotent removal and creation, recursive copies with symlink
//! preservation, and error context carrying the offending path.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes the file if it exists.
pub async fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing file", path),
    }
}

/// Returns true if `path` is a directory containing at least one file,
/// at any depth.
pub async fn contains_files(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    let path = path.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<bool> {
        for entry in walkdir::WalkDir::new(&path).min_depth(1) {
            if !entry?.file_type().is_dir() {
                return Ok(true);
            }
        }
        Ok(false)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory scan task panicked: {e}")))?
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.is_file() {
        return Err(Error::GenericError(format!(
            "{} does not exist or is not a file",
            from.display()
        )));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file to", to)?;
    Ok(())
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Entries are visited in file-name order. Symlinks are recreated, not followed.
/// Fails if the source path is not a directory or doesn't exist.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.is_dir() {
        return Err(Error::GenericError(format!(
            "{} does not exist or is not a directory",
            from.display()
        )));
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || copy_dir_blocking(&from, &to))
        .await
        .map_err(|e| Error::GenericError(format!("Directory copy task panicked: {e}")))?
}

fn copy_dir_blocking(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent).fs_context("creating directory", parent)?;
    }

    for entry in walkdir::WalkDir::new(from).sort_by_file_name() {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(from)?;
        let dest_path = to.join(rel_path);

        if entry.file_type().is_symlink() {
            let target = std::fs::read_link(entry.path()).fs_context("reading link", entry.path())?;
            if entry.path().is_dir() {
                symlink_dir(&target, &dest_path).fs_context("creating link", &dest_path)?;
            } else {
                symlink_file(&target, &dest_path).fs_context("creating link", &dest_path)?;
            }
        } else if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
        } else {
            std::fs::copy(entry.path(), &dest_path).fs_context("copying file to", &dest_path)?;
        }
    }

    Ok(())
}

/// Deletes every file under `dir` whose name matches one of `patterns`.
///
/// Returns the removed paths in traversal order.
pub async fn remove_matching_files(dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = patterns
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let dir = dir.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for entry in walkdir::WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if patterns.iter().any(|p| p.matches(&name)) {
                std::fs::remove_file(entry.path()).fs_context("removing file", entry.path())?;
                removed.push(entry.into_path());
            }
        }
        Ok(removed)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Archive cleanup task panicked: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn removal_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing");
        remove_dir_all(&missing).await.unwrap();
        remove_file(&missing).await.unwrap();
    }

    #[tokio::test]
    async fn copy_dir_reproduces_tree() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("src");
        std::fs::create_dir_all(src.join("wwwroot/css")).unwrap();
        std::fs::write(src.join("Shop.dll"), b"MZ").unwrap();
        std::fs::write(src.join("wwwroot/css/site.css"), b"body{}").unwrap();

        let dst = temp.path().join("out/app");
        copy_dir(&src, &dst).await.unwrap();

        assert_eq!(std::fs::read(dst.join("Shop.dll")).unwrap(), b"MZ");
        assert_eq!(
            std::fs::read(dst.join("wwwroot/css/site.css")).unwrap(),
            b"body{}"
        );
    }

    #[tokio::test]
    async fn file_detection_ignores_empty_subdirectories() {
        let temp = tempfile::tempdir().unwrap();
        assert!(!contains_files(temp.path()).await.unwrap());
        assert!(!contains_files(&temp.path().join("nope")).await.unwrap());

        std::fs::create_dir_all(temp.path().join("wwwroot/css")).unwrap();
        assert!(!contains_files(temp.path()).await.unwrap());

        std::fs::write(temp.path().join("wwwroot/css/site.css"), b"").unwrap();
        assert!(contains_files(temp.path()).await.unwrap());
    }

    #[tokio::test]
    async fn matching_files_are_removed() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(temp.path().join("nested")).unwrap();
        std::fs::write(temp.path().join("keep.dll"), b"").unwrap();
        std::fs::write(temp.path().join("nested/publish.zip"), b"PK").unwrap();

        let removed = remove_matching_files(temp.path(), &["*.zip".to_string()])
            .await
            .unwrap();

        assert_eq!(removed, vec![temp.path().join("nested/publish.zip")]);
        assert!(temp.path().join("keep.dll").exists());
    }
}
