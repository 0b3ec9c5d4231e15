//! Artifact checksum calculation.
//!
//! SHA-256 digests for the produced archive and for extracted directory trees.
//! Digests are informational; nothing in the pipeline verifies them.

use crate::{bail, bundler::Result, bundler::error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates the SHA-256 checksum of a file or directory.
///
/// Directories hash every file's relative path and contents in sorted order,
/// so two trees with the same layout and bytes hash equal regardless of
/// where they live.
///
/// # Returns
///
/// Hex-encoded SHA-256 hash (64 characters).
pub async fn calculate_sha256(path: &Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading metadata", path)?;

    if metadata.is_file() {
        calculate_file_sha256(path).await
    } else if metadata.is_dir() {
        calculate_directory_sha256(path).await
    } else {
        bail!("Path is neither file nor directory: {}", path.display())
    }
}

async fn calculate_file_sha256(file_path: &Path) -> Result<String> {
    let mut hasher = Sha256::new();
    hash_file_into(&mut hasher, file_path).await?;
    Ok(format!("{:x}", hasher.finalize()))
}

async fn calculate_directory_sha256(dir_path: &Path) -> Result<String> {
    let mut entries: Vec<_> = walkdir::WalkDir::new(dir_path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .collect();

    entries.sort_by_key(|e| e.path().to_path_buf());

    let mut hasher = Sha256::new();
    for entry in entries {
        let rel_path = entry.path().strip_prefix(dir_path)?;
        // Separator-normalized so the digest is platform independent
        let rel = rel_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        hasher.update(rel.as_bytes());
        hasher.update([0u8]);
        hash_file_into(&mut hasher, entry.path()).await?;
    }

    Ok(format!("{:x}", hasher.finalize()))
}

async fn hash_file_into(hasher: &mut Sha256, path: &Path) -> Result<()> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(())
}
