//! Zip archive creation from a staging root.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

const DIR_MODE: u32 = 0o755;
const SCRIPT_MODE: u32 = 0o755;
#[cfg(not(unix))]
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Archives the *contents* of `root` into `destination`.
///
/// Entry names are `/`-separated paths relative to `root`; `root` itself is
/// never an entry. Entries are written in file-name order. Files listed in
/// `executables` are stored with mode `0755`.
///
/// Returns the entry names in the order written.
pub fn write_zip(root: &Path, destination: &Path, executables: &[PathBuf]) -> Result<Vec<String>> {
    let file = File::create(destination).fs_context("creating archive", destination)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let base = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = Vec::new();

    for entry in walkdir::WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let name = entry_name(entry.path().strip_prefix(root)?);

        if entry.file_type().is_symlink() {
            let target = std::fs::read_link(entry.path()).fs_context("reading link", entry.path())?;
            zip.add_symlink(name.clone(), target.to_string_lossy().replace('\\', "/"), base)?;
            entries.push(name);
        } else if entry.file_type().is_dir() {
            let name = format!("{name}/");
            zip.add_directory(name.clone(), base.unix_permissions(DIR_MODE))?;
            entries.push(name);
        } else {
            let mode = if executables.iter().any(|p| p == entry.path()) {
                SCRIPT_MODE
            } else {
                file_mode(entry.path())?
            };
            zip.start_file(name.clone(), base.unix_permissions(mode))?;
            let mut source = File::open(entry.path()).fs_context("opening file", entry.path())?;
            io::copy(&mut source, &mut zip).fs_context("archiving file", entry.path())?;
            entries.push(name);
        }
    }

    zip.finish()?;
    Ok(entries)
}

fn entry_name(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn file_mode(path: &Path) -> Result<u32> {
    use std::os::unix::fs::PermissionsExt;
    let metadata = std::fs::metadata(path).fs_context("reading metadata", path)?;
    Ok(metadata.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn file_mode(_path: &Path) -> Result<u32> {
    Ok(DEFAULT_FILE_MODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_names_use_forward_slashes() {
        let rel: PathBuf = ["app", "wwwroot", "site.css"].iter().collect();
        assert_eq!(entry_name(&rel), "app/wwwroot/site.css");
    }

    #[test]
    fn root_is_not_an_entry() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("staging");
        std::fs::create_dir_all(root.join("app")).unwrap();
        std::fs::write(root.join("app/Shop.dll"), b"MZ").unwrap();

        let dest = temp.path().join("bundle.zip");
        let entries = write_zip(&root, &dest, &[]).unwrap();

        assert_eq!(entries, vec!["app/".to_string(), "app/Shop.dll".to_string()]);
    }
}
