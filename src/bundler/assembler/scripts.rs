//! Hook script detection and line-ending normalization.
//!
//! Scripts destined for a Unix-like target must not carry CRLF: a shebang
//! followed by `\r` names an interpreter that does not exist.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    io::Read,
    path::{Path, PathBuf},
};

const SHELL_EXTENSIONS: &[&str] = &["sh", "bash"];

/// Returns true if `path` is a shell script: a `.sh`/`.bash` file or a file
/// starting with a `#!` shebang.
pub fn is_shell_script(path: &Path) -> Result<bool> {
    if path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SHELL_EXTENSIONS.iter().any(|s| e.eq_ignore_ascii_case(s)))
    {
        return Ok(true);
    }

    let mut head = [0u8; 2];
    let mut file = std::fs::File::open(path).fs_context("opening script", path)?;
    let n = file.read(&mut head).fs_context("reading script", path)?;
    Ok(n == 2 && &head == b"#!")
}

/// Replaces every CRLF pair with LF.
///
/// Returns `None` when the input contains no CRLF, so callers can skip the rewrite.
pub fn normalize_line_endings(input: &[u8]) -> Option<Vec<u8>> {
    if !input.windows(2).any(|w| w == b"\r\n") {
        return None;
    }

    let mut out = Vec::with_capacity(input.len());
    let mut iter = input.iter().peekable();
    while let Some(&byte) = iter.next() {
        if byte == b'\r' && iter.peek() == Some(&&b'\n') {
            continue;
        }
        out.push(byte);
    }
    Some(out)
}

/// Normalizes every shell script under `dir` in place.
///
/// Returns the scripts found, in traversal order, whether or not they needed
/// rewriting.
pub fn normalize_scripts(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut scripts = Vec::new();

    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_shell_script(entry.path())? {
            continue;
        }

        let bytes = std::fs::read(entry.path()).fs_context("reading script", entry.path())?;
        if let Some(normalized) = normalize_line_endings(&bytes) {
            log::debug!("Converting CRLF to LF in {}", entry.path().display());
            std::fs::write(entry.path(), normalized).fs_context("rewriting script", entry.path())?;
        }
        scripts.push(entry.into_path());
    }

    Ok(scripts)
}
