//! Build toolchain invocation.

use super::toolchain::{self, ToolchainResolution};
use crate::bundler::{
    error::{Error, Result},
    locator::CandidateProject,
    settings::{BuildConfiguration, ToolchainSettings},
};
use std::{io, path::Path, process::Stdio};
use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, BufReader},
    process::Command,
};

/// Builds `project` into `out_dir`.
///
/// Runs `<toolchain> <subcommand> <project> --configuration <cfg> --output <out_dir>`.
/// Stdout is forwarded to the debug log as it arrives; stderr is captured
/// for the error report. `out_dir` is expected to be fresh.
///
/// # Errors
///
/// - [`Error::ToolchainNotFound`] if no toolchain binary can be spawned
/// - [`Error::ToolchainError`] if the toolchain exits unsuccessfully
pub async fn build(
    project: &CandidateProject,
    configuration: BuildConfiguration,
    out_dir: &Path,
    settings: &ToolchainSettings,
) -> Result<()> {
    let resolution = toolchain::resolve(settings);

    log::info!(
        "Building {} ({}) with {}",
        project.path.display(),
        configuration,
        resolution.program().to_string_lossy()
    );

    let mut child = Command::new(resolution.program())
        .arg(&settings.subcommand)
        .arg(&project.path)
        .arg("--configuration")
        .arg(configuration.as_str())
        .arg("--output")
        .arg(out_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| spawn_error(e, &resolution, settings))?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Both pipes are drained concurrently so neither can fill up and block the child
    let (_, stderr_text) = tokio::join!(
        async {
            if let Some(stdout) = stdout {
                let mut reader = BufReader::new(stdout);
                let mut line = Vec::new();
                // Output is not guaranteed to be UTF-8; keep reading until EOF regardless
                while let Ok(n) = reader.read_until(b'\n', &mut line).await {
                    if n == 0 {
                        break;
                    }
                    log::debug!("[build] {}", String::from_utf8_lossy(&line).trim_end());
                    line.clear();
                }
            }
        },
        async {
            let mut captured = Vec::new();
            if let Some(mut stderr) = stderr {
                let _ = stderr.read_to_end(&mut captured).await;
            }
            String::from_utf8_lossy(&captured).trim_end().to_string()
        }
    );

    let status = child.wait().await?;
    if !status.success() {
        return Err(Error::ToolchainError {
            exit_code: status.code(),
            stderr: stderr_text,
        });
    }

    log::info!("✓ Build output written to {}", out_dir.display());
    Ok(())
}

fn spawn_error(e: io::Error, resolution: &ToolchainResolution, settings: &ToolchainSettings) -> Error {
    if e.kind() == io::ErrorKind::NotFound {
        Error::ToolchainNotFound {
            program: settings.program.clone(),
            probed: settings.candidates.len(),
        }
    } else {
        Error::GenericError(format!(
            "failed to execute {}: {}",
            resolution.program().to_string_lossy(),
            e
        ))
    }
}
