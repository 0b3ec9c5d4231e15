//! systemd implementation of [`ServiceManager`].

use super::service::{ServiceManager, ServiceState};
use crate::bundler::error::{Error, Result};
use std::{ffi::OsString, path::PathBuf, process::Output};
use tokio::process::Command;

/// Drives systemd through the `systemctl` binary.
#[derive(Debug, Clone)]
pub struct Systemctl {
    program: OsString,
}

impl Default for Systemctl {
    fn default() -> Self {
        Self::new()
    }
}

impl Systemctl {
    /// Resolves `systemctl` on the executable search path, falling back to
    /// the bare name.
    pub fn new() -> Self {
        let program = which::which("systemctl")
            .map(PathBuf::into_os_string)
            .unwrap_or_else(|_| OsString::from("systemctl"));
        Self { program }
    }

    /// Uses an explicit `systemctl` binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into().into_os_string(),
        }
    }

    async fn output(&self, args: &[&str]) -> Result<Output> {
        log::debug!("systemctl {}", args.join(" "));
        Command::new(&self.program)
            .args(args)
            .output()
            .await
            .map_err(|e| Error::ServiceManagerError {
                command: self.command_line(args),
                exit_code: None,
                stderr: e.to_string(),
            })
    }

    /// Runs a command that must succeed.
    async fn run(&self, args: &[&str]) -> Result<Output> {
        let output = self.output(args).await?;
        if !output.status.success() {
            return Err(Error::ServiceManagerError {
                command: self.command_line(args),
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program.to_string_lossy(), args.join(" "))
    }
}

impl ServiceManager for Systemctl {
    async fn query(&self, service: &str) -> Result<ServiceState> {
        let output = self
            .run(&[
                "show",
                service,
                "--property=LoadState",
                "--property=ActiveState",
            ])
            .await?;
        Ok(parse_show_output(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn stop(&self, service: &str) -> Result<()> {
        self.run(&["stop", service]).await.map(drop)
    }

    async fn start(&self, service: &str) -> Result<()> {
        self.run(&["start", service]).await.map(drop)
    }

    async fn reload_definitions(&self) -> Result<()> {
        self.run(&["daemon-reload"]).await.map(drop)
    }

    async fn status_text(&self, service: &str) -> Result<String> {
        // `status` exits non-zero for inactive units; the text is what matters
        let output = self.output(&["status", service, "--no-pager"]).await?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(stderr.trim());
        }
        Ok(text)
    }
}

/// Maps `systemctl show` properties onto a [`ServiceState`].
fn parse_show_output(stdout: &str) -> ServiceState {
    let mut load_state = "";
    let mut active_state = "";
    for line in stdout.lines() {
        match line.split_once('=') {
            Some(("LoadState", v)) => load_state = v.trim(),
            Some(("ActiveState", v)) => active_state = v.trim(),
            _ => {}
        }
    }

    if load_state == "not-found" {
        ServiceState::Absent
    } else if active_state == "active" {
        ServiceState::Running
    } else {
        ServiceState::Stopped
    }
}
