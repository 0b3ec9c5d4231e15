//! Service manager abstraction.

use crate::bundler::Result;
use serde::Serialize;
use std::fmt;

/// Observed state of a service unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    /// No unit definition is registered under the name.
    Absent,
    /// Registered but not running.
    Stopped,
    /// Registered and active.
    Running,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Absent => "absent",
            Self::Stopped => "stopped",
            Self::Running => "running",
        })
    }
}

/// Operations the lifecycle hooks need from the host service manager.
///
/// Implementations only observe and command; they never persist state.
/// Any command that fails must surface as
/// [`Error::ServiceManagerError`](crate::bundler::Error::ServiceManagerError).
#[allow(async_fn_in_trait)]
pub trait ServiceManager {
    /// Observes the current state of `service`.
    async fn query(&self, service: &str) -> Result<ServiceState>;

    /// Stops `service`.
    async fn stop(&self, service: &str) -> Result<()>;

    /// Starts `service`.
    async fn start(&self, service: &str) -> Result<()>;

    /// Reloads unit definitions from disk.
    async fn reload_definitions(&self) -> Result<()>;

    /// Human-readable diagnostic status for `service`.
    async fn status_text(&self, service: &str) -> Result<String>;
}
