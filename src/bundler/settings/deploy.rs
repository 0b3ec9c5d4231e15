//! Target-host settings for the lifecycle hooks.

use std::{path::PathBuf, time::Duration};

/// Default pause between `start` and the running-state check.
pub const DEFAULT_SETTLE_INTERVAL: Duration = Duration::from_secs(5);

/// Default pause between state observations while waiting for a stop.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Default number of state observations before giving up on a stop.
pub const DEFAULT_MAX_STOP_OBSERVATIONS: u32 = 60;

/// Settings consumed by [`LifecycleOrchestrator`](crate::lifecycle::LifecycleOrchestrator).
#[derive(Debug, Clone)]
pub struct DeploySettings {
    /// Service unit managed on the target host.
    pub service: String,

    /// Directory the deployment agent installs the bundle into.
    pub target_dir: PathBuf,

    /// Pause after `start` before the service state is verified.
    pub settle_interval: Duration,

    /// Pause between observations while waiting for the service to stop.
    pub poll_interval: Duration,

    /// Upper bound on observations while waiting for the service to stop.
    pub max_stop_observations: u32,
}

impl DeploySettings {
    /// Creates settings with the default timing for the given service and target.
    pub fn new(service: impl Into<String>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            service: service.into(),
            target_dir: target_dir.into(),
            settle_interval: DEFAULT_SETTLE_INTERVAL,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_stop_observations: DEFAULT_MAX_STOP_OBSERVATIONS,
        }
    }

    /// Overrides the settle interval.
    pub fn with_settle_interval(mut self, interval: Duration) -> Self {
        self.settle_interval = interval;
        self
    }

    /// Overrides the stop polling interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Overrides the stop observation bound.
    pub fn with_max_stop_observations(mut self, observations: u32) -> Self {
        self.max_stop_observations = observations;
        self
    }
}
