//! Pre-install and post-install hook procedures.

use super::{
    hook::LifecycleHook,
    service::{ServiceManager, ServiceState},
};
use crate::bundler::{
    error::{Error, Result},
    settings::DeploySettings,
    utils::fs,
};

/// Runs the lifecycle hooks against a service manager.
///
/// Each hook is short-lived and fail-fast: the first failing service manager
/// command aborts it. Nothing is retried; retry and rollback policy belongs
/// to the deployment agent.
#[derive(Debug)]
pub struct LifecycleOrchestrator<M> {
    manager: M,
    settings: DeploySettings,
}

impl<M: ServiceManager> LifecycleOrchestrator<M> {
    /// Creates an orchestrator for the service and target in `settings`.
    pub fn new(manager: M, settings: DeploySettings) -> Self {
        Self { manager, settings }
    }

    /// Returns the service manager.
    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Returns the deploy settings.
    pub fn settings(&self) -> &DeploySettings {
        &self.settings
    }

    /// Runs the given hook.
    pub async fn run(&self, hook: LifecycleHook) -> Result<()> {
        log::info!("Running {} hook for {}", hook, self.settings.service);
        match hook {
            LifecycleHook::PreInstall => self.pre_install().await,
            LifecycleHook::PostInstall => self.post_install().await,
        }
    }

    /// Stops the service if it is running and ensures the target directory.
    ///
    /// A service that is not registered yet (first deployment) is not an error.
    /// On success the directory exists and the service is not running.
    pub async fn pre_install(&self) -> Result<()> {
        let service = &self.settings.service;

        match self.manager.query(service).await? {
            ServiceState::Running => {
                log::info!("Stopping {}", service);
                self.manager.stop(service).await?;
                self.wait_until_stopped().await?;
            }
            ServiceState::Stopped => log::info!("{} already stopped", service),
            ServiceState::Absent => log::info!("{} not registered yet; nothing to stop", service),
        }

        fs::create_dir_all(&self.settings.target_dir, false).await?;
        log::info!(
            "✓ Target directory ready: {}",
            self.settings.target_dir.display()
        );
        Ok(())
    }

    /// Reloads unit definitions, starts the service and verifies it is running
    /// after the settle interval.
    ///
    /// # Errors
    ///
    /// [`Error::StartupFailed`] with the service manager's status text when
    /// the service is not running once the settle interval has passed.
    pub async fn post_install(&self) -> Result<()> {
        let service = &self.settings.service;

        self.manager.reload_definitions().await?;
        log::info!("Starting {}", service);
        self.manager.start(service).await?;

        tokio::time::sleep(self.settings.settle_interval).await;

        let state = self.manager.query(service).await?;
        if state != ServiceState::Running {
            let status_text = self.manager.status_text(service).await?;
            log::error!("{} is {} after start", service, state);
            return Err(Error::StartupFailed {
                service: service.clone(),
                status_text,
            });
        }

        log::info!("✓ {} is running", service);
        Ok(())
    }

    async fn wait_until_stopped(&self) -> Result<()> {
        let service = &self.settings.service;

        for observation in 1..=self.settings.max_stop_observations {
            let state = self.manager.query(service).await?;
            if state != ServiceState::Running {
                log::debug!("{} is {} after {} observation(s)", service, state, observation);
                return Ok(());
            }
            tokio::time::sleep(self.settings.poll_interval).await;
        }

        Err(Error::ServiceDidNotStop {
            service: service.clone(),
            observations: self.settings.max_stop_observations,
        })
    }
}
