//! Configuration structures for release and deployment operations.
//!
//! This module provides the configuration types for the build-host pipeline
//! ([`Settings`], built with [`SettingsBuilder`]) and for the target-host
//! lifecycle hooks ([`DeploySettings`]).

mod builder;
mod configuration;
mod core;
mod deploy;
mod locator;
mod toolchain;

// Re-export all public types
pub use builder::{
    DEFAULT_ARCHIVE_NAME, DEFAULT_MANIFEST_NAME, DEFAULT_SCRIPTS_DIR, DEFAULT_STAGING_DIR,
    SettingsBuilder,
};
pub use configuration::BuildConfiguration;
pub use core::Settings;
pub use deploy::{
    DEFAULT_MAX_STOP_OBSERVATIONS, DEFAULT_POLL_INTERVAL, DEFAULT_SETTLE_INTERVAL, DeploySettings,
};
pub use locator::LocatorSettings;
pub use toolchain::{DEFAULT_TOOLCHAIN, ToolchainSettings};
