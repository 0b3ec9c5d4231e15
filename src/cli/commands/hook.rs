//! `hook` subcommand.

use crate::{
    bundler::DeploySettings,
    cli::HookArgs,
    error::{CliError, Result},
    lifecycle::{LifecycleHook, LifecycleOrchestrator, Systemctl},
};
use std::time::Duration;

/// Runs one lifecycle hook against systemd.
pub async fn hook(args: HookArgs) -> Result<i32> {
    let target_dir = match (&args.target_dir, args.hook) {
        (Some(dir), _) => dir.clone(),
        (None, LifecycleHook::PreInstall) => {
            return Err(CliError::MissingArgument {
                argument: "--target-dir (or DEPLOY_TARGET_DIR)".to_string(),
            }
            .into());
        }
        (None, LifecycleHook::PostInstall) => Default::default(),
    };

    let settings = DeploySettings::new(args.service.clone(), target_dir)
        .with_settle_interval(Duration::from_secs(args.settle_secs));
    let manager = match &args.systemctl {
        Some(program) => Systemctl::with_program(program),
        None => Systemctl::new(),
    };

    LifecycleOrchestrator::new(manager, settings)
        .run(args.hook)
        .await?;

    Ok(0)
}
