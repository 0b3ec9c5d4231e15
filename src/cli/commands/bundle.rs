//! `bundle` subcommand.

use super::{absolute, locate::locator_settings, print_json};
use crate::{
    bundler::{ReleasePipeline, SettingsBuilder, ToolchainSettings},
    cli::BundleArgs,
    error::Result,
};

/// Runs the full release pipeline.
pub async fn bundle(args: BundleArgs) -> Result<i32> {
    let root = absolute(&args.project.root)?;

    let mut toolchain = ToolchainSettings {
        program: args.toolchain.clone(),
        ..ToolchainSettings::default()
    };
    if !args.toolchain_paths.is_empty() {
        toolchain.candidates = args.toolchain_paths.clone();
    }

    let mut builder = SettingsBuilder::new()
        .project_root(&root)
        .configuration(args.configuration)
        .archive_name(args.archive_name.clone())
        .locator(locator_settings(&args.project))
        .toolchain(toolchain);
    if let Some(staging_root) = &args.staging_root {
        builder = builder.staging_root(absolute(staging_root)?);
    }
    if let Some(manifest) = &args.manifest {
        builder = builder.manifest_path(absolute(manifest)?);
    }
    if let Some(scripts) = &args.scripts {
        builder = builder.scripts_dir(absolute(scripts)?);
    }
    let settings = builder.build()?;

    let artifact = ReleasePipeline::new(settings).run().await?;

    if args.json {
        print_json(&artifact)?;
    } else {
        println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
        println!("SHA256:  {}", artifact.checksum);
    }

    Ok(0)
}
