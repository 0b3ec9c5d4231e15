//! `assemble` subcommand.

use super::{absolute, print_json};
use crate::{
    bundler::{AssembleRequest, assemble as assemble_bundle},
    cli::AssembleArgs,
    error::{CliError, Result},
};

/// Packages existing build output without running the toolchain.
pub async fn assemble(args: AssembleArgs) -> Result<i32> {
    let destination = absolute(&args.output)?;
    let staging_dir = match &args.staging_dir {
        Some(dir) => absolute(dir)?,
        None => destination
            .parent()
            .ok_or_else(|| CliError::InvalidArguments {
                reason: format!("Output has no parent directory: {}", destination.display()),
            })?
            .join("bundle-staging"),
    };

    let request = AssembleRequest {
        build_output: absolute(&args.build_output)?,
        manifest: args.manifest.as_deref().map(absolute).transpose()?,
        scripts_dir: args.scripts.as_deref().map(absolute).transpose()?,
        staging_dir,
        destination,
    };

    let bundle = assemble_bundle(&request).await?;

    if args.json {
        print_json(&bundle)?;
    } else {
        println!("Created: {}", bundle.archive.display());
        for entry in &bundle.entries {
            println!("  {entry}");
        }
    }

    Ok(0)
}
