//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap. Every tunable has a
//! default; the ones a deployment environment sets have environment variable
//! fallbacks.

use crate::{bundler::BuildConfiguration, lifecycle::LifecycleHook};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Release bundler and deployment lifecycle hooks for web applications
#[derive(Parser, Debug)]
#[command(
    name = "release-bundler",
    version,
    about = "Release bundler and deployment lifecycle hooks for web applications",
    long_about = "Builds a web application, packages it with its deployment manifest and hook
scripts into a single archive, and runs the pre-install/post-install hooks on the target host.

Usage:
  release-bundler bundle --root . --configuration Release
  release-bundler locate --root ./src
  release-bundler assemble --build-output ./publish --output ./bundle.zip
  release-bundler hook pre-install --service shop --target-dir /var/www/shop
  release-bundler hook post-install --service shop

Exit code 0 = the requested step completed."
)]
pub struct Args {
    /// Step to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Locate, build and bundle the project
    Bundle(BundleArgs),

    /// Show which project would be built
    Locate(LocateArgs),

    /// Package existing build output into a bundle
    Assemble(AssembleArgs),

    /// Run a deployment lifecycle hook on the target host
    Hook(HookArgs),
}

/// Project discovery options shared by `bundle` and `locate`
#[derive(ClapArgs, Debug)]
pub struct ProjectArgs {
    /// Root of the tree searched for project descriptors
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Project descriptor extension
    #[arg(long, value_name = "EXT", default_value = "csproj")]
    pub descriptor_extension: String,

    /// Content marker identifying the web project
    #[arg(long, value_name = "TEXT", default_value = "Microsoft.NET.Sdk.Web")]
    pub web_marker: String,
}

/// Arguments for `bundle`
#[derive(ClapArgs, Debug)]
pub struct BundleArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Build configuration
    #[arg(
        short,
        long,
        value_enum,
        env = "BUILD_CONFIGURATION",
        default_value_t = BuildConfiguration::Release
    )]
    pub configuration: BuildConfiguration,

    /// Scratch directory for build output, staging and the archive
    /// [default: <root>/artifacts]
    #[arg(long, value_name = "DIR", env = "BUNDLE_STAGING_ROOT")]
    pub staging_root: Option<PathBuf>,

    /// Deployment manifest to place at the bundle root [default: <root>/appspec.yml]
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Hook scripts directory [default: <root>/scripts]
    #[arg(long, value_name = "DIR")]
    pub scripts: Option<PathBuf>,

    /// Archive file name, created under the staging root
    #[arg(long, value_name = "NAME", default_value = "bundle.zip")]
    pub archive_name: String,

    /// Toolchain program looked up on PATH
    #[arg(long, value_name = "PROGRAM", env = "BUNDLE_TOOLCHAIN", default_value = "dotnet")]
    pub toolchain: String,

    /// Explicit toolchain locations, probed in order before PATH
    #[arg(
        long = "toolchain-path",
        value_name = "PATH",
        env = "BUNDLE_TOOLCHAIN_PATHS",
        value_delimiter = ':'
    )]
    pub toolchain_paths: Vec<PathBuf>,

    /// Print the artifact report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `locate`
#[derive(ClapArgs, Debug)]
pub struct LocateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print every candidate as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `assemble`
#[derive(ClapArgs, Debug)]
pub struct AssembleArgs {
    /// Build output directory to place under app/
    #[arg(long, value_name = "DIR")]
    pub build_output: PathBuf,

    /// Deployment manifest to place at the bundle root
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Hook scripts directory
    #[arg(long, value_name = "DIR")]
    pub scripts: Option<PathBuf>,

    /// Staging directory [default: <output dir>/bundle-staging]
    #[arg(long, value_name = "DIR")]
    pub staging_dir: Option<PathBuf>,

    /// Archive to create
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Print the bundle report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `hook`
#[derive(ClapArgs, Debug)]
pub struct HookArgs {
    /// Lifecycle hook to run
    #[arg(value_enum)]
    pub hook: LifecycleHook,

    /// Service unit to manage
    #[arg(long, value_name = "UNIT", env = "DEPLOY_SERVICE")]
    pub service: String,

    /// Directory the bundle is installed into (required for pre-install)
    #[arg(long, value_name = "DIR", env = "DEPLOY_TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Seconds to wait after start before verifying the service
    #[arg(long, value_name = "SECS", env = "DEPLOY_SETTLE_SECS", default_value_t = 5)]
    pub settle_secs: u64,

    /// systemctl binary [default: systemctl on PATH]
    #[arg(long, value_name = "PATH")]
    pub systemctl: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Bundle(args) => validate_project(&args.project),
            Command::Locate(args) => validate_project(&args.project),
            Command::Assemble(args) => {
                if args.output.file_name().is_none() {
                    return Err(format!("Output must name a file: {}", args.output.display()));
                }
                Ok(())
            }
            Command::Hook(args) => {
                if args.service.trim().is_empty() {
                    return Err("Service name cannot be empty".to_string());
                }
                Ok(())
            }
        }
    }
}

fn validate_project(project: &ProjectArgs) -> Result<(), String> {
    if project.descriptor_extension.is_empty() || project.descriptor_extension.starts_with('.') {
        return Err(format!(
            "Invalid descriptor extension: {:?} (give it without the leading dot)",
            project.descriptor_extension
        ));
    }
    if project.web_marker.is_empty() {
        return Err("Web marker cannot be empty".to_string());
    }
    Ok(())
}
