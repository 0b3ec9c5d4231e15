//! Command line interface for the release bundler.
//!
//! This module parses arguments, validates them, and dispatches to the
//! subcommand implementations in [`commands`].

mod args;
pub mod commands;

pub use args::{Args, AssembleArgs, BundleArgs, Command, HookArgs, LocateArgs, ProjectArgs};

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(args).await
}

/// Validates and executes already-parsed arguments.
pub async fn execute(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    match args.command {
        Command::Bundle(args) => commands::bundle(args).await,
        Command::Locate(args) => commands::locate(args).await,
        Command::Assemble(args) => commands::assemble(args).await,
        Command::Hook(args) => commands::hook(args).await,
    }
}
