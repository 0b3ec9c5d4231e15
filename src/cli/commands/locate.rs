//! `locate` subcommand.

use super::{absolute, print_json};
use crate::{
    bundler::{LocatorSettings, locator},
    cli::{LocateArgs, ProjectArgs},
    error::Result,
};

/// Lists the candidate projects and reports which one would be built.
pub async fn locate(args: LocateArgs) -> Result<i32> {
    let root = absolute(&args.project.root)?;
    let settings = locator_settings(&args.project);

    let candidates = locator::discover(&root, &settings).await?;
    let selected = locator::locate(&root, &settings).await?;

    if args.json {
        print_json(&serde_json::json!({
            "selected": selected,
            "candidates": candidates,
        }))?;
    } else {
        for candidate in &candidates {
            let marker = if *candidate == selected { "*" } else { " " };
            let kind = if candidate.is_web_project { "web" } else { "   " };
            println!("{marker} {kind} {}", candidate.path.display());
        }
    }

    Ok(0)
}

/// Builds locator settings from the shared project options.
pub(super) fn locator_settings(project: &ProjectArgs) -> LocatorSettings {
    LocatorSettings {
        descriptor_extension: project.descriptor_extension.clone(),
        web_marker: project.web_marker.clone(),
        ..LocatorSettings::default()
    }
}
