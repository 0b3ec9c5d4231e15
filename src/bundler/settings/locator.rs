//! Project discovery settings.

use std::path::PathBuf;

/// Settings for the project locator.
///
/// The defaults target .NET web applications: `*.csproj` descriptors, with
/// web projects recognised by their `Microsoft.NET.Sdk.Web` SDK attribute.
#[derive(Debug, Clone)]
pub struct LocatorSettings {
    /// Descriptor file extension, without the leading dot.
    pub descriptor_extension: String,

    /// Content marker identifying a web application descriptor.
    pub web_marker: String,

    /// Directory names never descended into.
    ///
    /// Hidden directories (leading `.`) are always skipped.
    pub skip_dirs: Vec<String>,

    /// Additional absolute paths excluded from the search, such as the
    /// staging root when it lives inside the project tree.
    pub exclude: Vec<PathBuf>,
}

impl Default for LocatorSettings {
    fn default() -> Self {
        Self {
            descriptor_extension: "csproj".into(),
            web_marker: "Microsoft.NET.Sdk.Web".into(),
            skip_dirs: vec!["bin".into(), "obj".into(), "node_modules".into()],
            exclude: Vec::new(),
        }
    }
}
