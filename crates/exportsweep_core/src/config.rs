use anyhow::{Context, Result};
use log::{debug, trace};
use serde::Deserialize;
use std::{fs, path::Path};

/// Contents of the optional JSON settings file.
///
/// ```json
/// {
///   // extra names consumed by the framework
///   "allow": ["loader", "action"],
///   "extensions": [".ts", ".tsx", ".mts"]
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Export names always treated as used, in addition to the built-in ones
    pub allow: Vec<String>,
    /// File name suffixes to scan; empty keeps the defaults
    pub extensions: Vec<String>,
}

pub fn read_settings(path: &Path) -> Result<Settings> {
    debug!("Reading settings from: {:?}", path);
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;

    // Strip comments (simple approach - removes // comments)
    let content_no_comments: String = content
        .lines()
        .map(|line| if let Some(idx) = line.find("//") { &line[..idx] } else { line })
        .collect::<Vec<_>>()
        .join("\n");

    let settings: Settings = serde_json::from_str(&content_no_comments)
        .with_context(|| format!("Invalid settings file {}", path.display()))?;
    trace!("Loaded settings: {:?}", settings);
    debug!(
        "Settings provide {} allowed names and {} extensions",
        settings.allow.len(),
        settings.extensions.len()
    );
    Ok(settings)
}
