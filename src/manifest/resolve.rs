//! Manifest resolution without filesystem access.
//!
//! Decides between an existing manifest and a synthesized one, and computes
//! the synthesized content from package.json plus command-line overrides.

use super::model::{
    DEFAULT_ENTRY, DEFAULT_HEIGHT, DEFAULT_WIDTH, DebugConfig, FALLBACK_NAME, FALLBACK_VERSION,
    ManifestSummary, TappManifest, WindowConfig,
};
use crate::metadata::PackageDescriptor;
use serde_json::Value;

/// Manifest values supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestOverrides {
    pub name: Option<String>,
    pub version: Option<String>,
    pub entry: Option<String>,
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Window cannot be resized
    pub fixed: bool,
    /// Open developer tools on launch
    pub devtools: bool,
}

impl Default for ManifestOverrides {
    fn default() -> Self {
        Self {
            name: None,
            version: None,
            entry: None,
            title: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fixed: false,
            devtools: false,
        }
    }
}

/// Outcome of manifest resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The project's own tapp.json, archived verbatim
    Existing(Value),
    /// Freshly generated; must be staged before archiving
    Synthesized(TappManifest),
}

impl Resolution {
    pub fn summary(&self) -> ManifestSummary {
        match self {
            Resolution::Existing(value) => ManifestSummary::from_value(value),
            Resolution::Synthesized(manifest) => manifest.summary(),
        }
    }
}

/// Resolve the manifest for a run.
///
/// `existing` holds the bytes of the project's tapp.json when it should be
/// used, i.e. it exists and no forced regeneration was requested. Any
/// well-formed JSON is accepted as-is; only a syntax error fails.
pub fn resolve(
    existing: Option<&[u8]>,
    descriptor: &PackageDescriptor,
    overrides: &ManifestOverrides,
) -> serde_json::Result<Resolution> {
    match existing {
        Some(bytes) => Ok(Resolution::Existing(serde_json::from_slice(bytes)?)),
        None => Ok(Resolution::Synthesized(synthesize(descriptor, overrides))),
    }
}

/// Build a manifest from package.json and overrides.
pub fn synthesize(descriptor: &PackageDescriptor, overrides: &ManifestOverrides) -> TappManifest {
    let name = first_present(&overrides.name, &descriptor.name, FALLBACK_NAME);
    let version = first_present(&overrides.version, &descriptor.version, FALLBACK_VERSION);
    let entry = non_empty(&overrides.entry)
        .map(|entry| entry.replace('\\', "/"))
        .unwrap_or_else(|| DEFAULT_ENTRY.to_string());
    let title = non_empty(&overrides.title)
        .map(str::to_string)
        .unwrap_or_else(|| name.clone());

    TappManifest {
        name: Some(name),
        version: Some(version),
        entry: Some(entry),
        window: Some(WindowConfig {
            title: Some(title),
            width: overrides.width,
            height: overrides.height,
            resizable: !overrides.fixed,
        }),
        debug: Some(DebugConfig {
            open_dev_tools: overrides.devtools,
        }),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn first_present(preferred: &Option<String>, fallback: &Option<String>, default: &str) -> String {
    non_empty(preferred)
        .or_else(|| non_empty(fallback))
        .unwrap_or(default)
        .to_string()
}
