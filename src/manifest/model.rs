//! The `tapp.json` manifest model.
//!
//! [`TappManifest`] is what the packager generates; field names and defaults
//! match what the `.tapp` runtime reads. A project's own tapp.json is never
//! checked against this model. Only [`ManifestSummary`] is read from it.

use crate::metadata::text_field;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default window width in pixels.
pub const DEFAULT_WIDTH: u32 = 1280;

/// Default window height in pixels.
pub const DEFAULT_HEIGHT: u32 = 720;

/// Default entry point, relative to the archive root.
pub const DEFAULT_ENTRY: &str = "dist/index.html";

/// Name used when neither an override nor package.json provides one.
pub const FALLBACK_NAME: &str = "TappApp";

/// Version used when neither an override nor package.json provides one.
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Application manifest stored at the archive root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TappManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// HTML entry point relative to the archive root, forward slashes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugConfig>,
}

/// Initial window settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_resizable")]
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            resizable: true,
        }
    }
}

/// Developer settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Open the developer tools when the app launches.
    #[serde(rename = "openDevTools", default)]
    pub open_dev_tools: bool,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_resizable() -> bool {
    true
}

impl TappManifest {
    /// Pretty-printed UTF-8 JSON, two-space indentation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The manifest fields the packager itself looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSummary {
    /// Names the default output file
    pub name: Option<String>,
    /// Checked against the archived entries
    pub entry: Option<String>,
}

impl ManifestSummary {
    /// Read `name` and `entry` from arbitrary manifest JSON.
    ///
    /// Values of unexpected types are treated as absent, never as errors.
    pub fn from_value(value: &Value) -> Self {
        Self {
            name: value.get("name").and_then(text_field),
            entry: value
                .get("entry")
                .and_then(Value::as_str)
                .filter(|entry| !entry.is_empty())
                .map(String::from),
        }
    }
}

impl TappManifest {
    pub fn summary(&self) -> ManifestSummary {
        ManifestSummary {
            name: self.name.clone(),
            entry: self.entry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_ignores_other_fields() {
        let value = json!({
            "name": "Shipped",
            "version": 1,
            "entry": "index.html",
            "window": {"width": 1280.0, "resizable": "yes"}
        });
        let summary = ManifestSummary::from_value(&value);
        assert_eq!(summary.name.as_deref(), Some("Shipped"));
        assert_eq!(summary.entry.as_deref(), Some("index.html"));
    }

    #[test]
    fn summary_tolerates_odd_types() {
        let summary = ManifestSummary::from_value(&json!({"name": 42, "entry": ["a"]}));
        assert_eq!(summary.name.as_deref(), Some("42"));
        assert_eq!(summary.entry, None);

        assert_eq!(ManifestSummary::from_value(&json!([1, 2])), ManifestSummary::default());
    }
}
