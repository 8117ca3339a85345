//! Package metadata from a project's package.json

use crate::error::{BundlerError, CliError, Result};
use serde_json::Value;
use std::path::Path;

/// File name of the package descriptor at the project root.
pub const DESCRIPTOR_FILE: &str = "package.json";

/// Build output directory at the project root.
pub const OUTPUT_DIR: &str = "dist";

/// Fields of package.json that feed the manifest.
///
/// Only string and numeric values count; empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDescriptor {
    /// `name` from package.json
    pub name: Option<String>,

    /// `version` from package.json
    pub version: Option<String>,
}

impl PackageDescriptor {
    /// Extract descriptor fields from parsed package.json content.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            name: object.get("name").and_then(text_field),
            version: object.get("version").and_then(text_field),
        })
    }
}

/// Non-empty string or number as text; anything else is absent.
pub(crate) fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Load package.json from the project root (single read + parse).
pub fn load_descriptor(project: &Path) -> Result<PackageDescriptor> {
    let path = project.join(DESCRIPTOR_FILE);
    if !path.is_file() {
        return Err(BundlerError::Cli(CliError::MissingDescriptor { path }));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| {
        BundlerError::Cli(CliError::InvalidDescriptor {
            path: path.clone(),
            reason: e.to_string(),
        })
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| {
        BundlerError::Cli(CliError::InvalidDescriptor {
            path: path.clone(),
            reason: e.to_string(),
        })
    })?;

    let descriptor = PackageDescriptor::from_value(&value).ok_or_else(|| {
        BundlerError::Cli(CliError::InvalidDescriptor {
            path: path.clone(),
            reason: "top-level value is not a JSON object".to_string(),
        })
    })?;

    log::debug!(
        "Loaded {}: name={:?} version={:?}",
        path.display(),
        descriptor.name,
        descriptor.version
    );
    Ok(descriptor)
}
