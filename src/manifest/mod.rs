//! The `tapp.json` application manifest.
//!
//! - [`model`] - serde model shared with the `.tapp` runtime
//! - [`resolve`] - pure choice between existing and synthesized manifests
//! - [`staging`] - on-disk location of the manifest for a packaging run

pub mod model;
pub mod resolve;
pub mod staging;

pub use model::{DebugConfig, ManifestSummary, TappManifest, WindowConfig};
pub use resolve::{ManifestOverrides, Resolution, synthesize};
pub use staging::{ManifestFile, STAGING_DIR, StagingDir, load_or_stage};
