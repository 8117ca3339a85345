//! Where the authoritative manifest bytes live for a run.
//!
//! An existing `tapp.json` is archived straight from the project root. A
//! synthesized manifest is written to `.tapp_tmp/tapp.json` inside the
//! project and never to the project root; the staging directory is removed
//! when its [`StagingDir`] guard is dropped.

use super::model::ManifestSummary;
use super::resolve::{ManifestOverrides, Resolution, resolve};
use crate::bundler::{ErrorExt, MANIFEST_ENTRY, utils::fs};
use crate::error::{BundlerError, CliError, Result};
use crate::metadata::PackageDescriptor;
use std::path::{Path, PathBuf};

/// Staging directory name inside the project.
pub const STAGING_DIR: &str = ".tapp_tmp";

/// Owns the staging directory and removes it on drop.
///
/// Removal is best-effort; failures are logged and otherwise ignored.
#[derive(Debug)]
pub struct StagingDir {
    path: PathBuf,
}

impl StagingDir {
    /// Create (or reuse) the staging directory inside `project`.
    pub async fn create(project: &Path) -> Result<Self> {
        let path = project.join(STAGING_DIR);
        fs::create_dir_all(&path).await?;
        log::debug!("Staging directory ready: {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => log::debug!("Removed staging directory {}", self.path.display()),
            Err(e) => log::debug!(
                "Could not remove staging directory {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

/// The manifest for a run and the file holding its bytes.
#[derive(Debug)]
pub struct ManifestFile {
    /// Fields the packager reads from the manifest
    pub summary: ManifestSummary,
    /// Authoritative on-disk location for the rest of the run
    pub path: PathBuf,
    /// Present when the manifest was synthesized
    pub staging: Option<StagingDir>,
}

impl ManifestFile {
    pub fn is_synthesized(&self) -> bool {
        self.staging.is_some()
    }
}

/// Resolve the manifest for `project` and settle where its bytes live.
///
/// With `force` set, an existing tapp.json is ignored. The project's own
/// tapp.json is only ever read.
pub async fn load_or_stage(
    project: &Path,
    descriptor: &PackageDescriptor,
    overrides: &ManifestOverrides,
    force: bool,
) -> Result<ManifestFile> {
    let existing_path = project.join(MANIFEST_ENTRY);
    let existing = if existing_path.is_file() && !force {
        let bytes = tokio::fs::read(&existing_path)
            .await
            .map_err(|e| invalid_manifest(&existing_path, e.to_string()))?;
        Some(bytes)
    } else {
        None
    };

    let resolution = resolve(existing.as_deref(), descriptor, overrides)
        .map_err(|e| invalid_manifest(&existing_path, e.to_string()))?;

    let summary = resolution.summary();
    match resolution {
        Resolution::Existing(_) => {
            log::info!("Using existing manifest {}", existing_path.display());
            remove_stale_staging(project).await;
            Ok(ManifestFile {
                summary,
                path: existing_path,
                staging: None,
            })
        }
        Resolution::Synthesized(manifest) => {
            let staging = StagingDir::create(project).await?;
            let path = staging.path().join(MANIFEST_ENTRY);
            let json = manifest.to_json()?;
            tokio::fs::write(&path, json)
                .await
                .fs_context("writing staged manifest", &path)?;
            log::info!("Generated manifest staged at {}", path.display());
            Ok(ManifestFile {
                summary,
                path,
                staging: Some(staging),
            })
        }
    }
}

/// A `.tapp_tmp` left behind by an interrupted run; removal is best-effort.
async fn remove_stale_staging(project: &Path) {
    let stale = project.join(STAGING_DIR);
    if !stale.exists() {
        return;
    }
    match fs::remove_dir_all(&stale).await {
        Ok(()) => log::debug!("Removed stale staging directory {}", stale.display()),
        Err(e) => log::warn!("Could not remove stale staging directory: {}", e),
    }
}

fn invalid_manifest(path: &Path, reason: String) -> BundlerError {
    BundlerError::Cli(CliError::InvalidManifest {
        path: path.to_path_buf(),
        reason,
    })
}
