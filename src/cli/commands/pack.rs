//! The packaging run: project checks, optional build, manifest, archive.

use super::build::ensure_build;
use crate::bundler::{
    ArchiveBuilder, PackedArchive,
    utils::{
        fs,
        path::{absolute, coerce_extension, default_output_path, resolve_include},
    },
};
use crate::cli::{Args, RuntimeConfig};
use crate::error::{BundlerError, CliError, Result};
use crate::manifest::{ManifestSummary, load_or_stage};
use crate::metadata::{OUTPUT_DIR, PackageDescriptor, load_descriptor};
use std::path::{Path, PathBuf};

/// Package the project named by `args` into a `.tapp` archive.
///
/// A staged manifest is removed before this returns, on success and on
/// every error after staging.
pub async fn pack(args: &Args, runtime_config: &RuntimeConfig) -> Result<PackedArchive> {
    let project = absolute(&args.project)?;
    if !project.exists() {
        return Err(invalid_arguments(format!(
            "Project path does not exist: {}",
            project.display()
        )));
    }
    if !project.is_dir() {
        return Err(invalid_arguments(format!(
            "Project path must be a directory: {}",
            project.display()
        )));
    }

    let descriptor = load_descriptor(&project)?;

    if args.build {
        ensure_build(&project, args.clean, runtime_config).await?;
    } else if args.clean {
        runtime_config.warn("--clean has no effect without --build")?;
    }

    let output_dir = project.join(OUTPUT_DIR);
    if !output_dir.is_dir() {
        return Err(BundlerError::Cli(CliError::MissingBuildOutput { path: output_dir }));
    }

    let overrides = args.overrides().map_err(invalid_arguments)?;
    let manifest_file =
        load_or_stage(&project, &descriptor, &overrides, args.force_manifest).await?;
    if manifest_file.is_synthesized() {
        runtime_config.verbose_println("Generated tapp.json from package.json")?;
    }

    let out_path = output_path(args.out.as_deref(), &project, &manifest_file.summary, &descriptor)?;
    fs::create_parent_dir(&out_path).await?;

    let includes = args
        .include
        .iter()
        .map(|include| resolve_include(&project, include))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    runtime_config.progress(&format!("Creating {} ...", out_path.display()))?;
    let packed = ArchiveBuilder::new(&out_path, &project)
        .manifest(&manifest_file.path)
        .output_dir(&output_dir)
        .includes(includes)
        .write()
        .await?;

    for entry in &packed.entries {
        runtime_config.verbose_println(&format!("  + {entry}"))?;
    }

    if let Some(entry) = manifest_file.summary.entry.as_deref() {
        if !packed.contains(entry) {
            runtime_config.warn(&format!(
                "manifest entry '{entry}' is not in the archive; the app will not start"
            ))?;
        }
    }

    drop(manifest_file);
    Ok(packed)
}

/// Final archive path.
///
/// An explicit `--out` gets the `.tapp` extension forced onto it; otherwise
/// the archive is named after the manifest (or package.json) name and placed
/// in the project directory.
pub fn output_path(
    out: Option<&Path>,
    project: &Path,
    manifest: &ManifestSummary,
    descriptor: &PackageDescriptor,
) -> Result<PathBuf> {
    if let Some(out) = out {
        return Ok(coerce_extension(&absolute(out)?));
    }

    let name = manifest
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .or(descriptor.name.as_deref())
        .unwrap_or("app");
    Ok(default_output_path(project, name))
}

fn invalid_arguments(reason: String) -> BundlerError {
    BundlerError::Cli(CliError::InvalidArguments { reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: Option<&str>) -> ManifestSummary {
        ManifestSummary {
            name: name.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn explicit_out_is_coerced() {
        let project = Path::new("/work/game");
        let path = output_path(
            Some(Path::new("/tmp/myapp.zip")),
            project,
            &named(None),
            &PackageDescriptor::default(),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/myapp.tapp"));

        let path = output_path(
            Some(Path::new("/tmp/myapp.tapp")),
            project,
            &named(None),
            &PackageDescriptor::default(),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/myapp.tapp"));
    }

    #[test]
    fn default_name_prefers_manifest() {
        let descriptor = PackageDescriptor {
            name: Some("pkg-name".into()),
            version: None,
        };
        let project = Path::new("/work/game");

        let path = output_path(None, project, &named(Some("My App!")), &descriptor).unwrap();
        assert_eq!(path, PathBuf::from("/work/game/MyApp.tapp"));

        let path = output_path(None, project, &named(None), &descriptor).unwrap();
        assert_eq!(path, PathBuf::from("/work/game/pkg-name.tapp"));

        let path = output_path(None, project, &named(None), &PackageDescriptor::default()).unwrap();
        assert_eq!(path, PathBuf::from("/work/game/app.tapp"));
    }
}
