//! Path handling for archive sources and the output archive.

use crate::bundler::error::{Error, Result};
use path_absolutize::Absolutize;
use std::path::{Component, Path, PathBuf};

/// Extension every produced archive carries.
pub const ARCHIVE_EXTENSION: &str = "tapp";

/// Stem used when a project name sanitizes to nothing.
const FALLBACK_STEM: &str = "app";

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        _ => path.to_path_buf(),
    }
}

/// Expand `~` and make the path absolute against the current directory.
///
/// `.` and `..` segments are resolved lexically; the path need not exist.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path);
    Ok(expanded.absolutize()?.into_owned())
}

/// Resolve a user-supplied include against the project directory.
pub fn resolve_include(project: &Path, include: &Path) -> Result<PathBuf> {
    let expanded = expand_home(include);
    if expanded.is_absolute() {
        absolute(&expanded)
    } else {
        Ok(expanded.absolutize_from(project)?.into_owned())
    }
}

/// Archive entry name for `path`: relative to `base`, forward-slash separated.
pub fn archive_name(path: &Path, base: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).map_err(|_| Error::OutsideBase {
        path: path.to_path_buf(),
        base: base.to_path_buf(),
    })?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy()),
            Component::CurDir => {}
            _ => {
                return Err(Error::OutsideBase {
                    path: path.to_path_buf(),
                    base: base.to_path_buf(),
                });
            }
        }
    }

    if segments.is_empty() {
        crate::bail!("{} has no name inside {}", path.display(), base.display());
    }
    Ok(segments.join("/"))
}

/// Turn a project name into a safe file stem.
///
/// Keeps alphanumerics plus `-`, `_` and `.`, trims separators from both ends
/// and falls back to `app` when nothing is left.
pub fn sanitize_file_stem(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    let trimmed = kept.trim_matches(|c| matches!(c, '.' | '_' | '-'));
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Force the archive extension onto an explicit output path.
///
/// A path already ending in `.tapp` (any case) is returned unchanged; any
/// other extension is replaced.
pub fn coerce_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ARCHIVE_EXTENSION));
    if has_extension {
        path.to_path_buf()
    } else {
        path.with_extension(ARCHIVE_EXTENSION)
    }
}

/// Default archive location: `<project>/<sanitized name>.tapp`.
pub fn default_output_path(project: &Path, name: &str) -> PathBuf {
    project.join(format!("{}.{}", sanitize_file_stem(name), ARCHIVE_EXTENSION))
}
