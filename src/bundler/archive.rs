//! `.tapp` archive creation.
//!
//! A `.tapp` file is a plain deflate-compressed ZIP container. The manifest is
//! always stored at the root as `tapp.json`; every other entry keeps its path
//! relative to the project directory, with forward slashes.
//!
//! All sources are validated before the archive file is created. Once writing
//! starts, a failure leaves a truncated archive behind; there is no rollback.

use crate::bundler::{
    builder::calculate_sha256,
    error::{Error, ErrorExt, Result},
    utils::path::archive_name,
};
use std::{
    collections::HashSet,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Name of the manifest entry at the archive root.
pub const MANIFEST_ENTRY: &str = "tapp.json";

/// One file to store: where it is on disk and what it is called in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub source: PathBuf,
    pub name: String,
}

impl ArchiveEntry {
    /// Entry for `source`, named relative to `base`.
    pub fn new(source: &Path, base: &Path) -> Result<Self> {
        Ok(Self {
            source: source.to_path_buf(),
            name: archive_name(source, base)?,
        })
    }
}

/// Lazily enumerate every file below `dir` as archive entries relative to `base`.
///
/// Entries come out sorted by file name within each directory. Directories
/// themselves are not emitted; symlinks to files are followed, symlinked
/// directories are not descended into.
pub fn walk_entries<'a>(
    dir: &'a Path,
    base: &'a Path,
) -> impl Iterator<Item = Result<ArchiveEntry>> + 'a {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) if entry.path().is_file() => Some(ArchiveEntry::new(entry.path(), base)),
            Ok(_) => None,
            Err(e) => Some(Err(e.into())),
        })
}

/// A validated archive source.
#[derive(Debug, Clone)]
enum Source {
    Dir(PathBuf),
    File(PathBuf),
}

/// Result of a finished archive write.
#[derive(Debug, Clone)]
pub struct PackedArchive {
    /// Final archive location
    pub path: PathBuf,
    /// Entry names in write order, starting with `tapp.json`
    pub entries: Vec<String>,
    /// Archive size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive
    pub checksum: String,
}

impl PackedArchive {
    /// Whether an entry with this exact name was written.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }
}

/// Writes a `.tapp` archive from a manifest, the build output and extra includes.
///
/// # Examples
///
/// ```no_run
/// use tapp_pack::bundler::ArchiveBuilder;
///
/// # async fn example() -> tapp_pack::bundler::Result<()> {
/// let packed = ArchiveBuilder::new("game/Game.tapp", "game")
///     .manifest("game/tapp.json")
///     .output_dir("game/dist")
///     .include("game/LICENSE")
///     .write()
///     .await?;
/// println!("{} entries, sha256 {}", packed.entries.len(), packed.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveBuilder {
    target: PathBuf,
    base: PathBuf,
    manifest: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    includes: Vec<PathBuf>,
}

impl ArchiveBuilder {
    /// Archive at `target` with entry names relative to `base`.
    pub fn new<P: AsRef<Path>, B: AsRef<Path>>(target: P, base: B) -> Self {
        Self {
            target: target.as_ref().to_path_buf(),
            base: base.as_ref().to_path_buf(),
            manifest: None,
            output_dir: None,
            includes: Vec::new(),
        }
    }

    /// Manifest file stored as `tapp.json`, whatever its own name is.
    ///
    /// # Required
    pub fn manifest<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.manifest = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build output directory archived recursively.
    ///
    /// # Required
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Extra file or directory to archive. Must be absolute or relative to
    /// the current directory; callers resolve project-relative includes.
    pub fn include<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.includes.push(path.as_ref().to_path_buf());
        self
    }

    /// Extra files or directories to archive.
    pub fn includes<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.includes
            .extend(paths.into_iter().map(|p| p.as_ref().to_path_buf()));
        self
    }

    /// Validate sources, write the archive and report its size and checksum.
    ///
    /// The target file is overwritten if it exists. Nothing is created when
    /// validation fails.
    pub async fn write(self) -> Result<PackedArchive> {
        let manifest = self
            .manifest
            .clone()
            .ok_or_else(|| Error::GenericError("manifest path is required".into()))?;
        let sources = self.collect_sources()?;

        let target = self.target.clone();
        let entries = tokio::task::spawn_blocking(move || self.write_blocking(&manifest, &sources))
            .await
            .map_err(|e| Error::GenericError(format!("Archive task panicked: {e}")))??;

        let size = tokio::fs::metadata(&target)
            .await
            .fs_context("reading archive metadata", &target)?
            .len();
        let checksum = calculate_sha256(&target).await?;

        log::info!(
            "Wrote {} ({} entries, {} bytes)",
            target.display(),
            entries.len(),
            size
        );

        Ok(PackedArchive {
            path: target,
            entries,
            size,
            checksum,
        })
    }

    fn collect_sources(&self) -> Result<Vec<Source>> {
        let output_dir = self
            .output_dir
            .as_ref()
            .ok_or_else(|| Error::GenericError("build output directory is required".into()))?;
        if !output_dir.is_dir() {
            return Err(Error::MissingSource(output_dir.clone()));
        }

        let mut sources = vec![Source::Dir(output_dir.clone())];
        for include in &self.includes {
            if include.is_dir() {
                sources.push(Source::Dir(include.clone()));
            } else if include.is_file() {
                sources.push(Source::File(include.clone()));
            } else {
                return Err(Error::MissingSource(include.clone()));
            }
        }

        for source in &sources {
            let (Source::Dir(path) | Source::File(path)) = source;
            if !path.starts_with(&self.base) {
                return Err(Error::OutsideBase {
                    path: path.clone(),
                    base: self.base.clone(),
                });
            }
        }

        Ok(sources)
    }

    fn write_blocking(&self, manifest: &Path, sources: &[Source]) -> Result<Vec<String>> {
        let file = File::create(&self.target).fs_context("creating archive", &self.target)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);

        let mut written = HashSet::new();
        let mut entries = Vec::new();

        // Manifest first, under its fixed name
        zip.start_file(MANIFEST_ENTRY, options)?;
        copy_into(manifest, &mut zip)?;
        written.insert(MANIFEST_ENTRY.to_string());
        entries.push(MANIFEST_ENTRY.to_string());

        for source in sources {
            let walked: Box<dyn Iterator<Item = Result<ArchiveEntry>> + '_> = match source {
                Source::Dir(dir) => Box::new(walk_entries(dir, &self.base)),
                Source::File(file) => Box::new(std::iter::once(ArchiveEntry::new(file, &self.base))),
            };

            for entry in walked {
                let entry = entry?;
                if entry.source == self.target {
                    log::debug!("Skipping the archive being written: {}", entry.name);
                    continue;
                }
                if !written.insert(entry.name.clone()) {
                    log::debug!("Skipping duplicate entry: {}", entry.name);
                    continue;
                }

                log::debug!("Adding {}", entry.name);
                zip.start_file(entry.name.as_str(), options)?;
                copy_into(&entry.source, &mut zip)?;
                entries.push(entry.name);
            }
        }

        zip.finish()?
            .flush()
            .fs_context("flushing archive", &self.target)?;
        Ok(entries)
    }
}

fn copy_into<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let mut file = File::open(path).fs_context("opening file for archiving", path)?;
    io::copy(&mut file, out).fs_context("archiving", path)?;
    Ok(())
}
