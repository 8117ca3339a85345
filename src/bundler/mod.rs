//! Building and packaging of web application projects.
//!
//! This module provides the pieces the CLI sequences into one packaging run:
//! - [`BuildTool`] selection and the command runner for install/build steps
//! - [`ArchiveBuilder`] for writing the `.tapp` container
//! - path rules for archive names and the output file
//!
//! It can be used both from the CLI and as a library dependency.

pub mod archive;
pub mod builder;
pub mod error;
pub mod utils;

pub use archive::{ArchiveBuilder, ArchiveEntry, MANIFEST_ENTRY, PackedArchive, walk_entries};
pub use builder::{BuildTool, CommandSpec, ToolProfile, calculate_sha256, run_command};
pub use error::{Error, ErrorExt, Result};
pub use utils::path::ARCHIVE_EXTENSION;
