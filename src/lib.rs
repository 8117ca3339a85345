//! Packager for `.tapp` web application archives.
//!
//! This library provides the pieces behind the `tapp_pack` CLI:
//! - build-tool selection and install/build execution
//! - `tapp.json` manifest resolution and staging
//! - `.tapp` (ZIP) archive writing
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
