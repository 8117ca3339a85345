//! Error types for packaging runs.
//!
//! Every failure propagates as a [`BundlerError`] to `main`, which prints one
//! diagnostic line and exits with [`BundlerError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all packaging operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// Invocation and project input errors
    #[error(transparent)]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Build and archive errors
    #[error(transparent)]
    Bundler(#[from] crate::bundler::Error),
}

/// Errors caused by the invocation or the project's contents
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Project has no package.json
    #[error("No package.json found in the project directory: {}", .path.display())]
    MissingDescriptor {
        /// Expected descriptor location
        path: PathBuf,
    },

    /// package.json could not be read or parsed
    #[error("Could not read/parse {}: {reason}", .path.display())]
    InvalidDescriptor {
        /// Descriptor location
        path: PathBuf,
        /// Parser or IO message
        reason: String,
    },

    /// Existing tapp.json could not be read or parsed
    #[error("{} exists but cannot be parsed: {reason}", .path.display())]
    InvalidManifest {
        /// Manifest location
        path: PathBuf,
        /// Parser or IO message
        reason: String,
    },

    /// Build output directory is missing
    #[error("Build output not found at {}. Did you forget to build? (use --build)", .path.display())]
    MissingBuildOutput {
        /// Expected output directory
        path: PathBuf,
    },
}

impl BundlerError {
    /// Process exit status for this error.
    ///
    /// A failed external command passes its own exit code through; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BundlerError::Bundler(crate::bundler::Error::CommandFailed {
                code: Some(code),
                ..
            }) if *code != 0 => *code,
            _ => 1,
        }
    }
}
