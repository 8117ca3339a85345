//! Error types for bundling operations.
//!
//! Filesystem failures carry the operation and the path involved so the single
//! diagnostic line printed by the binary is enough to act on.

use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or packaging a project.
#[derive(Error, Debug)]
pub enum Error {
    /// Build tool executable is not on PATH
    #[error("'{tool}' not found in PATH. {hint}")]
    ToolNotFound {
        /// Executable name that was looked up
        tool: String,
        /// Remediation hint shown to the user
        hint: &'static str,
    },

    /// External command ran and exited unsuccessfully
    #[error("command failed with {}: {command}", describe_exit(.code))]
    CommandFailed {
        /// Full command line as shown to the user
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
    },

    /// External command could not be started at all
    #[error("failed to launch {command}: {error}")]
    CommandLaunch {
        /// Full command line as shown to the user
        command: String,
        /// Underlying spawn error
        error: io::Error,
    },

    /// Directory or file to archive does not exist
    #[error("path does not exist: {}", .0.display())]
    MissingSource(PathBuf),

    /// Archive source would escape the project base
    #[error("{} is outside the project directory {}", .path.display(), .base.display())]
    OutsideBase {
        /// Offending path
        path: PathBuf,
        /// Base directory archive paths are relative to
        base: PathBuf,
    },

    /// Filesystem operation failed on a known path
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path the operation touched
        path: PathBuf,
        /// Underlying error
        error: io::Error,
    },

    /// ZIP writer error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Directory traversal error
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error without path context
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Catch-all for conditions without a dedicated variant
    #[error("{0}")]
    GenericError(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "termination by signal".to_string(),
    }
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wrap the error with a description of the operation and the path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Return early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)).into())
    };
}
