//! Command line interface for the tapp packager.
//!
//! This module provides argument parsing, the packaging command and
//! user-facing terminal output.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::{OutputManager, TAG};

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime_config = RuntimeConfig::from(&args);
    let packed = commands::pack(&args, &runtime_config).await?;

    runtime_config.success(&packed.path.display().to_string())?;
    runtime_config.indent(&format!(
        "{} entries, {} bytes",
        packed.entries.len(),
        packed.size
    ))?;
    runtime_config.indent(&format!("sha256 {}", packed.checksum))?;

    Ok(0)
}
