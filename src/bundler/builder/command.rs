//! External command execution.
//!
//! Commands run to completion with inherited stdio so the build tool's own
//! output streams straight to the user. A non-zero exit is an error carrying
//! the exit code; there is no timeout.

use crate::bundler::error::{Error, Result};
use std::path::Path;

use super::tool_detection::locate_program;

/// Program plus arguments, displayable as the command line the user would type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run a command in `cwd` and wait for it.
///
/// The executable is resolved through `PATH` (including the Windows `.cmd`
/// wrapper fallback); if that fails the bare name is handed to the OS, which
/// then reports the launch failure.
pub async fn run_command(spec: &CommandSpec, cwd: &Path) -> Result<()> {
    let executable = locate_program(spec.program())
        .map(|path| path.into_os_string())
        .unwrap_or_else(|| spec.program().into());

    log::info!("Running `{}` in {}", spec, cwd.display());

    let status = tokio::process::Command::new(&executable)
        .args(spec.args())
        .current_dir(cwd)
        .status()
        .await
        .map_err(|error| Error::CommandLaunch {
            command: spec.to_string(),
            error,
        })?;

    if !status.success() {
        return Err(Error::CommandFailed {
            command: spec.to_string(),
            code: status.code(),
        });
    }

    log::debug!("`{}` finished successfully", spec);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_command_line() {
        let spec = CommandSpec::new("pnpm", &["install", "--frozen-lockfile"]);
        assert_eq!(spec.to_string(), "pnpm install --frozen-lockfile");
        assert_eq!(spec.program(), "pnpm");
        assert_eq!(spec.args(), ["install", "--frozen-lockfile"]);
    }

    #[tokio::test]
    async fn missing_program_is_launch_error() {
        let spec = CommandSpec::new("tapp-pack-definitely-missing-tool", &[]);
        let err = run_command(&spec, Path::new(".")).await.unwrap_err();
        assert!(matches!(err, Error::CommandLaunch { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_reports_code() {
        let spec = CommandSpec::new("sh", &["-c", "exit 3"]);
        let err = run_command(&spec, Path::new(".")).await.unwrap_err();
        match err {
            Error::CommandFailed { command, code } => {
                assert_eq!(command, "sh -c exit 3");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn zero_exit_succeeds() {
        let spec = CommandSpec::new("true", &[]);
        run_command(&spec, Path::new(".")).await.unwrap();
    }
}
