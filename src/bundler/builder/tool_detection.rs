//! Build tool selection and availability checking.
//!
//! A project is built by whichever JavaScript package manager owns its
//! lockfile. Detection is based purely on file existence; availability is
//! checked separately against `PATH` right before the build runs.

use super::command::CommandSpec;
use std::path::{Path, PathBuf};

/// Static description of one supported build tool.
#[derive(Debug)]
pub struct ToolProfile {
    /// Executable name looked up on `PATH`
    pub program: &'static str,
    /// Lockfile whose presence selects this tool and enables frozen installs
    pub lockfile: &'static str,
    /// Install arguments used when no usable lockfile exists
    pub install: &'static [&'static str],
    /// Reproducible install arguments, if the tool has a stable form of them
    pub frozen_install: Option<&'static [&'static str]>,
    /// Arguments that run the project's build script
    pub build: &'static [&'static str],
    /// Shown when the executable cannot be found
    pub remediation: &'static str,
}

const PNPM: ToolProfile = ToolProfile {
    program: "pnpm",
    lockfile: "pnpm-lock.yaml",
    install: &["install"],
    frozen_install: Some(&["install", "--frozen-lockfile"]),
    build: &["run", "build"],
    remediation: "Install it or use npm/yarn.",
};

// Yarn 1 and Yarn 2+ disagree on the frozen flag, so installs stay plain.
const YARN: ToolProfile = ToolProfile {
    program: "yarn",
    lockfile: "yarn.lock",
    install: &["install"],
    frozen_install: None,
    build: &["build"],
    remediation: "Install it or use npm/pnpm.",
};

const NPM: ToolProfile = ToolProfile {
    program: "npm",
    lockfile: "package-lock.json",
    install: &["install"],
    frozen_install: Some(&["ci"]),
    build: &["run", "build"],
    remediation: "Install Node.js.",
};

/// Package manager used to install dependencies and build the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTool {
    Pnpm,
    Yarn,
    Npm,
}

impl BuildTool {
    /// Lockfile-based detection order; the first match wins.
    const DETECTION_ORDER: [BuildTool; 2] = [BuildTool::Pnpm, BuildTool::Yarn];

    /// Select the build tool for a project from its lockfiles.
    ///
    /// `pnpm-lock.yaml` beats `yarn.lock`; with neither present npm is used.
    pub fn detect(project: &Path) -> Self {
        let tool = Self::DETECTION_ORDER
            .into_iter()
            .find(|tool| project.join(tool.profile().lockfile).is_file())
            .unwrap_or(BuildTool::Npm);
        log::debug!("Selected build tool {} for {}", tool, project.display());
        tool
    }

    /// Static command record for this tool.
    pub fn profile(self) -> &'static ToolProfile {
        match self {
            BuildTool::Pnpm => &PNPM,
            BuildTool::Yarn => &YARN,
            BuildTool::Npm => &NPM,
        }
    }

    /// Resolve the tool's executable on `PATH`.
    ///
    /// Falls back to the `.cmd` wrapper that Node package managers install
    /// on Windows when the bare name is not found.
    pub fn locate(self) -> Option<PathBuf> {
        locate_program(self.profile().program)
    }

    /// Install command for the project, frozen when the tool's lockfile exists.
    pub fn install_command(self, project: &Path) -> CommandSpec {
        let profile = self.profile();
        let args = match profile.frozen_install {
            Some(frozen) if project.join(profile.lockfile).is_file() => frozen,
            _ => profile.install,
        };
        CommandSpec::new(profile.program, args)
    }

    /// Build command for the project.
    pub fn build_command(self) -> CommandSpec {
        let profile = self.profile();
        CommandSpec::new(profile.program, profile.build)
    }
}

impl std::fmt::Display for BuildTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.profile().program)
    }
}

/// Look up an executable on `PATH`, trying the `.cmd` wrapper on Windows.
pub fn locate_program(program: &str) -> Option<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("Found {} at: {}", program, path.display());
            Some(path)
        }
        Err(e) if cfg!(windows) => {
            log::debug!("{} not found in PATH ({}), trying {}.cmd", program, e, program);
            which::which(format!("{program}.cmd")).ok()
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", program, e);
            None
        }
    }
}
