//! Install + build step run before packaging.

use crate::bundler::{self, BuildTool, run_command, utils::fs};
use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::metadata::OUTPUT_DIR;
use std::path::Path;

/// Build the project with the package manager its lockfiles point to.
///
/// This function:
/// 1. Selects pnpm, yarn or npm from the project's lockfiles
/// 2. With `clean`, deletes `dist/` (best-effort)
/// 3. Checks the tool is on `PATH`
/// 4. Runs the install command, frozen when a lockfile allows it
/// 5. Runs the build command
///
/// Any command failure aborts the run.
pub async fn ensure_build(project: &Path, clean: bool, runtime_config: &RuntimeConfig) -> Result<()> {
    let tool = BuildTool::detect(project);

    if clean {
        let output_dir = project.join(OUTPUT_DIR);
        if output_dir.exists() {
            runtime_config.progress(&format!("Cleaning {OUTPUT_DIR}/ ..."))?;
            if let Err(e) = fs::remove_dir_all(&output_dir).await {
                log::warn!("Could not fully remove {}: {}", output_dir.display(), e);
            }
        }
    }

    let profile = tool.profile();
    if tool.locate().is_none() {
        return Err(bundler::Error::ToolNotFound {
            tool: profile.program.to_string(),
            hint: profile.remediation,
        }
        .into());
    }

    runtime_config.verbose_println(&format!("Building with {tool}"))?;

    for command in [tool.install_command(project), tool.build_command()] {
        runtime_config.progress(&format!("$ {command}"))?;
        run_command(&command, project).await?;
    }

    Ok(())
}
