//! Project build support.
//!
//! Before packaging, a project may be rebuilt by its own package manager.
//! This module selects that tool from the project's lockfiles, describes its
//! install and build invocations, and runs them.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA-256 checksum of the finished archive
//! - [`command`] - [`CommandSpec`] and the command runner
//! - [`tool_detection`] - [`BuildTool`] selection and `PATH` lookup

mod checksum;
mod command;
mod tool_detection;

pub use checksum::calculate_sha256;
pub use command::{CommandSpec, run_command};
pub use tool_detection::{BuildTool, ToolProfile, locate_program};
