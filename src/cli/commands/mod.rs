//! Command implementations for the packaging run.

mod build;
mod pack;

pub use build::ensure_build;
pub use pack::{output_path, pack};
