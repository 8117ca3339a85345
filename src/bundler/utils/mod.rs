//! Filesystem and path helpers shared by the bundler.

pub mod fs;
pub mod path;
