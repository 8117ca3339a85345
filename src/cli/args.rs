//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation of
//! combinations clap cannot express on its own.

use crate::manifest::{
    ManifestOverrides,
    model::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
};
use clap::Parser;
use std::path::PathBuf;

/// Packager for built web applications
#[derive(Parser, Debug)]
#[command(
    name = "tapp_pack",
    disable_version_flag = true,
    about = "Packages a built web app and its tapp.json into a .tapp archive",
    long_about = "Packages the dist/ output of a JavaScript project plus a tapp.json manifest into a .tapp archive (a ZIP container).

Optionally runs install + build first with pnpm, yarn or npm, picked from the project's lockfile.
An existing tapp.json is used as-is; otherwise one is generated from package.json and the flags below.

Usage:
  tapp_pack ./my-game --build
  tapp_pack . --out GraphWars.tapp --build --clean
  tapp_pack ./my-game --include LICENSE --include assets/extra

Exit code 0 = archive written to the reported path."
)]
pub struct Args {
    /// Project directory (folder containing package.json)
    #[arg(value_name = "PROJECT")]
    pub project: PathBuf,

    /// Output .tapp path (default: <name>.tapp inside the project)
    ///
    /// Any other extension is replaced with .tapp.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Run install + build before packaging
    #[arg(long)]
    pub build: bool,

    /// Delete dist/ before building (only with --build)
    #[arg(long)]
    pub clean: bool,

    /// Extra file or directory to include, relative to the project (repeatable)
    #[arg(long, value_name = "PATH")]
    pub include: Vec<PathBuf>,

    /// Ignore an existing tapp.json and generate a new one
    #[arg(long)]
    pub force_manifest: bool,

    /// Entry point (default: dist/index.html)
    #[arg(long, value_name = "PATH")]
    pub entry: Option<String>,

    /// App name (default: package.json name)
    #[arg(long)]
    pub name: Option<String>,

    /// App version (default: package.json version)
    #[arg(long)]
    pub version: Option<String>,

    /// Window title (default: app name)
    #[arg(long)]
    pub title: Option<String>,

    /// Window width in pixels
    #[arg(long, default_value_t = i64::from(DEFAULT_WIDTH), allow_negative_numbers = true)]
    pub width: i64,

    /// Window height in pixels
    #[arg(long, default_value_t = i64::from(DEFAULT_HEIGHT), allow_negative_numbers = true)]
    pub height: i64,

    /// Make the window non-resizable
    #[arg(long)]
    pub fixed: bool,

    /// Set openDevTools=true in the generated manifest
    #[arg(long)]
    pub devtools: bool,

    /// List every archived file
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("--verbose and --quiet cannot be used together".to_string());
        }

        self.overrides().map(|_| ())
    }

    /// Manifest overrides carried by these arguments.
    ///
    /// Fails when the window size is not a positive pixel count.
    pub fn overrides(&self) -> Result<ManifestOverrides, String> {
        Ok(ManifestOverrides {
            name: self.name.clone(),
            version: self.version.clone(),
            entry: self.entry.clone(),
            title: self.title.clone(),
            width: pixels("--width", self.width)?,
            height: pixels("--height", self.height)?,
            fixed: self.fixed,
            devtools: self.devtools,
        })
    }
}

fn pixels(flag: &str, value: i64) -> Result<u32, String> {
    u32::try_from(value)
        .ok()
        .filter(|pixels| *pixels > 0)
        .ok_or_else(|| format!("{flag} must be a positive pixel count, got {value}"))
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tapp_pack").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["./game"]);
        assert_eq!(args.project, PathBuf::from("./game"));
        assert_eq!((args.width, args.height), (1280, 720));
        assert!(!args.build && !args.clean && !args.fixed && !args.devtools);
        assert!(args.include.is_empty());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn version_is_a_manifest_override() {
        let args = parse(&[".", "--version", "2.0.0", "--name", "Game"]);
        let overrides = args.overrides().unwrap();
        assert_eq!(overrides.version.as_deref(), Some("2.0.0"));
        assert_eq!(overrides.name.as_deref(), Some("Game"));
    }

    #[test]
    fn include_repeats() {
        let args = parse(&[".", "--include", "LICENSE", "--include", "public"]);
        assert_eq!(args.include, [PathBuf::from("LICENSE"), PathBuf::from("public")]);
    }

    #[test]
    fn flags_map_to_overrides() {
        let overrides = parse(&[".", "--fixed", "--devtools", "--width", "800"])
            .overrides()
            .unwrap();
        assert!(overrides.fixed);
        assert!(overrides.devtools);
        assert_eq!(overrides.width, 800);
    }

    #[test]
    fn rejects_verbose_with_quiet() {
        assert!(parse(&[".", "-v", "-q"]).validate().is_err());
    }

    #[test]
    fn rejects_zero_size() {
        assert!(parse(&[".", "--height", "0"]).validate().is_err());
    }

    #[test]
    fn negative_size_reaches_validation() {
        let args = parse(&[".", "--width", "-5"]);
        assert_eq!(args.width, -5);
        let err = args.validate().unwrap_err();
        assert!(err.contains("--width"), "{err}");
        assert!(parse(&[".", "--height", "99999999999"]).validate().is_err());
    }
}
