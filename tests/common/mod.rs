//! Shared helpers for CLI tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

/// Project with package.json and a built dist/ tree
pub fn built_project(name: &str, version: &str) -> TempDir {
    let dir = bare_project(name, version);
    fs::create_dir_all(dir.path().join("dist/assets")).unwrap();
    fs::write(dir.path().join("dist/index.html"), "<!doctype html><html></html>").unwrap();
    fs::write(dir.path().join("dist/assets/app.js"), "console.log('hi')").unwrap();
    dir
}

/// Project with package.json only
pub fn bare_project(name: &str, version: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let package = serde_json::json!({ "name": name, "version": version, "private": true });
    fs::write(
        dir.path().join("package.json"),
        serde_json::to_string_pretty(&package).unwrap(),
    )
    .unwrap();
    dir
}

/// The packager binary with color disabled
pub fn tapp_pack() -> Command {
    let mut cmd = Command::cargo_bin("tapp_pack").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Sorted entry names of an archive
pub fn entries(archive: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

/// Raw bytes of one archive entry
pub fn entry_bytes(archive: &Path, name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).unwrap();
    bytes
}

/// Parsed tapp.json from an archive
pub fn archived_manifest(archive: &Path) -> serde_json::Value {
    serde_json::from_slice(&entry_bytes(archive, "tapp.json")).unwrap()
}

/// Every .tapp file directly inside `dir`
pub fn tapp_files(dir: &Path) -> Vec<String> {
    let mut found: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tapp"))
        .collect();
    found.sort();
    found
}
