//! Fatal paths: each exits non-zero with one tagged diagnostic.

mod common;

use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn missing_project_path_fails() {
    let dir = tempfile::TempDir::new().unwrap();

    tapp_pack()
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("[tapp_pack] ERROR:"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn project_must_be_a_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("package.json");
    fs::write(&file, "{}").unwrap();

    tapp_pack()
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must be a directory"));
}

#[test]
fn missing_package_json_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("dist")).unwrap();

    tapp_pack()
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn malformed_package_json_fails() {
    let project = built_project("Foo", "1.2.3");
    fs::write(project.path().join("package.json"), "{ \"name\": ").unwrap();

    tapp_pack()
        .arg(project.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not read/parse"));
}

#[test]
fn missing_dist_fails_without_writing() {
    let project = bare_project("Foo", "1.2.3");

    tapp_pack()
        .arg(project.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--build"));

    assert!(tapp_files(project.path()).is_empty());
    assert!(!project.path().join(".tapp_tmp").exists());
}

#[test]
fn malformed_manifest_fails() {
    let project = built_project("Foo", "1.2.3");
    fs::write(project.path().join("tapp.json"), "{ broken").unwrap();

    tapp_pack()
        .arg(project.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot be parsed"));

    assert!(tapp_files(project.path()).is_empty());
}

#[test]
fn missing_include_fails_and_cleans_staging() {
    let project = built_project("Foo", "1.2.3");

    tapp_pack()
        .arg(project.path())
        .args(["--include", "missing.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing.txt"));

    assert!(tapp_files(project.path()).is_empty());
    assert!(!project.path().join(".tapp_tmp").exists());
}

#[test]
fn include_outside_project_fails() {
    let project = built_project("Foo", "1.2.3");
    let outside = tempfile::TempDir::new().unwrap();
    fs::write(outside.path().join("secret.txt"), "x").unwrap();

    tapp_pack()
        .arg(project.path())
        .arg("--include")
        .arg(outside.path().join("secret.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the project directory"));
}

#[test]
fn conflicting_output_flags_fail() {
    let project = built_project("Foo", "1.2.3");

    tapp_pack()
        .arg(project.path())
        .args(["--verbose", "--quiet"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn negative_window_size_is_a_tagged_error() {
    let project = built_project("Foo", "1.2.3");

    tapp_pack()
        .arg(project.path())
        .args(["--width", "-5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("[tapp_pack] ERROR:"))
        .stderr(predicate::str::contains("--width must be a positive pixel count"));

    assert!(tapp_files(project.path()).is_empty());
}
