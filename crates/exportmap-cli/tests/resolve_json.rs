//! Integration tests for `exportmap resolve`.
//!
//! These tests create package directories and verify the printed map.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn cargo_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO"));
    cmd.args(["run", "-q", "-p", "exportmap-cli", "--bin", "exportmap", "--"]);
    cmd.env_remove("EXPORTMAP_CONDITIONS");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    cargo_bin()
        .arg("--cwd")
        .arg(dir)
        .args(args)
        .output()
        .expect("Failed to run exportmap")
}

/// Create a package whose exports use conditions, wildcards and an exclusion.
fn create_package() -> TempDir {
    let dir = tempfile::tempdir().unwrap();

    let pkg_json = serde_json::json!({
        "name": "test-pkg",
        "version": "1.0.0",
        "exports": {
            ".": {
                "import": "./esm/index.js",
                "require": "./cjs/index.js",
                "default": "./index.js"
            },
            "./features/*": "./dist/features/*.js",
            "./features/internal/*": null
        }
    });
    std::fs::write(
        dir.path().join("package.json"),
        serde_json::to_string_pretty(&pkg_json).unwrap(),
    )
    .unwrap();

    let features = dir.path().join("dist/features");
    std::fs::create_dir_all(features.join("internal")).unwrap();
    std::fs::write(features.join("someFeature.js"), "").unwrap();
    std::fs::write(features.join("anotherFeature.js"), "").unwrap();
    std::fs::write(features.join("internal/hidden.js"), "").unwrap();

    dir
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_resolve_json() {
    let dir = create_package();
    let output = run_in(dir.path(), &["--json", "resolve"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    assert_eq!(
        stdout_json(&output),
        serde_json::json!({
            ".": "./esm/index.js",
            "./features/anotherFeature": "./dist/features/anotherFeature.js",
            "./features/someFeature": "./dist/features/someFeature.js"
        })
    );
}

#[test]
fn test_resolve_custom_conditions() {
    let dir = create_package();
    let output = run_in(
        dir.path(),
        &["--json", "resolve", "--conditions", "require,default", "--no-expand"],
    );
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["."], "./cjs/index.js");
    assert_eq!(json["./features/*"], "./dist/features/*.js");
}

#[test]
fn test_resolve_conditions_from_env() {
    let dir = create_package();
    let output = cargo_bin()
        .arg("--cwd")
        .arg(dir.path())
        .args(["--json", "resolve", "--no-expand"])
        .env("EXPORTMAP_CONDITIONS", "default")
        .output()
        .expect("Failed to run exportmap");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["."], "./index.js");
}

#[test]
fn test_resolve_human_output() {
    let dir = create_package();
    let output = run_in(dir.path(), &["resolve"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            ". -> ./esm/index.js",
            "./features/anotherFeature -> ./dist/features/anotherFeature.js",
            "./features/someFeature -> ./dist/features/someFeature.js",
        ]
    );
}

#[test]
fn test_resolve_out_file() {
    let dir = create_package();
    let output = run_in(dir.path(), &["resolve", "--out", "exports.json"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(dir.path().join("exports.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["."], "./esm/index.js");
}

#[test]
fn test_resolve_json_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("package.json"),
        r#"{ "exports": { ".": "./index.js", "import": "./esm.js" } }"#,
    )
    .unwrap();

    let output = run_in(dir.path(), &["--json", "resolve"]);
    assert!(!output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "MIXED_KEY_FORMAT");
}

#[test]
fn test_resolve_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("package.json"),
        r#"{ "exports": { "./utils/*": "./dist/utils/*.js" } }"#,
    )
    .unwrap();

    let output = run_in(dir.path(), &["resolve"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("directory not found"), "stderr: {stderr}");
}
