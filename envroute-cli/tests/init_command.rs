//! Integration tests for the `init` command.
//!
//! These tests verify:
//! - Fresh initialization writes a template that validates
//! - Existing configs are left alone without --force
//! - --force overwrites

mod common;

use common::TestEnv;
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Basic Initialization Tests
// ============================================================================

#[test]
fn test_init_creates_config() {
    let env = TestEnv::new();

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created config file: envroute.config.yaml",
        ))
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("envroute generate"));

    let contents = fs::read_to_string(env.path().join("envroute.config.yaml")).unwrap();
    assert!(contents.contains("branch: main"));
    assert!(contents.contains("branch: staging"));
    assert!(contents.contains("branch: dev"));
}

#[test]
fn test_init_template_passes_validation() {
    let env = TestEnv::new();
    env.command().arg("init").assert().success();

    env.command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 environment(s) configured"))
        .stdout(predicate::str::contains("All checks passed!"));
}

// ============================================================================
// Existing Config Tests
// ============================================================================

#[test]
fn test_init_keeps_existing_config() {
    let env = TestEnv::new();
    env.write_config("# hand-written\n");

    env.command()
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file already exists"))
        .stderr(predicate::str::contains("--force"));

    let contents = fs::read_to_string(env.path().join("envroute.config.yaml")).unwrap();
    assert_eq!(contents, "# hand-written\n");
}

#[test]
fn test_init_detects_json_config() {
    let env = TestEnv::new();
    env.write_file("envroute.config.json", "{}");

    env.command()
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("envroute.config.json"));

    assert!(!env.path().join("envroute.config.yaml").exists());
}

#[test]
fn test_init_force_overwrites() {
    let env = TestEnv::new();
    env.write_config("# hand-written\n");

    env.command().args(["init", "--force"]).assert().success();

    let contents = fs::read_to_string(env.path().join("envroute.config.yaml")).unwrap();
    assert!(contents.contains("environments:"));
}
