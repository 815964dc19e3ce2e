//! General CLI behavior: help, version, completions, global flags.

mod common;

use common::{TestEnv, BASIC_CONFIG};
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();
    env.command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    let env = TestEnv::new();
    env.command().arg("deploy").assert().failure();
}

#[test]
fn test_bash_completions() {
    let env = TestEnv::new();
    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("envroute"))
        .stderr(predicate::str::contains("# Generating bash completion script"));
}

#[test]
fn test_quiet_suppresses_stdout() {
    let env = TestEnv::new();
    env.write_config(BASIC_CONFIG);

    env.command()
        .args(["--quiet", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_progress() {
    let env = TestEnv::new();
    env.write_config(BASIC_CONFIG);

    env.command()
        .args(["validate", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO: Loading configuration..."));
}

#[test]
fn test_log_mode_variable() {
    let env = TestEnv::new();
    env.write_config(BASIC_CONFIG);

    env.command()
        .arg("validate")
        .env("ENVROUTE_LOG_MODE", "verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("Running validation checks..."));
}
