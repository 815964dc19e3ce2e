//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary project directory
//! - Command builder helpers that isolate the process environment
//! - Test data fixtures

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two environments on distinct branches.
pub const BASIC_CONFIG: &str = "\
environments:
  production:
    branch: main
    apiUrl: https://api.prod.example.com
  staging:
    branch: staging
    apiUrl: https://api.stage.example.com
";

/// Per-environment and global rules on top of [`BASIC_CONFIG`].
pub const RULES_CONFIG: &str = "\
environments:
  production:
    branch: main
    apiUrl: https://api.prod.example.com
    customRewrites:
      - source: /auth/(.*)
        destination: https://auth.prod.example.com/$1
  staging:
    branch: staging
    apiUrl: https://api.stage.example.com
rewrites:
  - source: /docs/(.*)
    destination: https://docs.example.com/$1
headers:
  - source: /(.*)
    headers:
      - key: X-Frame-Options
        value: DENY
redirects:
  - source: /old
    destination: /new
    statusCode: 308
";

/// Two environments claiming the same branch.
pub const DUPLICATE_CONFIG: &str = "\
environments:
  production:
    branch: main
    apiUrl: https://api.prod.example.com
  mirror:
    branch: main
    apiUrl: https://api.mirror.example.com
";

/// Environment variables that would leak host state into a test.
const ISOLATED_VARIABLES: &[&str] = &[
    "VERCEL_GIT_COMMIT_REF",
    "VERCEL_ENV",
    "ENVROUTE_LOG_MODE",
    "ENVROUTE_CONFIG",
    "ENVROUTE_OUTPUT",
];

/// Test environment with an isolated project directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the project directory.
    ///
    /// Platform and envroute variables are removed so that only what the test
    /// sets explicitly is visible to the binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("envroute").expect("Failed to find envroute binary");
        cmd.current_dir(&self.temp_path);
        for name in ISOLATED_VARIABLES {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the project directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the default-named config file.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file("envroute.config.yaml", contents)
    }

    /// Read and parse a generated JSON file.
    pub fn read_json(&self, name: &str) -> Value {
        let contents =
            std::fs::read_to_string(self.temp_path.join(name)).expect("Failed to read output");
        serde_json::from_str(&contents).expect("Output is not valid JSON")
    }
}
