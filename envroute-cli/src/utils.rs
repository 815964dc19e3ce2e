//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path resolution and access to the process environment.

use crate::error::CliError;
use envroute::{LogLevel, Logger, VariableSnapshot};
use std::env;
use std::ffi::OsString;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Logger configured from the flags and `ENVROUTE_LOG_MODE`.
    pub logger: Logger,
}

impl GlobalOptions {
    /// Prints a line of regular output to stdout unless running quietly.
    pub fn println(&self, line: impl Display) {
        if self.logger.enabled(LogLevel::Normal) {
            println!("{line}");
        }
    }
}

/// Returns the working directory commands operate in.
pub fn current_dir() -> Result<PathBuf, CliError> {
    Ok(env::current_dir()?)
}

/// Resolves `path` against `cwd` unless it is already absolute.
pub fn resolve_against(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Snapshot of the process environment, taken once per command.
///
/// Variables whose name or value is not valid Unicode are skipped.
pub fn process_variables() -> VariableSnapshot {
    variables_from(env::vars_os())
}

fn variables_from(vars: impl IntoIterator<Item = (OsString, OsString)>) -> VariableSnapshot {
    vars.into_iter()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
