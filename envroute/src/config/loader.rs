//! Configuration file discovery and loading.
//!
//! The loader only locates and parses files into a raw value; turning that
//! value into a [`RouterConfig`](crate::config::RouterConfig) is the job of
//! the validators.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate configuration file names, probed in order.
pub const CONFIG_FILES: &[&str] = &[
    "envroute.config.yaml",
    "envroute.config.yml",
    "envroute.config.json",
];

/// Loads raw configuration values from disk.
///
/// # Examples
///
/// ```no_run
/// use envroute::config::ConfigLoader;
/// use std::path::Path;
///
/// let raw = ConfigLoader::load(None, Path::new(".")).unwrap();
/// println!("{raw}");
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Find the first candidate configuration file in `dir`.
    #[must_use]
    pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load the configuration for `cwd`.
    ///
    /// An explicit `config_path` is resolved against `cwd` and must exist.
    /// Without one, the candidate files are probed in order.
    ///
    /// # Errors
    ///
    /// Returns an error if no file is found, the file cannot be read, or its
    /// contents cannot be parsed.
    pub fn load(config_path: Option<&Path>, cwd: &Path) -> Result<Value> {
        let path = Self::locate(config_path, cwd)?;
        Self::load_file(&path)
    }

    /// Resolve which file [`load`](Self::load) would read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] for a missing explicit path and
    /// [`Error::ConfigNotFound`] when discovery finds nothing.
    pub fn locate(config_path: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
        if let Some(explicit) = config_path {
            let path = cwd.join(explicit);
            if !path.is_file() {
                return Err(Error::InvalidPath {
                    path,
                    reason: "Config file not found".into(),
                });
            }
            return Ok(path);
        }

        Self::find_config_file(cwd).ok_or_else(|| Error::ConfigNotFound {
            searched: CONFIG_FILES.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    /// Load and parse a single configuration file.
    ///
    /// Files ending in `.json` are parsed as JSON; everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or its
    /// top level is not a mapping.
    pub fn load_file(path: &Path) -> Result<Value> {
        log::debug!("Loading configuration from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let value: Value = if is_json {
            serde_json::from_str(&contents).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                message: format!("Invalid JSON: {e}"),
            })?
        } else {
            serde_yaml::from_str(&contents).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                message: format!("Invalid YAML: {e}"),
            })?
        };

        if !value.is_object() {
            return Err(Error::Parse {
                path: path.to_path_buf(),
                message: "Config file must contain a configuration mapping".into(),
            });
        }

        Ok(value)
    }
}
