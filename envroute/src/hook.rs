//! Build-time generation hook.
//!
//! [`BuildHook`] performs the load → generate → write sequence at the start of
//! a build, typically from a `build.rs` script:
//!
//! ```no_run
//! use envroute::{BuildHook, VariableSnapshot};
//! use std::path::Path;
//!
//! let variables: VariableSnapshot = std::env::vars_os()
//!     .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
//!     .collect();
//! BuildHook::new()
//!     .with_output_path("public/vercel.json")
//!     .with_verbose(true)
//!     .run(Path::new(env!("CARGO_MANIFEST_DIR")), &variables)
//!     .expect("routing generation failed");
//! ```
//!
//! Any error is returned to the caller so the build can abort.

use std::path::{Path, PathBuf};

use crate::config::{define_config, ConfigLoader};
use crate::generator::{generate, GenerateOptions};
use crate::logging::{LogLevel, Logger};
use crate::output::{self, DEFAULT_OUTPUT};
use crate::resolver::environment_info;
use crate::variables::VariableSnapshot;
use crate::Result;

const LOG_PREFIX: &str = "[envroute]";

/// Options for a build-time generation run.
#[derive(Debug, Clone)]
pub struct BuildHook {
    config_path: Option<PathBuf>,
    output_path: PathBuf,
    branch: Option<String>,
    verbose: bool,
}

impl Default for BuildHook {
    fn default() -> Self {
        Self {
            config_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            branch: None,
            verbose: false,
        }
    }
}

impl BuildHook {
    /// Creates a hook with default options: discovered config, `vercel.json`
    /// output, no branch override, quiet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an explicit config file (relative paths resolve against the root).
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Sets the output file (relative paths resolve against the root).
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Overrides the branch identifier.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Enables a verbose summary on stderr.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Runs the hook for the project at `root`.
    ///
    /// Returns the written path, or `None` when no config file was given and
    /// none was discovered.
    ///
    /// # Errors
    ///
    /// Returns any loading, validation, generation or write error.
    pub fn run(&self, root: &Path, variables: &VariableSnapshot) -> Result<Option<PathBuf>> {
        let level = if self.verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        };
        let logger = Logger::new(level).with_prefix(LOG_PREFIX);

        self.generate_into(root, variables, &logger)
            .inspect_err(|e| logger.error(&e.to_string()))
    }

    fn generate_into(
        &self,
        root: &Path,
        variables: &VariableSnapshot,
        logger: &Logger,
    ) -> Result<Option<PathBuf>> {
        let config_path = match &self.config_path {
            Some(path) => ConfigLoader::locate(Some(path.as_path()), root)?,
            None => {
                let Some(found) = ConfigLoader::find_config_file(root) else {
                    logger.info("No config file found, skipping");
                    return Ok(None);
                };
                found
            }
        };

        let raw = ConfigLoader::load_file(&config_path)?;
        let config = define_config(&raw)?;

        let mut options = GenerateOptions::new().with_variables(variables.clone());
        if let Some(branch) = &self.branch {
            options = options.with_branch(branch.clone());
        }

        let info = environment_info(&config, &options);
        logger.info(&format!(
            "Environment: branch={}, platformEnv={}, apiUrl={}",
            info.branch,
            info.platform_env,
            info.environment.map_or("-", |env| env.api_url.as_str())
        ));

        let artifact = generate(&config, &options)?;

        let output_path = root.join(&self.output_path);
        output::write_artifact(&output_path, &artifact)?;
        logger.info(&format!("Generated: {}", self.output_path.display()));

        Ok(Some(output_path))
    }
}
