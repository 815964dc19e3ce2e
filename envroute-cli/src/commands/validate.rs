//! Command to validate an envroute configuration file.

use crate::error::CliError;
use crate::utils::{self, GlobalOptions};
use clap::Args;
use envroute::config::{validate, ConfigLoader, ValidateOptions};
use std::path::PathBuf;

/// Validate an envroute configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "ENVROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip branch uniqueness check
    #[arg(long)]
    pub no_check_branches: bool,

    /// Check environment variable availability
    #[arg(long)]
    pub check_env_vars: bool,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = &global.logger;
        let cwd = utils::current_dir()?;

        logger.info("Loading configuration...");
        let raw = ConfigLoader::load(self.config.as_deref(), &cwd)?;

        logger.info("Running validation checks...");
        let options = ValidateOptions::new()
            .with_check_branches(!self.no_check_branches)
            .with_check_env_vars(self.check_env_vars)
            .with_variables(utils::process_variables());
        let config = validate(&raw, &options)?;

        global.println(format!(
            "{} environment(s) configured",
            config.environments.len()
        ));
        for (name, env) in &config.environments {
            global.println(format!("  {name}: {} → {}", env.branch, env.api_url));
        }
        global.println("");
        global.println("All checks passed!");

        Ok(())
    }
}
