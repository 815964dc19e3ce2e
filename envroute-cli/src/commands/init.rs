//! Init command implementation.
//!
//! This module implements the `init` command, which writes a starter
//! configuration file into the working directory.

use crate::error::CliError;
use crate::utils::{self, GlobalOptions};
use clap::Parser;
use envroute::ConfigLoader;
use std::fs;

/// File name written by `init`.
const CONFIG_FILE: &str = "envroute.config.yaml";

const CONFIG_TEMPLATE: &str = r"# envroute configuration
#
# Each environment maps a git branch to the backend that deployments of
# that branch proxy /api/* requests to.
environments:
  production:
    branch: main
    apiUrl: https://api.production.example.com
  staging:
    branch: staging
    apiUrl: https://api.staging.example.com
  development:
    branch: dev
    apiUrl: https://api.dev.example.com

# Global rewrites, applied after the environment's own rewrites
rewrites: []

# Global headers, applied after the environment's own headers
headers: []
";

/// Create a new configuration file.
#[derive(Parser)]
#[command(about = "Create a new configuration file")]
pub struct InitCommand {
    /// Overwrite existing config file
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cwd = utils::current_dir()?;

        if let Some(existing) = ConfigLoader::find_config_file(&cwd) {
            if !self.force {
                global
                    .logger
                    .warn(&format!("Config file already exists: {}", existing.display()));
                global.logger.warn("Use --force to overwrite");
                return Ok(());
            }
        }

        let config_path = cwd.join(CONFIG_FILE);
        fs::write(&config_path, CONFIG_TEMPLATE)?;
        global
            .logger
            .debug(&format!("Wrote template to {}", config_path.display()));

        global.println(format!("Created config file: {CONFIG_FILE}"));
        global.println("");
        global.println("Next steps:");
        global.println(format!("  1. Update environment URLs in {CONFIG_FILE}"));
        global.println("  2. Run: envroute validate");
        global.println("  3. Run: envroute generate");

        Ok(())
    }
}
