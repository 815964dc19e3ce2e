//! Generate command implementation.

use crate::error::CliError;
use crate::utils::{self, GlobalOptions};
use clap::Args;
use envroute::config::{ConfigLoader, ValidateOptions};
use envroute::output::{self, DEFAULT_OUTPUT};
use envroute::{environment_info, generate, validate, GenerateOptions};
use std::path::PathBuf;

/// Generate vercel.json from config.
#[derive(Args)]
pub struct GenerateCommand {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "ENVROUTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output path for the routing file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT, env = "ENVROUTE_OUTPUT")]
    pub output: PathBuf,

    /// Override branch name
    #[arg(short, long, value_name = "NAME")]
    pub branch: Option<String>,

    /// Skip branch uniqueness validation
    #[arg(long)]
    pub no_validate: bool,
}

impl GenerateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = &global.logger;
        let cwd = utils::current_dir()?;

        let output_path = utils::resolve_against(&cwd, &self.output);
        if output_path.is_dir() {
            return Err(CliError::InvalidArguments(format!(
                "Output path is a directory: {}",
                output_path.display()
            )));
        }

        // 1. Load
        logger.info("Loading configuration...");
        let raw = ConfigLoader::load(self.config.as_deref(), &cwd)?;

        // 2. Validate (schema always; branch uniqueness unless disabled)
        if !self.no_validate {
            logger.info("Validating configuration...");
        }
        let config = validate(
            &raw,
            &ValidateOptions::new().with_check_branches(!self.no_validate),
        )?;

        // 3. Report the resolved environment
        let mut options = GenerateOptions::new().with_variables(utils::process_variables());
        if let Some(branch) = self.branch {
            options = options.with_branch(branch);
        }

        let info = environment_info(&config, &options);
        global.println(format!("Branch: {}", info.branch));
        global.println(format!("Platform env: {}", info.platform_env));
        match info.environment {
            Some(env) => global.println(format!("API URL: {}", env.api_url)),
            None => logger.warn(&format!("No environment found for branch: {}", info.branch)),
        }

        // 4. Generate and write
        logger.info("Generating routing file...");
        let artifact = generate(&config, &options)?;
        output::write_artifact(&output_path, &artifact)?;

        let summary = output::summarize(&artifact);
        global.println("");
        global.println(format!("Generated: {}", output_path.display()));
        global.println(format!("Rewrites: {}", summary.rewrites));
        global.println(format!("Headers: {}", summary.headers));
        global.println(format!("Redirects: {}", summary.redirects));

        if let Some(rewrite) = summary.sample_rewrite {
            global.println("");
            global.println("Sample rewrite:");
            global.println(format!("  Source: {}", rewrite.source));
            global.println(format!("  Destination: {}", rewrite.destination));
        }

        Ok(())
    }
}
