#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # envroute
//!
//! A library for generating branch-specific deployment routing files.
//!
//! A router configuration maps environments (production, staging, ...) to
//! git branches and backend API URLs. For the branch being built, envroute
//! resolves the matching environment and produces the platform's routing
//! file: an `/api` proxy rewrite to that environment's backend followed by
//! any environment-specific and global rewrites, headers and redirects.
//!
//! ## Core Operations
//!
//! - [`define_config`] and [`validate`]: turn raw input into a [`RouterConfig`]
//! - [`resolve_environment`] and [`environment_info`]: branch resolution
//! - [`generate`]: build the [`GeneratedArtifact`]
//!
//! The core is pure: it performs no I/O and reads no process-wide state.
//! Runtime variables come in through an explicit [`VariableSnapshot`].
//!
//! ## Examples
//!
//! ```
//! use envroute::{define_config, generate, GenerateOptions};
//! use serde_json::json;
//!
//! let config = define_config(&json!({
//!     "environments": {
//!         "production": { "branch": "main", "apiUrl": "https://api.prod.example.com" },
//!         "staging": { "branch": "staging", "apiUrl": "https://api.stage.example.com" }
//!     }
//! }))
//! .unwrap();
//!
//! let artifact = generate(&config, &GenerateOptions::new().with_branch("staging")).unwrap();
//! assert_eq!(artifact.rewrites.len(), 1);
//! assert_eq!(artifact.rewrites[0].destination, "https://api.stage.example.com/api/$1");
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod hook;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod variables;

// Re-export key types at crate root for convenience
pub use config::{
    define_config, validate, validate_environment_variables, validate_schema,
    validate_unique_branches, ConfigLoader, Environment, RouterConfig, ValidateOptions,
};
pub use error::{DuplicateBranch, Error, MissingVariable, Result, Violation};
pub use generator::{generate, GenerateOptions, GeneratedArtifact};
pub use hook::BuildHook;
pub use logging::{init_logger, LogLevel, Logger};
pub use resolver::{effective_branch, environment_info, resolve_environment, EnvironmentInfo};
pub use variables::VariableSnapshot;
