//! Router configuration: schema, validation and loading.
//!
//! A configuration starts life as an untyped value (usually parsed from an
//! `envroute.config.yaml` file) and becomes a [`RouterConfig`] once it passes
//! schema validation. Cross-field checks run on the typed configuration.
//!
//! # Validation stages
//!
//! 1. Schema validation ([`ConfigValidator::validate_schema`]), always run
//! 2. Branch uniqueness ([`validate_unique_branches`]), on by default
//! 3. Variable references ([`validate_environment_variables`]), opt-in
//!
//! Each stage aggregates its own findings; the first failing stage ends the
//! pipeline.
//!
//! # Examples
//!
//! ```
//! use envroute::config::{define_config, validate, ValidateOptions};
//! use serde_json::json;
//!
//! let raw = json!({
//!     "environments": {
//!         "production": { "branch": "main", "apiUrl": "https://api.example.com" },
//!         "staging": { "branch": "staging", "apiUrl": "https://staging.example.com" }
//!     }
//! });
//!
//! let config = define_config(&raw).unwrap();
//! assert_eq!(config.environments.len(), 2);
//!
//! let checked = validate(&raw, &ValidateOptions::default()).unwrap();
//! assert_eq!(checked, config);
//! ```

pub mod checks;
pub mod loader;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use checks::{validate, validate_environment_variables, validate_unique_branches, ValidateOptions};
pub use loader::{ConfigLoader, CONFIG_FILES};
pub use schema::{Environment, Header, HeaderRule, Redirect, Rewrite, RouterConfig};
pub use validator::ConfigValidator;

use crate::error::Result;
use serde_json::Value;

/// Schema-validates `raw` for authoring-time type safety.
///
/// # Errors
///
/// Returns [`Error::SchemaValidation`](crate::Error::SchemaValidation) with
/// every violation found.
pub fn define_config(raw: &Value) -> Result<RouterConfig> {
    ConfigValidator::validate_schema(raw)
}

/// Alias of [`define_config`] named after the validation stage.
///
/// # Errors
///
/// Same as [`define_config`].
pub fn validate_schema(raw: &Value) -> Result<RouterConfig> {
    ConfigValidator::validate_schema(raw)
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
