//! Routing artifact generation.
//!
//! Given a validated configuration and a branch, the generator resolves the
//! target environment and assembles the platform routing file. Rule order is
//! fixed because the platform applies the first matching rule:
//!
//! - rewrites: default API rewrite, environment rewrites, global rewrites
//! - headers: environment headers, global headers
//! - redirects: global redirects
//!
//! # Examples
//!
//! ```
//! use envroute::config::{Environment, RouterConfig};
//! use envroute::{generate, GenerateOptions};
//!
//! let mut config = RouterConfig::default();
//! config.environments.insert(
//!     "staging".to_string(),
//!     Environment::new("staging", "https://api.stage.example.com"),
//! );
//!
//! let artifact = generate(&config, &GenerateOptions::new().with_branch("staging")).unwrap();
//! assert_eq!(artifact.rewrites[0].destination, "https://api.stage.example.com/api/$1");
//! assert!(artifact.headers.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{HeaderRule, Redirect, Rewrite, RouterConfig};
use crate::error::{Error, Result};
use crate::resolver::{effective_branch, resolve_environment};
use crate::variables::VariableSnapshot;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

/// Source pattern of the synthesized API rewrite.
pub const DEFAULT_API_SOURCE: &str = "/api/(.*)";

/// Inputs for a generation run besides the configuration itself.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Explicit branch override.
    pub branch: Option<String>,
    /// Variable snapshot used for branch inference.
    pub variables: VariableSnapshot,
}

impl GenerateOptions {
    /// Creates options with no override and an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the branch override.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Sets the variable snapshot.
    #[must_use]
    pub fn with_variables(mut self, variables: VariableSnapshot) -> Self {
        self.variables = variables;
        self
    }
}

/// The generated routing file for one resolved environment.
///
/// Empty sequences are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Rewrites, always starting with the default API rewrite.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rewrites: Vec<Rewrite>,
    /// Header rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<HeaderRule>,
    /// Redirects.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redirects: Vec<Redirect>,
}

/// Builds the default rewrite proxying `/api/*` to `api_url`.
#[must_use]
pub fn default_rewrite(api_url: &str) -> Rewrite {
    Rewrite::new(DEFAULT_API_SOURCE, format!("{api_url}/api/$1"))
}

/// Generates the routing artifact for the effective branch.
///
/// # Errors
///
/// Returns [`Error::Generation`] when no environment resolves; the error lists
/// every configured branch value.
pub fn generate(config: &RouterConfig, options: &GenerateOptions) -> Result<GeneratedArtifact> {
    let branch = effective_branch(options.branch.as_deref(), &options.variables);

    let Some(environment) = resolve_environment(config, &branch) else {
        return Err(Error::Generation {
            branch,
            available: config.branches().into_iter().map(String::from).collect(),
        });
    };

    let rewrites = std::iter::once(default_rewrite(&environment.api_url))
        .chain(environment.custom_rewrites.iter().cloned())
        .chain(config.rewrites.iter().cloned())
        .collect();

    let headers = environment
        .custom_headers
        .iter()
        .chain(&config.headers)
        .cloned()
        .collect();

    Ok(GeneratedArtifact {
        rewrites,
        headers,
        redirects: config.redirects.clone(),
    })
}
