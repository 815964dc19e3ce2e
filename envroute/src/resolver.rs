//! Branch-to-environment resolution.
//!
//! Resolution first matches on each environment's `branch` field in
//! declaration order, then falls back to treating the identifier as an
//! environment name.
//!
//! Resolution does not require unique branches. When two environments share
//! a branch the first one declared wins; run
//! [`validate_unique_branches`](crate::config::validate_unique_branches)
//! beforehand to rule that out.

use crate::config::{Environment, RouterConfig};
use crate::generator::GenerateOptions;
use crate::variables::{
    VariableSnapshot, BRANCH_VARIABLE, DEFAULT_PLATFORM_ENV, PLATFORM_ENV_VARIABLE, UNKNOWN_BRANCH,
};

/// Computes the branch identifier used for resolution.
///
/// Precedence: a non-empty `explicit` value, then [`BRANCH_VARIABLE`] from the
/// snapshot, then [`UNKNOWN_BRANCH`].
///
/// # Examples
///
/// ```
/// use envroute::{effective_branch, VariableSnapshot};
///
/// let vars = VariableSnapshot::new().with("VERCEL_GIT_COMMIT_REF", "staging");
/// assert_eq!(effective_branch(Some("main"), &vars), "main");
/// assert_eq!(effective_branch(None, &vars), "staging");
/// assert_eq!(effective_branch(None, &VariableSnapshot::new()), "unknown");
/// ```
#[must_use]
pub fn effective_branch(explicit: Option<&str>, variables: &VariableSnapshot) -> String {
    explicit
        .filter(|branch| !branch.is_empty())
        .or_else(|| variables.get(BRANCH_VARIABLE))
        .unwrap_or(UNKNOWN_BRANCH)
        .to_string()
}

/// Finds the environment for `branch`.
///
/// Returns `None` when neither a branch value nor an environment name
/// matches; absence is not an error at this layer.
///
/// # Examples
///
/// ```
/// use envroute::config::{Environment, RouterConfig};
/// use envroute::resolve_environment;
///
/// let mut config = RouterConfig::default();
/// config.environments.insert("production".into(), Environment::new("main", "https://api.example.com"));
///
/// assert!(resolve_environment(&config, "main").is_some());
/// assert!(resolve_environment(&config, "production").is_some());
/// assert!(resolve_environment(&config, "ghost").is_none());
/// ```
#[must_use]
pub fn resolve_environment<'a>(config: &'a RouterConfig, branch: &str) -> Option<&'a Environment> {
    config
        .environments
        .values()
        .find(|env| env.branch == branch)
        .or_else(|| config.environments.get(branch))
}

/// Diagnostic summary of what a generation run would resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentInfo<'a> {
    /// The effective branch identifier.
    pub branch: String,
    /// The platform environment name, informational only.
    pub platform_env: String,
    /// The resolved environment, if any.
    pub environment: Option<&'a Environment>,
}

/// Summarises branch, platform environment and resolution for `options`.
#[must_use]
pub fn environment_info<'a>(
    config: &'a RouterConfig,
    options: &GenerateOptions,
) -> EnvironmentInfo<'a> {
    let branch = effective_branch(options.branch.as_deref(), &options.variables);
    let platform_env = options
        .variables
        .get(PLATFORM_ENV_VARIABLE)
        .unwrap_or(DEFAULT_PLATFORM_ENV)
        .to_string();
    let environment = resolve_environment(config, &branch);

    EnvironmentInfo {
        branch,
        platform_env,
        environment,
    }
}
