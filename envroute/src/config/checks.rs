//! Cross-field consistency checks.
//!
//! These checks run on an already schema-valid [`RouterConfig`]. Each check is
//! its own stage: findings are aggregated within a stage but never merged
//! across stages.

use crate::config::schema::RouterConfig;
use crate::config::validator::ConfigValidator;
use crate::error::{DuplicateBranch, Error, MissingVariable, Result};
use crate::variables::VariableSnapshot;
use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Options controlling which validation stages run.
///
/// The default runs schema validation and the branch uniqueness check, and
/// skips the variable check.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Reject configurations where two environments share a branch.
    pub check_branches: bool,
    /// Reject `apiUrl` values referencing variables absent from `variables`.
    pub check_env_vars: bool,
    /// Variable snapshot consulted by the variable check.
    pub variables: VariableSnapshot,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            check_branches: true,
            check_env_vars: false,
            variables: VariableSnapshot::default(),
        }
    }
}

impl ValidateOptions {
    /// Creates options with the default stage selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the branch uniqueness check.
    #[must_use]
    pub fn with_check_branches(mut self, check: bool) -> Self {
        self.check_branches = check;
        self
    }

    /// Enables or disables the variable check.
    #[must_use]
    pub fn with_check_env_vars(mut self, check: bool) -> Self {
        self.check_env_vars = check;
        self
    }

    /// Sets the variable snapshot.
    #[must_use]
    pub fn with_variables(mut self, variables: VariableSnapshot) -> Self {
        self.variables = variables;
        self
    }
}

/// Runs schema validation followed by the requested cross-field checks.
///
/// The first failing stage's error is returned.
///
/// # Errors
///
/// Returns [`Error::SchemaValidation`], [`Error::BranchUniqueness`] or
/// [`Error::MissingVariables`], whichever stage fails first.
///
/// # Examples
///
/// ```
/// use envroute::config::{validate, ValidateOptions};
/// use serde_json::json;
///
/// let raw = json!({
///     "environments": {
///         "a": { "branch": "main", "apiUrl": "https://a.example.com" },
///         "b": { "branch": "main", "apiUrl": "https://b.example.com" }
///     }
/// });
/// assert!(validate(&raw, &ValidateOptions::default()).is_err());
/// assert!(validate(&raw, &ValidateOptions::new().with_check_branches(false)).is_ok());
/// ```
pub fn validate(raw: &Value, options: &ValidateOptions) -> Result<RouterConfig> {
    let config = ConfigValidator::validate_schema(raw)?;

    if options.check_branches {
        validate_unique_branches(&config)?;
    }

    if options.check_env_vars {
        validate_environment_variables(&config, &options.variables)?;
    }

    Ok(config)
}

/// Checks that no two environments declare the same branch.
///
/// # Errors
///
/// Returns [`Error::BranchUniqueness`] listing every duplicated branch together
/// with all environment names sharing it.
pub fn validate_unique_branches(config: &RouterConfig) -> Result<()> {
    let mut owners: IndexMap<&str, Vec<String>> = IndexMap::new();
    for (name, env) in &config.environments {
        owners
            .entry(env.branch.as_str())
            .or_default()
            .push(name.clone());
    }

    let duplicates: Vec<DuplicateBranch> = owners
        .into_iter()
        .filter(|(_, envs)| envs.len() > 1)
        .map(|(branch, environments)| DuplicateBranch {
            branch: branch.to_string(),
            environments,
        })
        .collect();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(Error::BranchUniqueness { duplicates })
    }
}

/// Checks that every variable referenced from an `apiUrl` is set.
///
/// Both `${NAME}` and bare `$NAME` (upper-case identifiers) are recognised.
/// A variable that is present but empty counts as missing.
///
/// # Errors
///
/// Returns [`Error::MissingVariables`] listing every unresolved reference.
pub fn validate_environment_variables(
    config: &RouterConfig,
    variables: &VariableSnapshot,
) -> Result<()> {
    let mut missing = Vec::new();

    for (name, env) in &config.environments {
        for variable in referenced_variables(&env.api_url) {
            if !variables.is_set(variable) {
                missing.push(MissingVariable {
                    variable: variable.to_string(),
                    path: format!("environments.{name}.apiUrl"),
                });
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingVariables { missing })
    }
}

/// Variable names referenced by `value`, in order of occurrence.
///
/// # Examples
///
/// ```
/// use envroute::config::checks::referenced_variables;
///
/// let names = referenced_variables("https://${HOST}/$VERSION/api");
/// assert_eq!(names, vec!["HOST", "VERSION"]);
/// ```
#[must_use]
pub fn referenced_variables(value: &str) -> Vec<&str> {
    variable_reference_re()
        .captures_iter(value)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str())
        .collect()
}

fn variable_reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$\{([^}]+)\}|\$([A-Z_][A-Z0-9_]*)")
            .expect("variable reference regex must compile")
    })
}
