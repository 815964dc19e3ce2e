//! Error types for the envroute library.
//!
//! Validation failures are aggregated: each validation variant carries every
//! problem found by its stage, not just the first one. Collaborator failures
//! (loading, parsing, writing) have their own variants.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an envroute error.
///
/// # Examples
///
/// ```
/// use envroute::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// A single validation problem, located by a dot-delimited path relative to
/// the configuration root (e.g. `environments.staging.apiUrl`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dot-delimited locator of the offending field.
    pub path: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A branch value claimed by more than one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateBranch {
    /// The shared branch value.
    pub branch: String,
    /// Every environment name declaring this branch, in declaration order.
    pub environments: Vec<String>,
}

impl DuplicateBranch {
    /// Converts this duplicate into a violation keyed to its first owner.
    #[must_use]
    pub fn to_violation(&self) -> Violation {
        let first = self.environments.first().map_or("", String::as_str);
        Violation::new(
            format!("environments.{first}.branch"),
            format!("Branch \"{}\" is used in multiple environments", self.branch),
        )
    }
}

/// A variable referenced from an `apiUrl` that the snapshot does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVariable {
    /// The referenced variable name.
    pub variable: String,
    /// Path of the `apiUrl` field containing the reference.
    pub path: String,
}

impl MissingVariable {
    /// Converts this missing reference into a violation.
    #[must_use]
    pub fn to_violation(&self) -> Violation {
        Violation::new(
            self.path.clone(),
            format!("Environment variable \"{}\" is not defined", self.variable),
        )
    }
}

/// The main error type for the envroute library.
#[derive(Debug, Error)]
pub enum Error {
    /// The raw configuration does not match the expected shape.
    #[error("Configuration validation failed:{}", bullet_list(violations))]
    SchemaValidation {
        /// Every violation found in one pass.
        violations: Vec<Violation>,
    },

    /// Two or more environments declare the same branch.
    #[error("Duplicate branches found across environments:{}", duplicate_list(duplicates))]
    BranchUniqueness {
        /// Each duplicated branch with all of its owners.
        duplicates: Vec<DuplicateBranch>,
    },

    /// An `apiUrl` references variables absent from the snapshot.
    #[error("Missing required environment variables:{}", missing_list(missing))]
    MissingVariables {
        /// Every unresolved reference.
        missing: Vec<MissingVariable>,
    },

    /// No environment resolved for the effective branch.
    #[error(
        "No environment configuration found for branch: \"{branch}\"\nAvailable branches: {}",
        available.join(", ")
    )]
    Generation {
        /// The branch identifier that was attempted.
        branch: String,
        /// Every configured branch value, in declaration order.
        available: Vec<String>,
    },

    /// No configuration file was found during discovery.
    #[error(
        "No config file found. Run \"envroute init\" to create one.\nLooked for: {}",
        searched.join(", ")
    )]
    ConfigNotFound {
        /// The candidate file names that were probed.
        searched: Vec<String>,
    },

    /// An invalid or unreadable filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("Failed to load config from {}: {message}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The parser's description of the failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn bullet_list(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("\n  - {v}"))
        .collect::<String>()
}

fn duplicate_list(duplicates: &[DuplicateBranch]) -> String {
    duplicates
        .iter()
        .map(|d| {
            format!(
                "\n  - Branch \"{}\" used in: {}",
                d.branch,
                d.environments.join(", ")
            )
        })
        .collect::<String>()
}

fn missing_list(missing: &[MissingVariable]) -> String {
    let violations: Vec<Violation> = missing.iter().map(MissingVariable::to_violation).collect();
    bullet_list(&violations)
}

impl Error {
    /// Returns the `(path, message)` list carried by a validation error.
    ///
    /// Non-validation errors return an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use envroute::{Error, Violation};
    ///
    /// let err = Error::SchemaValidation {
    ///     violations: vec![Violation::new("environments", "Required")],
    /// };
    /// assert_eq!(err.violations().len(), 1);
    /// ```
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        match self {
            Self::SchemaValidation { violations } => violations.clone(),
            Self::BranchUniqueness { duplicates } => {
                duplicates.iter().map(DuplicateBranch::to_violation).collect()
            }
            Self::MissingVariables { missing } => {
                missing.iter().map(MissingVariable::to_violation).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Check if error came from one of the validation stages.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::SchemaValidation { .. } | Self::BranchUniqueness { .. } | Self::MissingVariables { .. }
        )
    }
}
