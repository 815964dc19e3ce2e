//! Caller-supplied variable snapshots.
//!
//! Branch inference and the variable check consult a [`VariableSnapshot`]
//! passed in explicitly. The library never reads the process environment on
//! its own; binaries build a snapshot at their edge (for example from
//! `std::env::vars()`) and thread it through.

use std::collections::BTreeMap;

/// Variable holding the branch being deployed.
pub const BRANCH_VARIABLE: &str = "VERCEL_GIT_COMMIT_REF";

/// Variable holding the platform's deployment environment name.
pub const PLATFORM_ENV_VARIABLE: &str = "VERCEL_ENV";

/// Branch identifier used when neither an override nor [`BRANCH_VARIABLE`] is set.
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Platform environment reported when [`PLATFORM_ENV_VARIABLE`] is not set.
pub const DEFAULT_PLATFORM_ENV: &str = "development";

/// An immutable view of named runtime variables.
///
/// A variable counts as set only when it is present with a non-empty value.
///
/// # Examples
///
/// ```
/// use envroute::VariableSnapshot;
///
/// let vars = VariableSnapshot::new()
///     .with("VERCEL_GIT_COMMIT_REF", "staging")
///     .with("EMPTY", "");
///
/// assert_eq!(vars.get("VERCEL_GIT_COMMIT_REF"), Some("staging"));
/// assert!(!vars.is_set("EMPTY"));
/// assert!(!vars.is_set("MISSING"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSnapshot {
    values: BTreeMap<String, String>,
}

impl VariableSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this snapshot with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns the value of `name` if it is set and non-empty.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Whether `name` is present with a non-empty value.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of variables in the snapshot, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VariableSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let vars = VariableSnapshot::new();
        assert!(vars.is_empty());
        assert_eq!(vars.get(BRANCH_VARIABLE), None);
    }

    #[test]
    fn test_from_iterator() {
        let vars: VariableSnapshot = vec![("A", "1"), ("B", "")].into_iter().collect();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("A"), Some("1"));
        assert_eq!(vars.get("B"), None);
    }

    #[test]
    fn test_with_overwrites() {
        let vars = VariableSnapshot::new().with("A", "1").with("A", "2");
        assert_eq!(vars.get("A"), Some("2"));
        assert_eq!(vars.len(), 1);
    }
}
