//! Configuration schema definitions.
//!
//! These types describe a validated router configuration: the per-branch
//! environments and the global routing rules applied on top of them. Field
//! names serialize in camelCase to match the platform's routing file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Complete router configuration.
///
/// `environments` keeps declaration order; resolution scans it front to back.
///
/// # Examples
///
/// ```
/// use envroute::config::{Environment, RouterConfig};
///
/// let mut config = RouterConfig::default();
/// config.environments.insert(
///     "production".to_string(),
///     Environment::new("main", "https://api.example.com"),
/// );
/// assert_eq!(config.branches(), vec!["main"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    /// Environment configurations keyed by environment name.
    pub environments: IndexMap<String, Environment>,

    /// Global rewrites applied to all environments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rewrites: Vec<Rewrite>,

    /// Global headers applied to all environments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<HeaderRule>,

    /// Global redirects applied to all environments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redirects: Vec<Redirect>,
}

impl RouterConfig {
    /// Every environment's branch value, in declaration order.
    #[must_use]
    pub fn branches(&self) -> Vec<&str> {
        self.environments
            .values()
            .map(|env| env.branch.as_str())
            .collect()
    }
}

/// A named routing target bound to one branch.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Git branch name for this environment.
    pub branch: String,

    /// Base URL for the API backend.
    pub api_url: String,

    /// Rewrites specific to this environment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_rewrites: Vec<Rewrite>,

    /// Headers specific to this environment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_headers: Vec<HeaderRule>,
}

impl Environment {
    /// Creates an environment with no custom rules.
    #[must_use]
    pub fn new(branch: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            api_url: api_url.into(),
            custom_rewrites: Vec::new(),
            custom_headers: Vec::new(),
        }
    }
}

/// Internal proxy rule: requests matching `source` are served from `destination`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Rewrite {
    /// Opaque source pattern.
    pub source: String,
    /// Destination, possibly with capture references such as `$1`.
    pub destination: String,
}

impl Rewrite {
    /// Creates a rewrite.
    #[must_use]
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Response headers attached to requests matching `source`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HeaderRule {
    /// Opaque source pattern.
    pub source: String,
    /// Headers to attach, in order. Never empty once validated.
    pub headers: Vec<Header>,
}

/// A single response header.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Header {
    /// Header name.
    pub key: String,
    /// Header value.
    pub value: String,
}

impl Header {
    /// Creates a header pair.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// External redirect rule.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Redirect {
    /// Opaque source pattern.
    pub source: String,
    /// Redirect target.
    pub destination: String,
    /// Whether the redirect is permanent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent: Option<bool>,
    /// Explicit HTTP status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_serializes_camel_case() {
        let env = Environment::new("main", "https://api.example.com");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["apiUrl"], "https://api.example.com");
        assert!(json.get("customRewrites").is_none());
        assert!(json.get("customHeaders").is_none());
    }

    #[test]
    fn test_redirect_omits_absent_optionals() {
        let redirect = Redirect {
            source: "/old".to_string(),
            destination: "/new".to_string(),
            permanent: None,
            status_code: Some(307),
        };
        let json = serde_json::to_value(&redirect).unwrap();
        assert!(json.get("permanent").is_none());
        assert_eq!(json["statusCode"], 307);
    }

    #[test]
    fn test_router_config_keeps_environment_order() {
        let yaml = r"
environments:
  zeta:
    branch: z
    apiUrl: https://z.example.com
  alpha:
    branch: a
    apiUrl: https://a.example.com
";
        let config: RouterConfig = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<&String> = config.environments.keys().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(config.branches(), vec!["z", "a"]);
    }

    #[test]
    fn test_router_config_defaults_to_empty_rules() {
        let config = RouterConfig::default();
        assert!(config.environments.is_empty());
        assert!(config.rewrites.is_empty());
        assert!(config.headers.is_empty());
        assert!(config.redirects.is_empty());
    }
}
