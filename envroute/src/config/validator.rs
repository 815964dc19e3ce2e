//! Schema validation.
//!
//! Turns an untyped configuration value into a [`RouterConfig`], checking
//! structure, types and field constraints. Every violation found is collected
//! so the caller sees the complete list from a single pass.

use crate::config::schema::{Environment, Header, HeaderRule, Redirect, Rewrite, RouterConfig};
use crate::error::{Error, Result, Violation};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use url::Url;

/// Validates raw configuration values against the router schema.
///
/// # Examples
///
/// ```
/// use envroute::config::ConfigValidator;
/// use serde_json::json;
///
/// let raw = json!({
///     "environments": {
///         "production": { "branch": "main", "apiUrl": "https://api.example.com" }
///     }
/// });
/// let config = ConfigValidator::validate_schema(&raw).unwrap();
/// assert_eq!(config.environments["production"].branch, "main");
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a raw configuration value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaValidation`] carrying every violation found.
    pub fn validate_schema(raw: &Value) -> Result<RouterConfig> {
        let mut violations = Vec::new();
        let config = Self::parse_root(raw, &mut violations);

        match config {
            Some(config) if violations.is_empty() => Ok(config),
            _ => Err(Error::SchemaValidation { violations }),
        }
    }

    fn parse_root(raw: &Value, violations: &mut Vec<Violation>) -> Option<RouterConfig> {
        let Some(root) = expect_object(raw, "", violations) else {
            return None;
        };

        let environments = Self::parse_environments(root, violations);
        let rewrites = optional_array(root, "rewrites", "", violations)
            .map(|items| parse_each(items, "rewrites", violations, parse_rewrite))
            .unwrap_or_default();
        let headers = optional_array(root, "headers", "", violations)
            .map(|items| parse_each(items, "headers", violations, parse_header_rule))
            .unwrap_or_default();
        let redirects = optional_array(root, "redirects", "", violations)
            .map(|items| parse_each(items, "redirects", violations, parse_redirect))
            .unwrap_or_default();

        Some(RouterConfig {
            environments: environments?,
            rewrites,
            headers,
            redirects,
        })
    }

    fn parse_environments(
        root: &Map<String, Value>,
        violations: &mut Vec<Violation>,
    ) -> Option<IndexMap<String, Environment>> {
        let Some(value) = root.get("environments") else {
            violations.push(Violation::new("environments", "Required"));
            return None;
        };
        let entries = expect_object(value, "environments", violations)?;

        if entries.is_empty() {
            violations.push(Violation::new(
                "environments",
                "At least one environment must be defined",
            ));
            return None;
        }

        let mut environments = IndexMap::with_capacity(entries.len());
        for (name, value) in entries {
            let path = join("environments", name);
            if let Some(env) = parse_environment(value, &path, violations) {
                environments.insert(name.clone(), env);
            }
        }
        Some(environments)
    }
}

fn parse_environment(
    value: &Value,
    path: &str,
    violations: &mut Vec<Violation>,
) -> Option<Environment> {
    let obj = expect_object(value, path, violations)?;

    let branch = required_string(obj, "branch", path, violations);
    if branch.as_deref() == Some("") {
        violations.push(Violation::new(
            join(path, "branch"),
            "Branch name is required",
        ));
    }

    let api_url = required_string(obj, "apiUrl", path, violations);
    if let Some(ref url) = api_url {
        if Url::parse(url).is_err() {
            violations.push(Violation::new(
                join(path, "apiUrl"),
                "API URL must be a valid URL",
            ));
        }
    }

    let rewrites_path = join(path, "customRewrites");
    let custom_rewrites = optional_array(obj, "customRewrites", path, violations)
        .map(|items| parse_each(items, &rewrites_path, violations, parse_rewrite))
        .unwrap_or_default();

    let headers_path = join(path, "customHeaders");
    let custom_headers = optional_array(obj, "customHeaders", path, violations)
        .map(|items| parse_each(items, &headers_path, violations, parse_header_rule))
        .unwrap_or_default();

    Some(Environment {
        branch: branch?,
        api_url: api_url?,
        custom_rewrites,
        custom_headers,
    })
}

fn parse_rewrite(value: &Value, path: &str, violations: &mut Vec<Violation>) -> Option<Rewrite> {
    let obj = expect_object(value, path, violations)?;
    let source = required_string(obj, "source", path, violations);
    let destination = required_string(obj, "destination", path, violations);
    Some(Rewrite {
        source: source?,
        destination: destination?,
    })
}

fn parse_header_rule(
    value: &Value,
    path: &str,
    violations: &mut Vec<Violation>,
) -> Option<HeaderRule> {
    let obj = expect_object(value, path, violations)?;
    let source = required_string(obj, "source", path, violations);

    let headers_path = join(path, "headers");
    let headers = match obj.get("headers") {
        None => {
            violations.push(Violation::new(&headers_path, "Required"));
            None
        }
        Some(Value::Array(items)) if items.is_empty() => {
            violations.push(Violation::new(
                &headers_path,
                "At least one header must be defined",
            ));
            None
        }
        Some(Value::Array(items)) => Some(parse_each(items, &headers_path, violations, parse_header)),
        Some(other) => {
            violations.push(type_mismatch(&headers_path, "array", other));
            None
        }
    };

    Some(HeaderRule {
        source: source?,
        headers: headers?,
    })
}

fn parse_header(value: &Value, path: &str, violations: &mut Vec<Violation>) -> Option<Header> {
    let obj = expect_object(value, path, violations)?;
    let key = required_string(obj, "key", path, violations);
    let value = required_string(obj, "value", path, violations);
    Some(Header {
        key: key?,
        value: value?,
    })
}

fn parse_redirect(value: &Value, path: &str, violations: &mut Vec<Violation>) -> Option<Redirect> {
    let obj = expect_object(value, path, violations)?;
    let source = required_string(obj, "source", path, violations);
    let destination = required_string(obj, "destination", path, violations);

    let permanent = match obj.get("permanent") {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            violations.push(type_mismatch(&join(path, "permanent"), "boolean", other));
            None
        }
    };

    let status_code = match obj.get("statusCode") {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) if n.is_f64() => {
            violations.push(Violation::new(
                join(path, "statusCode"),
                "Expected integer, received float",
            ));
            None
        }
        Some(Value::Number(n)) => {
            // Integers that do not fit in i64 arrive as u64
            if n.as_i64().is_none() {
                violations.push(Violation::new(
                    join(path, "statusCode"),
                    format!("Number must be less than or equal to {}", i64::MAX),
                ));
            }
            n.as_i64()
        }
        Some(other) => {
            violations.push(type_mismatch(&join(path, "statusCode"), "number", other));
            None
        }
    };

    Some(Redirect {
        source: source?,
        destination: destination?,
        permanent,
        status_code,
    })
}

/// Parses every element of an array, keeping only elements that produced a
/// value. Element paths are `<path>.<index>`.
fn parse_each<T>(
    items: &[Value],
    path: &str,
    violations: &mut Vec<Violation>,
    parse: fn(&Value, &str, &mut Vec<Violation>) -> Option<T>,
) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| parse(item, &join(path, i), violations))
        .collect()
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
    violations: &mut Vec<Violation>,
) -> Option<&'a Map<String, Value>> {
    if let Value::Object(map) = value {
        Some(map)
    } else {
        violations.push(type_mismatch(path, "object", value));
        None
    }
}

fn required_string(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(type_mismatch(&join(parent, key), "string", other));
            None
        }
        None => {
            violations.push(Violation::new(join(parent, key), "Required"));
            None
        }
    }
}

/// Returns the array stored under `key`, `None` when absent or null.
fn optional_array<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    parent: &str,
    violations: &mut Vec<Violation>,
) -> Option<&'a [Value]> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(items),
        Some(other) => {
            violations.push(type_mismatch(&join(parent, key), "array", other));
            None
        }
    }
}

fn type_mismatch(path: &str, expected: &str, received: &Value) -> Violation {
    Violation::new(
        path,
        format!("Expected {expected}, received {}", type_name(received)),
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(parent: &str, segment: impl std::fmt::Display) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}.{segment}")
    }
}
