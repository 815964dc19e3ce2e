//! Property-based tests for configuration validation.

use super::checks::validate_unique_branches;
use super::validator::ConfigValidator;
use crate::error::Error;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// Strategy for a batch of environment names that are pairwise distinct
fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,10}", 1..8).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // N environments each with one defect yield exactly N violations
    #[test]
    fn one_violation_per_defect(names in names_strategy(), bad_url in any::<bool>()) {
        let mut envs = Map::new();
        for name in &names {
            let env = if bad_url {
                json!({ "branch": name, "apiUrl": "not a url" })
            } else {
                json!({ "branch": "", "apiUrl": "https://api.example.com" })
            };
            envs.insert(name.clone(), env);
        }
        let raw = json!({ "environments": Value::Object(envs) });

        match ConfigValidator::validate_schema(&raw) {
            Err(Error::SchemaValidation { violations }) => {
                prop_assert_eq!(violations.len(), names.len());
            }
            other => prop_assert!(false, "expected schema error, got {:?}", other),
        }
    }

    // Environments with distinct branches always pass the uniqueness check
    #[test]
    fn distinct_branches_are_unique(names in names_strategy()) {
        let mut envs = Map::new();
        for name in &names {
            envs.insert(
                name.clone(),
                json!({ "branch": format!("b-{name}"), "apiUrl": "https://api.example.com" }),
            );
        }
        let config = ConfigValidator::validate_schema(&json!({ "environments": Value::Object(envs) })).unwrap();
        prop_assert!(validate_unique_branches(&config).is_ok());
    }

    // Sharing one branch across all environments names all of them
    #[test]
    fn shared_branch_names_every_owner(names in names_strategy()) {
        prop_assume!(names.len() > 1);
        let mut envs = Map::new();
        for name in &names {
            envs.insert(name.clone(), json!({ "branch": "main", "apiUrl": "https://api.example.com" }));
        }
        let config = ConfigValidator::validate_schema(&json!({ "environments": Value::Object(envs) })).unwrap();

        match validate_unique_branches(&config) {
            Err(Error::BranchUniqueness { duplicates }) => {
                prop_assert_eq!(duplicates.len(), 1);
                prop_assert_eq!(&duplicates[0].environments, &names);
            }
            other => prop_assert!(false, "expected uniqueness error, got {:?}", other),
        }
    }
}
