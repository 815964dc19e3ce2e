//! Property-based tests for artifact generation.

use super::{generate, GenerateOptions, DEFAULT_API_SOURCE};
use crate::config::{Environment, Header, HeaderRule, Rewrite, RouterConfig};
use crate::resolver::resolve_environment;
use proptest::prelude::*;

fn rewrite_strategy() -> impl Strategy<Value = Rewrite> {
    ("/[a-z]{1,10}", "/[a-z]{1,10}").prop_map(|(source, destination)| Rewrite {
        source,
        destination,
    })
}

fn header_rule_strategy() -> impl Strategy<Value = HeaderRule> {
    ("/[a-z]{1,10}", "X-[A-Z][a-z]{1,8}", "[a-z0-9]{1,8}").prop_map(|(source, key, value)| {
        HeaderRule {
            source,
            headers: vec![Header { key, value }],
        }
    })
}

fn environment_strategy() -> impl Strategy<Value = Environment> {
    (
        "[a-z]{1,12}",
        "[a-z]{1,12}",
        prop::collection::vec(rewrite_strategy(), 0..4),
        prop::collection::vec(header_rule_strategy(), 0..4),
    )
        .prop_map(|(branch, host, custom_rewrites, custom_headers)| Environment {
            branch,
            api_url: format!("https://{host}.example.com"),
            custom_rewrites,
            custom_headers,
        })
}

// Configs whose branches are distinct from each other and from every
// environment name, so resolution by branch is unambiguous.
fn config_strategy() -> impl Strategy<Value = RouterConfig> {
    (
        prop::collection::vec(environment_strategy(), 1..6),
        prop::collection::vec(rewrite_strategy(), 0..4),
        prop::collection::vec(header_rule_strategy(), 0..4),
    )
        .prop_map(|(envs, rewrites, headers)| {
            let mut config = RouterConfig {
                rewrites,
                headers,
                ..Default::default()
            };
            for (i, mut env) in envs.into_iter().enumerate() {
                env.branch = format!("{}-{i}", env.branch);
                config.environments.insert(format!("env{i}"), env);
            }
            config
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // The first rewrite always proxies /api to the resolved environment
    #[test]
    fn default_rewrite_first(config in config_strategy()) {
        for env in config.environments.values() {
            let artifact = generate(&config, &GenerateOptions::new().with_branch(env.branch.clone())).unwrap();
            prop_assert_eq!(artifact.rewrites[0].source.as_str(), DEFAULT_API_SOURCE);
            prop_assert_eq!(&artifact.rewrites[0].destination, &format!("{}/api/$1", env.api_url));
        }
    }

    // rewrites == [default, ...env.customRewrites, ...config.rewrites]
    #[test]
    fn rewrite_and_header_order(config in config_strategy()) {
        for env in config.environments.values() {
            let artifact = generate(&config, &GenerateOptions::new().with_branch(env.branch.clone())).unwrap();

            let expected_rewrites: Vec<Rewrite> = artifact.rewrites[..1]
                .iter()
                .chain(&env.custom_rewrites)
                .chain(&config.rewrites)
                .cloned()
                .collect();
            prop_assert_eq!(&artifact.rewrites, &expected_rewrites);

            let expected_headers: Vec<HeaderRule> = env
                .custom_headers
                .iter()
                .chain(&config.headers)
                .cloned()
                .collect();
            prop_assert_eq!(&artifact.headers, &expected_headers);
        }
    }

    // Every declared environment resolves by branch and by name
    #[test]
    fn resolution_round_trips(config in config_strategy()) {
        for (name, env) in &config.environments {
            prop_assert_eq!(resolve_environment(&config, &env.branch), Some(env));
            prop_assert_eq!(resolve_environment(&config, name), Some(env));
        }
    }

    // Generation is deterministic
    #[test]
    fn generation_deterministic(config in config_strategy()) {
        let branch = config.environments[0].branch.clone();
        let options = GenerateOptions::new().with_branch(branch);
        prop_assert_eq!(generate(&config, &options).unwrap(), generate(&config, &options).unwrap());
    }
}
