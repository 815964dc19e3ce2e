//! Build script for envroute-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to config file")
        .value_name("PATH")
        .env("ENVROUTE_CONFIG")
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("envroute")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate branch-specific vercel.json configurations")
        .long_about(
            "Command-line tool that maps git branches to backend environments and \
             generates the matching vercel.json routing file",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Create a new configuration file")
                .long_about("Write a starter envroute.config.yaml into the current directory")
                .arg(
                    Arg::new("force")
                        .short('f')
                        .long("force")
                        .help("Overwrite existing config file")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("generate")
                .about("Generate vercel.json from config")
                .long_about("Resolve the environment for the current branch and write the routing file")
                .arg(config_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output path for the routing file")
                        .value_name("PATH")
                        .default_value("vercel.json")
                        .env("ENVROUTE_OUTPUT"),
                )
                .arg(
                    Arg::new("branch")
                        .short('b')
                        .long("branch")
                        .help("Override branch name")
                        .value_name("NAME"),
                )
                .arg(
                    Arg::new("no-validate")
                        .long("no-validate")
                        .help("Skip branch uniqueness validation")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("validate")
                .about("Validate configuration file")
                .long_about("Check the configuration schema, branch uniqueness and variable references")
                .arg(config_arg())
                .arg(
                    Arg::new("no-check-branches")
                        .long("no-check-branches")
                        .help("Skip branch uniqueness check")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("check-env-vars")
                        .long("check-env-vars")
                        .help("Check environment variable availability")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("envroute.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
