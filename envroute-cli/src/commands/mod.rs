//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create a starter configuration file
//! - `generate`: Generate the routing file for the current branch
//! - `validate`: Validate the configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod generate;
pub mod init;
pub mod validate;

pub use completions::CompletionsCommand;
pub use generate::GenerateCommand;
pub use init::InitCommand;
pub use validate::ValidateCommand;
