//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, GenerateCommand, InitCommand, ValidateCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for generating branch-specific routing files.
#[derive(Parser)]
#[command(name = "envroute")]
#[command(
    version,
    about = "Generate branch-specific vercel.json configurations",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a new configuration file
    Init(InitCommand),

    /// Generate vercel.json from config
    Generate(GenerateCommand),

    /// Validate configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
