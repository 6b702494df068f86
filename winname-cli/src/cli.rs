//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, LabelCommand, NameCommand, ShowConfigCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for naming terminal windows after their directories.
#[derive(Parser)]
#[command(name = "winname")]
#[command(version, about = "Name terminal windows after their working directories", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read this configuration file in addition to the user config
    #[arg(long, value_name = "PATH", global = true, env = "WINNAME_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Shorten paths into distinguishable labels
    Label(LabelCommand),

    /// Plan names for terminal windows
    Name(NameCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Print the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
