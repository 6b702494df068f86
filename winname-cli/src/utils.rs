//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: configuration
//! loading and reading JSON input.

use crate::error::CliError;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use winname::{Config, ConfigBuilder};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. The user configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Read all of `input`, or standard input when no file is given.
pub fn read_input(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(CliError::from),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Read and parse a JSON document from `input` (or standard input).
pub fn read_json<T: DeserializeOwned>(input: Option<&Path>) -> Result<T, CliError> {
    let contents = read_input(input)?;
    serde_json::from_str(&contents)
        .map_err(|e| CliError::InvalidArguments(format!("malformed JSON input: {e}")))
}
