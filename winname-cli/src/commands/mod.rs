//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `label`: Shorten paths into distinguishable labels
//! - `name`: Plan names for terminal windows
//! - `validate`: Validate a configuration file
//! - `show_config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod label;
pub mod name;
pub mod show_config;
pub mod validate;

pub use completions::CompletionsCommand;
pub use label::LabelCommand;
pub use name::NameCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;
