//! Configuration system for winname.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`WINNAME_*`)
//! 3. Explicit config file (`--config`)
//! 4. User config (`~/.winname/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use winname::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_config_file(Path::new("winname.yaml"))
//!     .build()
//!     .unwrap();
//! println!("names are cut at {} characters", config.max_name_len());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, IconStyle, DEFAULT_DIR_PROGRAMS, DEFAULT_MAX_NAME_LEN, DEFAULT_SHELLS};
pub use validator::ConfigValidator;
