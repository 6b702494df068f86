//! Environment variable handling for configuration overrides.
//!
//! `WINNAME_*` variables override values loaded from configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use winname::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value (e.g. a
    /// non-numeric length or an unknown icon style).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // WINNAME_SHELLS (comma-separated)
        if let Ok(shells) = env::var("WINNAME_SHELLS") {
            config.shells = Some(Self::parse_list(&shells));
        }

        // WINNAME_DIR_PROGRAMS (comma-separated)
        if let Ok(programs) = env::var("WINNAME_DIR_PROGRAMS") {
            config.dir_programs = Some(Self::parse_list(&programs));
        }

        if let Ok(len) = env::var("WINNAME_MAX_NAME_LEN") {
            config.max_name_len = Some(len.trim().parse().map_err(|_| Error::Validation {
                field: "WINNAME_MAX_NAME_LEN".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(style) = env::var("WINNAME_ICON_STYLE") {
            config.icon_style = Some(style.trim().parse().map_err(|message| Error::Validation {
                field: "WINNAME_ICON_STYLE".into(),
                message,
            })?);
        }

        if let Ok(policy) = env::var("WINNAME_CONFLICT_POLICY") {
            config.conflict_policy =
                Some(policy.trim().parse().map_err(|message| Error::Validation {
                    field: "WINNAME_CONFLICT_POLICY".into(),
                    message,
                })?);
        }

        Ok(())
    }

    /// Split a comma-separated list, dropping blank items.
    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}
