//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use winname::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { max_name_len: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref shells) = config.shells {
            Self::validate_names("shells", shells)?;
        }

        if let Some(ref programs) = config.dir_programs {
            Self::validate_names("dir_programs", programs)?;
        }

        if config.max_name_len == Some(0) {
            return Err(Error::Validation {
                field: "max_name_len".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if let Some(ref icons) = config.custom_icons {
            if let Some(key) = icons.keys().find(|k| k.trim().is_empty()) {
                return Err(Error::Validation {
                    field: "custom_icons".into(),
                    message: format!("Program name {key:?} cannot be empty"),
                });
            }
        }

        Ok(())
    }

    /// Program names are matched against the first word of a command line,
    /// so they must be non-empty single words.
    fn validate_names(field: &str, names: &[String]) -> Result<()> {
        for name in names {
            if name.is_empty() {
                return Err(Error::Validation {
                    field: field.into(),
                    message: "Entries cannot be empty".into(),
                });
            }
            if name.chars().any(char::is_whitespace) {
                return Err(Error::Validation {
                    field: field.into(),
                    message: format!("Entry {name:?} cannot contain whitespace"),
                });
            }
        }
        Ok(())
    }
}
