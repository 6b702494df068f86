//! Output formatting for planned window names.
//!
//! Names can be printed for people, as JSON for scripts, or as tmux
//! commands that can be sourced directly.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::window::WindowName;
use crate::{Error, Result};

pub use formatters::{HumanFormatter, JsonFormatter, TmuxFormatter};

/// Trait for formatting window names into different output formats.
pub trait OutputFormatter {
    /// Format the given names into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, names: &[WindowName]) -> Result<String>;
}

/// Available output formats for window names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `id<TAB>name` lines.
    #[default]
    Human,
    /// A JSON array of `{"id", "name"}` objects.
    Json,
    /// tmux commands renaming each window.
    Tmux,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Tmux => Box::new(TmuxFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Tmux => write!(f, "tmux"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "tmux" => Ok(Self::Tmux),
            other => Err(Error::Validation {
                field: "format".to_string(),
                message: format!("unknown output format '{other}' (expected human, json or tmux)"),
            }),
        }
    }
}
