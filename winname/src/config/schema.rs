//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from several
//! sources can be merged; the accessor methods supply the built-in defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::label::ConflictPolicy;

/// Shells whose windows are named after their working directory.
pub const DEFAULT_SHELLS: &[&str] = &["zsh", "bash", "sh"];

/// Programs that are named after their working directory, prefixed with the
/// program name.
pub const DEFAULT_DIR_PROGRAMS: &[&str] = &["nvim", "vim", "vi", "git"];

/// Default maximum window name length, in characters.
pub const DEFAULT_MAX_NAME_LEN: usize = 20;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use winname::config::{Config, IconStyle};
///
/// let config = Config {
///     max_name_len: Some(30),
///     icon_style: Some(IconStyle::Icon),
///     ..Default::default()
/// };
/// assert_eq!(config.max_name_len(), 30);
/// assert_eq!(config.shells(), ["zsh", "bash", "sh"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Commands treated as an idle shell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shells: Option<Vec<String>>,

    /// Programs whose windows keep a directory label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir_programs: Option<Vec<String>>,

    /// Maximum window name length in characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_name_len: Option<usize>,

    /// How program names are shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_style: Option<IconStyle>,

    /// Program icons overriding the built-in table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icons: Option<BTreeMap<String, String>>,

    /// Policy for multi-way label collisions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_policy: Option<ConflictPolicy>,
}

impl Config {
    /// Configured shells, or [`DEFAULT_SHELLS`].
    #[must_use]
    pub fn shells(&self) -> Vec<String> {
        self.shells
            .clone()
            .unwrap_or_else(|| to_owned_list(DEFAULT_SHELLS))
    }

    /// Configured directory programs, or [`DEFAULT_DIR_PROGRAMS`].
    #[must_use]
    pub fn dir_programs(&self) -> Vec<String> {
        self.dir_programs
            .clone()
            .unwrap_or_else(|| to_owned_list(DEFAULT_DIR_PROGRAMS))
    }

    /// Configured maximum name length, or [`DEFAULT_MAX_NAME_LEN`].
    #[must_use]
    pub fn max_name_len(&self) -> usize {
        self.max_name_len.unwrap_or(DEFAULT_MAX_NAME_LEN)
    }

    /// Configured icon style, or [`IconStyle::Name`].
    #[must_use]
    pub fn icon_style(&self) -> IconStyle {
        self.icon_style.unwrap_or_default()
    }

    /// Configured conflict policy, or the engine default.
    #[must_use]
    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.conflict_policy.unwrap_or_default()
    }

    /// A copy with every default filled in, for display.
    #[must_use]
    pub fn resolved(&self) -> Self {
        Self {
            shells: Some(self.shells()),
            dir_programs: Some(self.dir_programs()),
            max_name_len: Some(self.max_name_len()),
            icon_style: Some(self.icon_style()),
            custom_icons: Some(self.custom_icons.clone().unwrap_or_default()),
            conflict_policy: Some(self.conflict_policy()),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// How a program is rendered in a window name.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    /// The program name only.
    #[default]
    Name,
    /// The program icon only (falls back to the name when no icon is known).
    Icon,
    /// Icon, a space, then the name.
    NameAndIcon,
}

impl std::fmt::Display for IconStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Icon => write!(f, "icon"),
            Self::NameAndIcon => write!(f, "name_and_icon"),
        }
    }
}

impl std::str::FromStr for IconStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "icon" => Ok(Self::Icon),
            "name_and_icon" | "name-and-icon" => Ok(Self::NameAndIcon),
            _ => Err(format!("invalid icon style: {s}")),
        }
    }
}
