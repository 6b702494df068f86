//! Program icons.

use std::collections::BTreeMap;

use crate::config::IconStyle;

/// Built-in icons (Nerd Font code points), keyed by program basename.
pub const DEFAULT_PROGRAM_ICONS: &[(&str, &str)] = &[
    ("nvim", "\u{e62b}"),
    ("vim", "\u{e62b}"),
    ("vi", "\u{e62b}"),
    ("git", "\u{e702}"),
    ("python", "\u{e606}"),
    ("python3", "\u{e606}"),
    ("node", "\u{e718}"),
    ("cargo", "\u{e7a8}"),
    ("rustc", "\u{e7a8}"),
    ("go", "\u{e626}"),
    ("docker", "\u{f308}"),
    ("ssh", "\u{f489}"),
    ("htop", "\u{f080}"),
    ("top", "\u{f080}"),
    ("man", "\u{f02d}"),
    ("lazygit", "\u{e702}"),
];

/// Icon lookup with user overrides layered over [`DEFAULT_PROGRAM_ICONS`].
///
/// # Examples
///
/// ```
/// use winname::config::IconStyle;
/// use winname::window::IconTable;
///
/// let mut custom = std::collections::BTreeMap::new();
/// custom.insert("python".to_string(), "🐍".to_string());
/// let icons = IconTable::new(custom);
///
/// assert_eq!(icons.icon_for("/usr/bin/python script.py"), Some("🐍"));
/// assert_eq!(icons.style("python", IconStyle::NameAndIcon), "🐍 python");
/// assert_eq!(icons.style("unknown", IconStyle::Icon), "unknown");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconTable {
    custom: BTreeMap<String, String>,
}

impl IconTable {
    /// Create a table with `custom` icons taking priority over built-ins.
    #[must_use]
    pub fn new(custom: BTreeMap<String, String>) -> Self {
        Self { custom }
    }

    /// The name a command line is looked up under: the basename of its first
    /// word, cut at the first `:`.
    #[must_use]
    pub fn program_key(command: &str) -> &str {
        let first = command.split_whitespace().next().unwrap_or("");
        let base = first.rsplit('/').next().unwrap_or(first);
        base.split(':').next().unwrap_or(base)
    }

    /// The icon for `command`, if one is known.
    #[must_use]
    pub fn icon_for(&self, command: &str) -> Option<&str> {
        let key = Self::program_key(command);
        self.custom.get(key).map(String::as_str).or_else(|| {
            DEFAULT_PROGRAM_ICONS
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, icon)| *icon)
        })
    }

    /// Render `program` in the given style.
    ///
    /// Without a known icon every style falls back to the plain name.
    #[must_use]
    pub fn style(&self, program: &str, style: IconStyle) -> String {
        match (style, self.icon_for(program)) {
            (IconStyle::Icon, Some(icon)) => icon.to_string(),
            (IconStyle::NameAndIcon, Some(icon)) => format!("{icon} {program}"),
            _ => program.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin(name: &str) -> &'static str {
        DEFAULT_PROGRAM_ICONS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, icon)| *icon)
            .unwrap()
    }

    #[test]
    fn test_builtin_icons() {
        let icons = IconTable::default();
        assert_eq!(icons.icon_for("nvim"), Some(builtin("nvim")));
        assert_eq!(icons.icon_for("python"), Some(builtin("python")));
        assert_eq!(icons.icon_for("nonexistent"), None);
    }

    #[test]
    fn test_custom_overrides_builtin() {
        let mut custom = BTreeMap::new();
        custom.insert("custom_app".to_string(), "A".to_string());
        custom.insert("nvim".to_string(), "N".to_string());
        let icons = IconTable::new(custom);

        assert_eq!(icons.icon_for("custom_app"), Some("A"));
        assert_eq!(icons.icon_for("nvim"), Some("N"));
        assert_eq!(icons.icon_for("python"), Some(builtin("python")));
    }

    #[test]
    fn test_lookup_strips_path_args_and_colon() {
        let icons = IconTable::default();
        assert_eq!(icons.icon_for("/usr/bin/python"), Some(builtin("python")));
        assert_eq!(icons.icon_for("/custom/path/nvim"), Some(builtin("nvim")));
        assert_eq!(icons.icon_for("python script.py --arg"), Some(builtin("python")));
        assert_eq!(icons.icon_for("nvim file.txt"), Some(builtin("nvim")));
        assert_eq!(icons.icon_for("python:3.9"), Some(builtin("python")));
        assert_eq!(icons.icon_for("nvim:q"), Some(builtin("nvim")));
    }

    #[test]
    fn test_program_key_empty() {
        assert_eq!(IconTable::program_key(""), "");
        assert_eq!(IconTable::program_key("   "), "");
    }

    #[test]
    fn test_styles() {
        let icons = IconTable::default();
        let python = builtin("python");
        assert_eq!(icons.style("python", IconStyle::Name), "python");
        assert_eq!(icons.style("python", IconStyle::Icon), python);
        assert_eq!(
            icons.style("python", IconStyle::NameAndIcon),
            format!("{python} python")
        );
    }
}
