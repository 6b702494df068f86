//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use winname::config::{Config, ConfigMerger};
///
/// let low = Config { max_name_len: Some(10), ..Default::default() };
/// let high = Config { max_name_len: Some(40), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_name_len, Some(40));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            log::debug!("merging configuration from {}", source.path.display());
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalars and lists: source replaces target if set
    /// - Custom icons: accumulated, source keys win
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.shells.is_some() {
            target.shells.clone_from(&source.shells);
        }

        if source.dir_programs.is_some() {
            target.dir_programs.clone_from(&source.dir_programs);
        }

        if source.max_name_len.is_some() {
            target.max_name_len = source.max_name_len;
        }

        if source.icon_style.is_some() {
            target.icon_style = source.icon_style;
        }

        if source.conflict_policy.is_some() {
            target.conflict_policy = source.conflict_policy;
        }

        if let Some(ref source_icons) = source.custom_icons {
            target
                .custom_icons
                .get_or_insert_with(Default::default)
                .extend(source_icons.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconStyle;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn icons(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_unset_fields_do_not_override() {
        let mut target = Config {
            max_name_len: Some(12),
            icon_style: Some(IconStyle::Icon),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.max_name_len, Some(12));
        assert_eq!(target.icon_style, Some(IconStyle::Icon));
    }

    #[test]
    fn test_lists_are_replaced() {
        let mut target = Config {
            shells: Some(vec!["zsh".into(), "bash".into()]),
            ..Default::default()
        };
        let source = Config {
            shells: Some(vec!["fish".into()]),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.shells(), ["fish"]);
    }

    #[test]
    fn test_custom_icons_accumulate() {
        let mut target = Config {
            custom_icons: icons(&[("python", "P"), ("nvim", "N")]),
            ..Default::default()
        };
        let source = Config {
            custom_icons: icons(&[("nvim", "V"), ("cargo", "C")]),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(
            target.custom_icons,
            icons(&[("cargo", "C"), ("nvim", "V"), ("python", "P")])
        );
    }

    #[test]
    fn test_merge_sources_in_order() {
        let sources = vec![
            ConfigSource {
                path: PathBuf::from("user.yaml"),
                precedence: 1,
                config: Config {
                    max_name_len: Some(10),
                    ..Default::default()
                },
            },
            ConfigSource {
                path: PathBuf::from("explicit.yaml"),
                precedence: 2,
                config: Config {
                    max_name_len: Some(25),
                    ..Default::default()
                },
            },
        ];
        assert_eq!(ConfigMerger::merge(sources).max_name_len, Some(25));
    }
}
