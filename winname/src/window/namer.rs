//! Planning window names.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{Config, IconStyle};
use crate::error::{Error, Result};
use crate::label::{ConflictPolicy, Disambiguator, PathEntry};
use crate::path::SegmentPath;
use crate::window::icons::IconTable;
use crate::window::program::{ProgramClassifier, WindowKind};

/// A window to be named, as reported by the terminal multiplexer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Window {
    /// Multiplexer window identifier, returned unchanged.
    pub id: String,
    /// Working directory of the window's active pane.
    pub path: PathBuf,
    /// Command line of the foreground process, if any besides the shell.
    #[serde(default)]
    pub command: Option<String>,
}

/// The planned name of one window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowName {
    /// Window identifier.
    pub id: String,
    /// The name to apply.
    pub name: String,
}

/// Computes names for a set of windows.
///
/// # Examples
///
/// ```
/// use winname::config::Config;
/// use winname::window::{Window, WindowNamer};
///
/// let namer = WindowNamer::new(&Config::default());
/// let names = namer
///     .plan(vec![
///         Window { id: "@1".into(), path: "/work/api/src".into(), command: None },
///         Window { id: "@2".into(), path: "/work/web/src".into(), command: None },
///         Window { id: "@3".into(), path: "/work/web/src".into(), command: Some("nvim".into()) },
///         Window { id: "@4".into(), path: "/tmp".into(), command: Some("htop".into()) },
///     ])
///     .unwrap();
///
/// let rendered: Vec<_> = names.iter().map(|n| n.name.as_str()).collect();
/// assert_eq!(rendered, ["api/src", "web/src", "nvim:src", "htop"]);
/// ```
#[derive(Debug, Clone)]
pub struct WindowNamer {
    classifier: ProgramClassifier,
    icons: IconTable,
    icon_style: IconStyle,
    max_name_len: usize,
    policy: ConflictPolicy,
}

impl WindowNamer {
    /// Create a namer from the effective configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            classifier: ProgramClassifier::new(config.shells(), config.dir_programs()),
            icons: IconTable::new(config.custom_icons.clone().unwrap_or_default()),
            icon_style: config.icon_style(),
            max_name_len: config.max_name_len(),
            policy: config.conflict_policy(),
        }
    }

    /// Classify a window's command line.
    #[must_use]
    pub fn classify(&self, command: Option<&str>) -> WindowKind {
        self.classifier.classify(command)
    }

    /// Compute a name for every window, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindow`] if a path-labelled window has an
    /// empty path.
    pub fn plan(&self, windows: Vec<Window>) -> Result<Vec<WindowName>> {
        let kinds: Vec<WindowKind> = windows
            .iter()
            .map(|window| self.classify(window.command.as_deref()))
            .collect();

        let mut names: Vec<Option<String>> = vec![None; windows.len()];
        let mut entries = Vec::new();

        for (index, (window, kind)) in windows.iter().zip(&kinds).enumerate() {
            match kind {
                WindowKind::Program(command) => {
                    names[index] = Some(self.icons.style(command, self.icon_style));
                }
                WindowKind::Shell | WindowKind::DirProgram(_) => {
                    let path = Self::segment_path(window)?;
                    entries.push(PathEntry::new(index, path, kind.group_key()));
                }
            }
        }

        log::debug!(
            "labelling {} of {} window(s) by directory",
            entries.len(),
            windows.len()
        );

        let labels = Disambiguator::new()
            .with_policy(self.policy)
            .disambiguate(entries)?;

        for label in labels {
            let name = match &kinds[label.context] {
                WindowKind::DirProgram(program) => format!(
                    "{}:{}",
                    self.icons.style(program, self.icon_style),
                    label.display
                ),
                _ => label.display.to_string(),
            };
            names[label.context] = Some(name);
        }

        Ok(windows
            .into_iter()
            .zip(names)
            .map(|(window, name)| WindowName {
                id: window.id,
                name: truncate(&name.unwrap_or_default(), self.max_name_len),
            })
            .collect())
    }

    fn segment_path(window: &Window) -> Result<SegmentPath> {
        SegmentPath::from_path(&window.path).map_err(|e| Error::InvalidWindow {
            id: window.id.clone(),
            reason: e.to_string(),
        })
    }
}

/// Keep at most `max` characters of `name`.
fn truncate(name: &str, max: usize) -> String {
    name.chars().take(max).collect()
}
