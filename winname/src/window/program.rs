//! Classification of the command running in a window.

/// What a window is showing, as far as naming is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WindowKind {
    /// Idle shell; named after its directory.
    Shell,

    /// A directory-oriented program (editor, git); named `program:directory`.
    /// Holds the command line with its first word replaced by the matched
    /// program name.
    DirProgram(String),

    /// Any other program; named after its command line.
    Program(String),
}

impl WindowKind {
    /// Whether the window's name includes a directory label.
    #[must_use]
    pub fn is_path_labelled(&self) -> bool {
        matches!(self, Self::Shell | Self::DirProgram(_))
    }

    /// Group key used when labelling directories: windows only compete for
    /// labels with windows running the same program.
    #[must_use]
    pub fn group_key(&self) -> Option<&str> {
        match self {
            Self::DirProgram(program) => Some(program),
            Self::Shell | Self::Program(_) => None,
        }
    }
}

/// Classifies command lines using configured shell and program lists.
///
/// # Examples
///
/// ```
/// use winname::window::{ProgramClassifier, WindowKind};
///
/// let classifier = ProgramClassifier::new(
///     vec!["zsh".into()],
///     vec!["nvim".into(), "git".into()],
/// );
///
/// assert_eq!(classifier.classify(None), WindowKind::Shell);
/// assert_eq!(classifier.classify(Some("-zsh")), WindowKind::Shell);
/// assert_eq!(
///     classifier.classify(Some("/usr/bin/nvim main.rs")),
///     WindowKind::DirProgram("nvim main.rs".into())
/// );
/// assert_eq!(
///     classifier.classify(Some("htop")),
///     WindowKind::Program("htop".into())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgramClassifier {
    shells: Vec<String>,
    dir_programs: Vec<String>,
}

impl ProgramClassifier {
    /// Create a classifier. `dir_programs` are tried in order.
    #[must_use]
    pub fn new(shells: Vec<String>, dir_programs: Vec<String>) -> Self {
        Self {
            shells,
            dir_programs,
        }
    }

    /// Classify the command line of a window's foreground process.
    ///
    /// `None` or a blank command is an idle shell. A first word whose
    /// basename (minus a login-shell `-`) is a configured shell is a shell.
    /// A first word containing a directory program's name is that program.
    ///
    /// The directory program match is a substring test on the whole first
    /// word, parent directories included: `/home/vivian/bin/htop` contains
    /// `vi` and is classified as `vi`.
    #[must_use]
    pub fn classify(&self, command: Option<&str>) -> WindowKind {
        let Some(command) = command else {
            return WindowKind::Shell;
        };
        let mut words = command.split_whitespace();
        let Some(first) = words.next() else {
            return WindowKind::Shell;
        };

        let base = first.rsplit('/').next().unwrap_or(first);
        let base = base.strip_prefix('-').unwrap_or(base);
        if self.shells.iter().any(|shell| shell == base) {
            return WindowKind::Shell;
        }

        if let Some(program) = self
            .dir_programs
            .iter()
            .find(|program| first.contains(program.as_str()))
        {
            let rest: Vec<&str> = words.collect();
            let line = if rest.is_empty() {
                program.clone()
            } else {
                format!("{program} {}", rest.join(" "))
            };
            return WindowKind::DirProgram(line);
        }

        WindowKind::Program(command.trim().to_string())
    }
}
