//! Naming terminal windows after what they show.
//!
//! Windows running a plain program are named after the program. Idle shells
//! and directory-oriented programs (editors, git) are named after their
//! working directory, shortened by the labelling engine so that windows of
//! the same kind stay distinguishable. Shells and each distinct program
//! command form separate label groups.
//!
//! This module only computes names. Discovering windows and applying the
//! names is left to the caller.

mod icons;
mod namer;
mod program;

pub use icons::{IconTable, DEFAULT_PROGRAM_ICONS};
pub use namer::{Window, WindowName, WindowNamer};
pub use program::{ProgramClassifier, WindowKind};
