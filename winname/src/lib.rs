#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # winname
//!
//! A library for naming terminal windows after the directories they show.
//!
//! The core is a path labelling engine: given a set of paths, it picks for
//! each the shortest trailing run of path segments that tells it apart from
//! every other path in the same group, while paths that are genuinely
//! identical share one label. On top of that, the [`window`] module turns a
//! set of multiplexer windows into short names.
//!
//! ## Core Types
//!
//! - [`SegmentPath`]: A path split into segments
//! - [`PathEntry`] and [`Label`]: Engine input and output
//! - [`Disambiguator`] and [`ConflictPolicy`]: The labelling engine
//! - [`WindowNamer`], [`Window`] and [`WindowName`]: Window naming
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use winname::{disambiguate, PathEntry};
//!
//! let entries = vec![
//!     PathEntry::parse("w1", "/home/me/api/src", None::<()>).unwrap(),
//!     PathEntry::parse("w2", "/home/me/web/src", None).unwrap(),
//!     PathEntry::parse("w3", "/tmp", None).unwrap(),
//! ];
//!
//! let labels: Vec<String> = disambiguate(entries)
//!     .unwrap()
//!     .iter()
//!     .map(|label| label.display.to_string())
//!     .collect();
//!
//! assert_eq!(labels, ["api/src", "web/src", "tmp"]);
//! ```

pub mod config;
pub mod error;
pub mod label;
pub mod logging;
pub mod output;
pub mod path;
pub mod window;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use label::{disambiguate, ConflictPolicy, Disambiguator, Label, PathEntry};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use path::SegmentPath;
pub use window::{Window, WindowName, WindowNamer};
