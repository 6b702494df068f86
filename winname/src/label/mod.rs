//! The path labelling engine.
//!
//! Given a list of `(context, path, group)` entries, assign each one the
//! shortest trailing part of its path that keeps it apart from every other
//! path in the same group.
//!
//! # Algorithm
//!
//! Every candidate starts out labelled with its leaf segment. A single sweep
//! then visits the candidates in input order:
//!
//! 1. Other candidates in the same group are classified as *duplicates*
//!    (identical full path) or *conflicts* (different path, same current
//!    label). Candidates in other groups are ignored.
//! 2. Each conflict is resolved with
//!    [`uncommon_suffixes`](crate::path::uncommon_suffixes), updating both
//!    labels.
//! 3. The resulting label is copied onto every duplicate.
//!
//! When one candidate collides with several others whose paths diverge at
//! different depths, [`ConflictPolicy`] decides which suffix it keeps.
//!
//! # Examples
//!
//! ```
//! use winname::label::{disambiguate, PathEntry};
//!
//! let labels = disambiguate(vec![
//!     PathEntry::parse("%1", "a/dir", "shell").unwrap(),
//!     PathEntry::parse("%2", "a/dir", "shell").unwrap(),
//!     PathEntry::parse("%3", "b/dir", "shell").unwrap(),
//! ])
//! .unwrap();
//!
//! let rendered: Vec<_> = labels.iter().map(|l| l.display_string()).collect();
//! assert_eq!(rendered, ["a/dir", "a/dir", "b/dir"]);
//! ```

mod candidate;
mod detector;
mod entry;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use candidate::{Candidate, CandidateSet};
pub use detector::{disambiguate, ConflictPolicy, Disambiguator, Relationship};
pub use entry::{Label, PathEntry};
