//! Conflict detection and label propagation.
//!
//! The detector makes a single sweep over the candidate set. For every index
//! it first classifies all other candidates (read-only), then rewrites the
//! labels of the colliding ones and copies the result onto exact duplicates.
//! Only the write phase touches display labels.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::label::candidate::CandidateSet;
use crate::label::entry::{Label, PathEntry};
use crate::path::{try_uncommon_suffixes, SegmentPath};

/// How a candidate relates to another candidate during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    /// Different groups, or same group with different labels.
    Independent,

    /// Same group and same full path. Must end with the same label.
    Duplicate,

    /// Same group, different full paths, same current label.
    Conflict,
}

impl Relationship {
    /// Classify candidate `other` relative to candidate `index`.
    ///
    /// Reads the current display labels, so the result depends on how far the
    /// sweep has progressed.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn between<C, G: PartialEq>(set: &CandidateSet<C, G>, index: usize, other: usize) -> Self {
        let (a, b) = (set.entry(index), set.entry(other));

        if a.group_key() != b.group_key() {
            return Self::Independent;
        }
        if a.full_path() == b.full_path() {
            return Self::Duplicate;
        }
        if set.display(index) != set.display(other) {
            return Self::Independent;
        }
        Self::Conflict
    }
}

/// Which partner decides the final label of a candidate that collides with
/// several others at once.
///
/// Only matters for three-or-more-way collisions whose paths diverge at
/// different depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Resolve against each partner in turn; the last one wins.
    #[default]
    LastPartner,

    /// Keep the deepest suffix required by any partner.
    DeepestPartner,
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastPartner => write!(f, "last_partner"),
            Self::DeepestPartner => write!(f, "deepest_partner"),
        }
    }
}

impl std::str::FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "last_partner" | "last" => Ok(Self::LastPartner),
            "deepest_partner" | "deepest" => Ok(Self::DeepestPartner),
            _ => Err(format!("invalid conflict policy: {s}")),
        }
    }
}

/// Result of the read-only scan for one candidate.
#[derive(Debug, Default)]
struct ConflictScan {
    duplicates: Vec<usize>,
    conflicts: Vec<usize>,
}

impl ConflictScan {
    fn collect<C, G: PartialEq>(set: &CandidateSet<C, G>, index: usize) -> Self {
        let mut scan = Self::default();
        for other in (0..set.len()).filter(|&other| other != index) {
            match Relationship::between(set, index, other) {
                Relationship::Duplicate => scan.duplicates.push(other),
                Relationship::Conflict => scan.conflicts.push(other),
                Relationship::Independent => {}
            }
        }
        scan
    }
}

/// Runs the conflict detector and propagator over a candidate set.
///
/// # Examples
///
/// ```
/// use winname::label::{Disambiguator, PathEntry};
///
/// let entries = vec![
///     PathEntry::parse("p1", "a/dir", "shell").unwrap(),
///     PathEntry::parse("p2", "b/dir", "shell").unwrap(),
///     PathEntry::parse("p3", "c/dir", "nvim").unwrap(),
/// ];
///
/// let labels = Disambiguator::new().disambiguate(entries).unwrap();
/// let rendered: Vec<_> = labels.iter().map(|l| l.display_string()).collect();
/// assert_eq!(rendered, ["a/dir", "b/dir", "dir"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Disambiguator {
    policy: ConflictPolicy,
}

impl Disambiguator {
    /// Create a disambiguator with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `policy` for multi-way collisions.
    #[must_use]
    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured conflict policy.
    #[must_use]
    pub fn policy(&self) -> ConflictPolicy {
        self.policy
    }

    /// Label `entries`, returning one label per entry in input order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResolverExhausted`](crate::Error::ResolverExhausted)
    /// if the internal invariant that identical paths are never resolved
    /// against each other is broken.
    pub fn disambiguate<C, G: PartialEq>(
        &self,
        entries: Vec<PathEntry<C, G>>,
    ) -> Result<Vec<Label<C>>> {
        let mut set = CandidateSet::from_entries(entries);
        self.run(&mut set)?;
        Ok(set.into_labels())
    }

    /// Make one sweep over `set`, updating display labels in place.
    ///
    /// # Errors
    ///
    /// See [`disambiguate`](Self::disambiguate).
    pub fn run<C, G: PartialEq>(&self, set: &mut CandidateSet<C, G>) -> Result<()> {
        for index in 0..set.len() {
            let scan = ConflictScan::collect(set, index);

            if !scan.conflicts.is_empty() {
                log::debug!(
                    "{} collides with {} other path(s) on label {}",
                    set.entry(index).full_path(),
                    scan.conflicts.len(),
                    set.display(index)
                );
                self.resolve_conflicts(set, index, &scan.conflicts)?;
            }

            let display = set.display(index).clone();
            for &duplicate in &scan.duplicates {
                set.set_display(duplicate, display.clone());
            }
        }
        Ok(())
    }

    fn resolve_conflicts<C, G>(
        &self,
        set: &mut CandidateSet<C, G>,
        index: usize,
        conflicts: &[usize],
    ) -> Result<()> {
        let mut deepest: Option<SegmentPath> = None;

        for &other in conflicts {
            let pair =
                try_uncommon_suffixes(set.entry(index).full_path(), set.entry(other).full_path())?;
            log::trace!(
                "{} vs {}: split at depth {}",
                set.entry(index).full_path(),
                set.entry(other).full_path(),
                pair.depth
            );
            let (own, theirs) = pair.into_tuple();
            set.set_display(other, theirs);

            match self.policy {
                ConflictPolicy::LastPartner => set.set_display(index, own),
                ConflictPolicy::DeepestPartner => {
                    if deepest.as_ref().map_or(true, |d| own.len() > d.len()) {
                        deepest = Some(own);
                    }
                }
            }
        }

        if let Some(display) = deepest {
            set.set_display(index, display);
        }
        Ok(())
    }
}

/// Label `entries` with the default [`ConflictPolicy`].
///
/// # Errors
///
/// See [`Disambiguator::disambiguate`].
///
/// # Examples
///
/// ```
/// use winname::{disambiguate, PathEntry};
///
/// let labels = disambiguate(vec![
///     PathEntry::parse("p1", "a/b/dir", ()).unwrap(),
///     PathEntry::parse("p2", "b/dir", ()).unwrap(),
/// ])
/// .unwrap();
/// assert_eq!(labels[0].display_string(), "a/b/dir");
/// assert_eq!(labels[1].display_string(), "b/dir");
/// ```
pub fn disambiguate<C, G: PartialEq>(entries: Vec<PathEntry<C, G>>) -> Result<Vec<Label<C>>> {
    Disambiguator::new().disambiguate(entries)
}
