//! Candidates: entries paired with their current display label.

use crate::label::entry::{Label, PathEntry};
use crate::path::SegmentPath;

/// An entry together with the label it currently renders as.
///
/// The display always starts as the leaf of the full path and only ever
/// grows to a longer trailing suffix of it.
#[derive(Debug, Clone)]
pub struct Candidate<C, G> {
    entry: PathEntry<C, G>,
    display: SegmentPath,
}

impl<C, G> Candidate<C, G> {
    fn new(entry: PathEntry<C, G>) -> Self {
        let display = entry.full_path().leaf_path();
        Self { entry, display }
    }

    /// The entry this candidate was built from.
    #[must_use]
    pub fn entry(&self) -> &PathEntry<C, G> {
        &self.entry
    }

    /// The current display label.
    #[must_use]
    pub fn display(&self) -> &SegmentPath {
        &self.display
    }
}

/// The candidates of one invocation, in input order.
///
/// Display labels can only be changed from inside the crate, by the conflict
/// detector's write phase.
///
/// # Examples
///
/// ```
/// use winname::label::{CandidateSet, PathEntry};
///
/// let set = CandidateSet::from_entries(vec![
///     PathEntry::parse(1, "a/dir", ()).unwrap(),
///     PathEntry::parse(2, "b/other", ()).unwrap(),
/// ]);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.display(0).to_string(), "dir");
/// assert_eq!(set.display(1).to_string(), "other");
/// ```
#[derive(Debug, Clone)]
pub struct CandidateSet<C, G> {
    candidates: Vec<Candidate<C, G>>,
}

impl<C, G> CandidateSet<C, G> {
    /// Build one candidate per entry, preserving order.
    #[must_use]
    pub fn from_entries(entries: Vec<PathEntry<C, G>>) -> Self {
        Self {
            candidates: entries.into_iter().map(Candidate::new).collect(),
        }
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the set has no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The candidate at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Candidate<C, G>> {
        self.candidates.get(index)
    }

    /// The entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn entry(&self, index: usize) -> &PathEntry<C, G> {
        &self.candidates[index].entry
    }

    /// The current display label at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn display(&self, index: usize) -> &SegmentPath {
        &self.candidates[index].display
    }

    pub(crate) fn set_display(&mut self, index: usize, display: SegmentPath) {
        debug_assert!(self.candidates[index].entry.full_path().ends_with(&display));
        self.candidates[index].display = display;
    }

    /// Iterate over the candidates in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate<C, G>> {
        self.candidates.iter()
    }

    /// Consume the set into labels, in input order.
    #[must_use]
    pub fn into_labels(self) -> Vec<Label<C>> {
        self.candidates
            .into_iter()
            .map(|candidate| Label {
                display: candidate.display,
                context: candidate.entry.into_context(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_starts_as_leaf() {
        let set = CandidateSet::from_entries(vec![
            PathEntry::parse("x", "/home/user/project", 0).unwrap(),
        ]);
        assert_eq!(set.display(0).segments(), ["project"]);
        assert_eq!(set.entry(0).full_path().len(), 4);
    }

    #[test]
    fn test_into_labels_preserves_order_and_context() {
        let set = CandidateSet::from_entries(vec![
            PathEntry::parse("first", "a/one", 0).unwrap(),
            PathEntry::parse("second", "b/two", 0).unwrap(),
            PathEntry::parse("third", "c/three", 1).unwrap(),
        ]);
        let labels = set.into_labels();
        let contexts: Vec<_> = labels.iter().map(|l| l.context).collect();
        assert_eq!(contexts, ["first", "second", "third"]);
        assert_eq!(labels[2].display_string(), "three");
    }

    #[test]
    fn test_empty_set() {
        let set: CandidateSet<(), ()> = CandidateSet::from_entries(Vec::new());
        assert!(set.is_empty());
        assert!(set.get(0).is_none());
        assert!(set.into_labels().is_empty());
    }

    #[test]
    fn test_set_display_within_crate() {
        let mut set = CandidateSet::from_entries(vec![PathEntry::parse((), "a/b/c", ()).unwrap()]);
        set.set_display(0, SegmentPath::parse("b/c").unwrap());
        assert_eq!(set.get(0).unwrap().display().to_string(), "b/c");
    }
}
