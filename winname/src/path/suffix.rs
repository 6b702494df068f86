//! Shortest distinguishing suffixes between two paths.
//!
//! Two paths that currently render the same label are compared from the leaf
//! upwards. The walk stops at the first depth where the segments differ, or
//! where the shorter path runs out, and both paths are cut to that depth.

use crate::error::{Error, Result};
use crate::path::SegmentPath;

/// The pair of suffixes returned by the resolver.
///
/// `first` is a trailing suffix of the first input and `second` of the
/// second one. `depth` is the number of trailing segments that were
/// compared; each suffix is that long unless its path is shorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixPair {
    /// Suffix of the first path.
    pub first: SegmentPath,
    /// Suffix of the second path.
    pub second: SegmentPath,
    /// Depth at which the walk stopped.
    pub depth: usize,
}

impl SuffixPair {
    /// Whether the two suffixes render differently.
    ///
    /// Only false for the identical-path fallback.
    #[must_use]
    pub fn is_distinct(&self) -> bool {
        self.first != self.second
    }

    /// Consume the pair into `(first, second)`.
    #[must_use]
    pub fn into_tuple(self) -> (SegmentPath, SegmentPath) {
        (self.first, self.second)
    }
}

/// Depth at which `a` and `b` first diverge when read from the leaf, or
/// `None` if they are identical.
///
/// Running out of segments on one side counts as divergence at that depth.
fn divergence_depth(a: &SegmentPath, b: &SegmentPath) -> Option<usize> {
    let max_depth = a.len().max(b.len());
    (1..=max_depth).find(|&k| match (a.segment_from_end(k), b.segment_from_end(k)) {
        (Some(x), Some(y)) => x != y,
        _ => true,
    })
}

/// Compute the shortest pair of trailing suffixes that tell `a` and `b`
/// apart.
///
/// If the paths are identical no such pair exists; both full paths are
/// returned and [`SuffixPair::is_distinct`] is false. Use
/// [`try_uncommon_suffixes`] to treat that case as an error.
///
/// # Examples
///
/// ```
/// use winname::path::{uncommon_suffixes, SegmentPath};
///
/// let a = SegmentPath::parse("a/dir1/c").unwrap();
/// let b = SegmentPath::parse("b/dir2/c").unwrap();
/// let pair = uncommon_suffixes(&a, &b);
/// assert_eq!(pair.first.to_string(), "dir1/c");
/// assert_eq!(pair.second.to_string(), "dir2/c");
/// assert_eq!(pair.depth, 2);
/// ```
///
/// A path that is a strict suffix of the other is returned whole:
///
/// ```
/// use winname::path::{uncommon_suffixes, SegmentPath};
///
/// let a = SegmentPath::parse("a/b/dir").unwrap();
/// let b = SegmentPath::parse("b/dir").unwrap();
/// let pair = uncommon_suffixes(&a, &b);
/// assert_eq!(pair.first.to_string(), "a/b/dir");
/// assert_eq!(pair.second.to_string(), "b/dir");
/// ```
#[must_use]
pub fn uncommon_suffixes(a: &SegmentPath, b: &SegmentPath) -> SuffixPair {
    let depth = divergence_depth(a, b).unwrap_or_else(|| a.len().max(b.len()));
    SuffixPair {
        first: a.suffix_from_end(depth),
        second: b.suffix_from_end(depth),
        depth,
    }
}

/// Like [`uncommon_suffixes`], but identical paths are an error.
///
/// # Errors
///
/// Returns [`Error::ResolverExhausted`] when `a == b`.
pub fn try_uncommon_suffixes(a: &SegmentPath, b: &SegmentPath) -> Result<SuffixPair> {
    match divergence_depth(a, b) {
        Some(depth) => Ok(SuffixPair {
            first: a.suffix_from_end(depth),
            second: b.suffix_from_end(depth),
            depth,
        }),
        None => Err(Error::ResolverExhausted {
            path: a.to_string(),
        }),
    }
}
