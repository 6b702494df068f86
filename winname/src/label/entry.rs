//! Input and output records of the labelling engine.

use crate::error::Result;
use crate::path::SegmentPath;

/// One item to be labelled.
///
/// `context` is carried through untouched and handed back with the label.
/// Entries whose `group_key`s differ never influence each other's labels.
///
/// # Examples
///
/// ```
/// use winname::label::PathEntry;
///
/// let entry = PathEntry::parse("@1", "/home/me/src", "nvim").unwrap();
/// assert_eq!(entry.full_path().leaf(), "src");
/// assert_eq!(*entry.group_key(), "nvim");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry<C, G> {
    context: C,
    full_path: SegmentPath,
    group_key: G,
}

impl<C, G> PathEntry<C, G> {
    /// Create an entry from an already-built path.
    #[must_use]
    pub fn new(context: C, full_path: SegmentPath, group_key: G) -> Self {
        Self {
            context,
            full_path,
            group_key,
        }
    }

    /// Create an entry by splitting `path` on `/`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` has no segments.
    pub fn parse(context: C, path: &str, group_key: G) -> Result<Self> {
        Ok(Self::new(context, SegmentPath::parse(path)?, group_key))
    }

    /// The caller's context value.
    #[must_use]
    pub fn context(&self) -> &C {
        &self.context
    }

    /// The full path. Never changes after construction.
    #[must_use]
    pub fn full_path(&self) -> &SegmentPath {
        &self.full_path
    }

    /// The group this entry belongs to.
    #[must_use]
    pub fn group_key(&self) -> &G {
        &self.group_key
    }

    /// Take the context back out of the entry.
    #[must_use]
    pub fn into_context(self) -> C {
        self.context
    }
}

/// The label computed for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label<C> {
    /// The context of the entry this label belongs to.
    pub context: C,
    /// Trailing segments of the entry's path to display.
    pub display: SegmentPath,
}

impl<C> Label<C> {
    /// Render the label with `/` separators.
    #[must_use]
    pub fn display_string(&self) -> String {
        self.display.to_string()
    }
}
