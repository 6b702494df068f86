//! Segment-sequence representation of a path.
//!
//! The labelling engine never touches the filesystem. It sees a path only as
//! the ordered list of segments the caller produced, and compares those
//! segments verbatim (case-sensitive, no separator or symlink handling).

use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Segment used to represent the filesystem root.
pub const ROOT_SEGMENT: &str = "/";

/// A non-empty, ordered sequence of path segments.
///
/// # Examples
///
/// ```
/// use winname::path::SegmentPath;
///
/// let path = SegmentPath::parse("a/dir1/c").unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.leaf(), "c");
/// assert_eq!(path.segment_from_end(2), Some("dir1"));
/// assert_eq!(path.suffix_from_end(2).to_string(), "dir1/c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct SegmentPath {
    segments: Vec<String>,
}

// A SegmentPath is never empty, so `is_empty` would always be false.
#[allow(clippy::len_without_is_empty)]
impl SegmentPath {
    /// Create a path from already-split segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if `segments` is empty and
    /// [`Error::InvalidSegment`] if any segment is the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use winname::path::SegmentPath;
    ///
    /// let path = SegmentPath::new(vec!["a".into(), "dir".into()]).unwrap();
    /// assert_eq!(path.to_string(), "a/dir");
    /// assert!(SegmentPath::new(Vec::new()).is_err());
    /// ```
    pub fn new(segments: Vec<String>) -> Result<Self> {
        if segments.is_empty() {
            return Err(Error::EmptyPath);
        }
        if let Some(empty) = segments.iter().find(|s| s.is_empty()) {
            return Err(Error::InvalidSegment {
                segment: empty.clone(),
                reason: "segments cannot be empty".to_string(),
            });
        }
        Ok(Self { segments })
    }

    /// Split a `/`-separated string into segments.
    ///
    /// A leading `/` becomes a [`ROOT_SEGMENT`]; repeated and trailing
    /// separators produce no segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if the string contains no segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use winname::path::SegmentPath;
    ///
    /// let path = SegmentPath::parse("/home/user/").unwrap();
    /// assert_eq!(path.segments(), ["/", "home", "user"]);
    /// assert_eq!(path.to_string(), "/home/user");
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        let mut segments = Vec::new();
        if path.starts_with('/') {
            segments.push(ROOT_SEGMENT.to_string());
        }
        segments.extend(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
        Self::new(segments)
    }

    /// Build a path from the components of a [`Path`].
    ///
    /// The root directory becomes [`ROOT_SEGMENT`], `.` components are
    /// dropped, and `..` and platform prefixes are kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if the path has no usable components.
    ///
    /// # Examples
    ///
    /// ```
    /// use winname::path::SegmentPath;
    /// use std::path::Path;
    ///
    /// let path = SegmentPath::from_path(Path::new("./src/bin")).unwrap();
    /// assert_eq!(path.segments(), ["src", "bin"]);
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let segments = path
            .components()
            .filter_map(|component| match component {
                Component::RootDir => Some(ROOT_SEGMENT.to_string()),
                Component::CurDir => None,
                Component::ParentDir => Some("..".to_string()),
                Component::Prefix(prefix) => {
                    Some(prefix.as_os_str().to_string_lossy().into_owned())
                }
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            })
            .collect();
        Self::new(segments)
    }

    /// Number of segments. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The segments in order, root first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment.
    #[must_use]
    pub fn leaf(&self) -> &str {
        // new() guarantees at least one segment
        &self.segments[self.segments.len() - 1]
    }

    /// The `k`-th segment counting from the end, where `k = 1` is the leaf.
    ///
    /// Returns `None` when `k` is zero or exceeds [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use winname::path::SegmentPath;
    ///
    /// let path = SegmentPath::parse("b/dir").unwrap();
    /// assert_eq!(path.segment_from_end(1), Some("dir"));
    /// assert_eq!(path.segment_from_end(2), Some("b"));
    /// assert_eq!(path.segment_from_end(3), None);
    /// assert_eq!(path.segment_from_end(0), None);
    /// ```
    #[must_use]
    pub fn segment_from_end(&self, k: usize) -> Option<&str> {
        if k == 0 {
            return None;
        }
        self.segments
            .len()
            .checked_sub(k)
            .map(|index| self.segments[index].as_str())
    }

    /// The trailing sub-path made of the last `k` segments.
    ///
    /// `k` is clamped to `1..=len()`, so the result is never empty and never
    /// longer than `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use winname::path::SegmentPath;
    ///
    /// let path = SegmentPath::parse("a/b/dir").unwrap();
    /// assert_eq!(path.suffix_from_end(1).to_string(), "dir");
    /// assert_eq!(path.suffix_from_end(10), path);
    /// ```
    #[must_use]
    pub fn suffix_from_end(&self, k: usize) -> Self {
        let k = k.clamp(1, self.segments.len());
        Self {
            segments: self.segments[self.segments.len() - k..].to_vec(),
        }
    }

    /// The single-segment path holding only the leaf.
    #[must_use]
    pub fn leaf_path(&self) -> Self {
        self.suffix_from_end(1)
    }

    /// Check whether `suffix` is a trailing sub-sequence of this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use winname::path::SegmentPath;
    ///
    /// let full = SegmentPath::parse("a/dir1/c").unwrap();
    /// assert!(full.ends_with(&SegmentPath::parse("dir1/c").unwrap()));
    /// assert!(!full.ends_with(&SegmentPath::parse("dir2/c").unwrap()));
    /// ```
    #[must_use]
    pub fn ends_with(&self, suffix: &Self) -> bool {
        self.segments.ends_with(&suffix.segments)
    }

    /// Join the segments with `separator`.
    ///
    /// A root segment is not followed by an additional separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use winname::path::SegmentPath;
    ///
    /// let path = SegmentPath::parse("/srv/app").unwrap();
    /// assert_eq!(path.render("/"), "/srv/app");
    /// assert_eq!(SegmentPath::parse("srv/app").unwrap().render(" > "), "srv > app");
    /// ```
    #[must_use]
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && self.segments[i - 1] != ROOT_SEGMENT {
                out.push_str(separator);
            }
            out.push_str(segment);
        }
        out
    }
}

impl fmt::Display for SegmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("/"))
    }
}

impl TryFrom<Vec<String>> for SegmentPath {
    type Error = Error;

    fn try_from(segments: Vec<String>) -> Result<Self> {
        Self::new(segments)
    }
}

impl From<SegmentPath> for Vec<String> {
    fn from(path: SegmentPath) -> Self {
        path.segments
    }
}

impl std::str::FromStr for SegmentPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
