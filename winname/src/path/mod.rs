//! Path segment model and suffix resolution.
//!
//! Paths are handled as plain segment sequences supplied by the caller. No
//! filesystem access, normalization or symlink resolution happens here.
//!
//! # Examples
//!
//! ```
//! use winname::path::{uncommon_suffixes, SegmentPath};
//!
//! let a = SegmentPath::parse("work/api/src").unwrap();
//! let b = SegmentPath::parse("work/web/src").unwrap();
//!
//! let pair = uncommon_suffixes(&a, &b);
//! assert_eq!(pair.first.to_string(), "api/src");
//! assert_eq!(pair.second.to_string(), "web/src");
//! ```

mod segments;
mod suffix;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use segments::{SegmentPath, ROOT_SEGMENT};
pub use suffix::{try_uncommon_suffixes, uncommon_suffixes, SuffixPair};
