//! Error types for the winname library.
//!
//! This module provides the error hierarchy for path labelling, window naming
//! and configuration handling, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a winname error.
///
/// # Examples
///
/// ```
/// use winname::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(20)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the winname library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path with no segments was supplied.
    #[error("path must contain at least one segment")]
    EmptyPath,

    /// A path segment is unusable.
    #[error("invalid path segment {segment:?}: {reason}")]
    InvalidSegment {
        /// The offending segment.
        segment: String,
        /// The reason the segment is invalid.
        reason: String,
    },

    /// Two identical paths reached the suffix resolver.
    ///
    /// The conflict detector routes identical paths to propagation, so this
    /// indicates a broken internal invariant rather than bad input.
    #[error("cannot disambiguate identical paths: {path}")]
    ResolverExhausted {
        /// The path both sides share.
        path: String,
    },

    /// A window description cannot be named.
    #[error("invalid window {id}: {reason}")]
    InvalidWindow {
        /// The window identifier.
        id: String,
        /// The reason the window is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if the error reports malformed caller input, as opposed to an
    /// environment or internal failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use winname::Error;
    ///
    /// assert!(Error::EmptyPath.is_input_error());
    /// assert!(!Error::ResolverExhausted { path: "a/b".into() }.is_input_error());
    /// ```
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyPath | Self::InvalidSegment { .. } | Self::InvalidWindow { .. } | Self::Json(_)
        )
    }
}
