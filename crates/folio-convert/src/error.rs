//! Errors raised while building a converter.
//!
//! Converting text never fails; only an unusable comment pattern does.

use thiserror::Error;

/// The error type for converter construction.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid comment pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("comment pattern `{pattern}` must have exactly one capture group, found {found}")]
    CaptureGroups { pattern: String, found: usize },
}
