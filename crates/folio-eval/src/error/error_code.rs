//! Error codes for contract violations.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Resolution and argument binding errors
//! - `E2xx` - Argument contract errors raised by handlers

use std::fmt;

/// Error codes for categorizing contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Binding Errors (E1xx)
    // =========================================================================
    /// Unknown tag.
    ///
    /// The invoked tag name is not part of the vocabulary.
    E100,

    /// Missing argument.
    ///
    /// A required parameter was not bound by the invocation.
    E101,

    /// Unexpected argument.
    ///
    /// A keyword argument names no declared parameter, or more positional
    /// arguments were given than there are free parameters.
    E102,

    /// Duplicate argument.
    ///
    /// The same keyword argument was given more than once.
    E103,

    // =========================================================================
    // Contract Errors (E2xx)
    // =========================================================================
    /// Type mismatch.
    ///
    /// An argument does not have the shape the handler requires
    /// (e.g., a number where a string is expected).
    E200,

    /// Index out of range.
    ///
    /// A sequence index is negative or past the last element.
    E201,

    /// Value not allowed.
    ///
    /// An argument is of the right type but outside the allowed set of values.
    E202,

    /// Malformed signature.
    ///
    /// A declaration signature is empty and no name can be derived from it.
    E203,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unknown tag",
            ErrorCode::E101 => "missing argument",
            ErrorCode::E102 => "unexpected argument",
            ErrorCode::E103 => "duplicate argument",
            ErrorCode::E200 => "type mismatch",
            ErrorCode::E201 => "index out of range",
            ErrorCode::E202 => "value not allowed",
            ErrorCode::E203 => "malformed signature",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
