//! The contract violation diagnostic.

use std::fmt;

use crate::error::ErrorCode;

/// A failed argument contract.
///
/// Carries:
/// - An [`ErrorCode`] for documentation and searchability
/// - A primary message describing the issue
/// - The tag whose handler rejected the invocation, once known
/// - Optional help text with suggestions
///
/// Source positions are not known here; the markup evaluator that invoked
/// the tag attaches them when reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    code: ErrorCode,
    message: String,
    tag: Option<String>,
    help: Option<String>,
}

impl Violation {
    /// Create a violation with a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            tag: None,
            help: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the name of the tag that raised this violation, if known.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Record the tag that raised this violation.
    ///
    /// An already recorded tag is kept.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        if self.tag.is_none() {
            self.tag = Some(tag.into());
        }
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for Violation {}
