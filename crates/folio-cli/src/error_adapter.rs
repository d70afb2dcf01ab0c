//! Error adapter for converting FolioError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use folio::{FolioError, Violation};

/// Adapter for a tag contract violation.
///
/// Violations carry an error code and optional help text but no source
/// location; the tag name is shown as part of the message.
pub struct ViolationAdapter<'a> {
    violation: &'a Violation,
}

impl<'a> ViolationAdapter<'a> {
    /// Create a new violation adapter.
    pub fn new(violation: &'a Violation) -> Self {
        Self { violation }
    }
}

impl fmt::Debug for ViolationAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViolationAdapter")
            .field("violation", &self.violation)
            .finish()
    }
}

impl fmt::Display for ViolationAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violation.tag() {
            Some(tag) => write!(f, "@{tag}: {}", self.violation.message()),
            None => write!(f, "{}", self.violation.message()),
        }
    }
}

impl std::error::Error for ViolationAdapter<'_> {}

impl MietteDiagnostic for ViolationAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.violation.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.violation
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }
}

/// Adapter for non-diagnostic [`FolioError`] variants.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, converter errors and configuration errors.
pub struct ErrorAdapter<'a>(pub &'a FolioError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FolioError::Io(_) => "folio::io",
            FolioError::Convert(_) => "folio::convert",
            FolioError::Evaluate(_) => return None,
            FolioError::UnknownLanguage(_) => "folio::unknown_language",
            FolioError::Config(_) => "folio::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            FolioError::UnknownLanguage(_) => Some(Box::new(
                "pass --language, or add a [[languages]] entry with matching extensions",
            )),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a contract violation or another error, providing
/// a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A tag contract violation with an error code.
    Violation(ViolationAdapter<'a>),
    /// A simple error without diagnostic details.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Violation(v) => fmt::Display::fmt(v, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Violation(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Violation(v) => v.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Violation(v) => v.help(),
            Reportable::Error(e) => e.help(),
        }
    }
}

/// Convert a [`FolioError`] into the reportable errors it consists of.
pub fn to_reportables(err: &FolioError) -> Vec<Reportable<'_>> {
    match err {
        FolioError::Evaluate(violation) => {
            vec![Reportable::Violation(ViolationAdapter::new(violation))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
