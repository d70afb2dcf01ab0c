//! Error types for Folio operations.
//!
//! This module provides the main error type [`FolioError`] which wraps the
//! error conditions of every toolchain stage.

use std::io;

use thiserror::Error;

use folio_convert::ConvertError;
use folio_eval::Violation;

/// The main error type for Folio operations.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Converter error: {0}")]
    Convert(#[from] ConvertError),

    #[error("{0}")]
    Evaluate(#[from] Violation),

    #[error("Unknown language `{0}`")]
    UnknownLanguage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
