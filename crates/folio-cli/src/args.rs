//! Command-line argument definitions for the Folio CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the source
//! language, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Folio documentation tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the commented source file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output markup file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Source language name (e.g. javascript, livescript); chosen by file
    /// extension when omitted
    #[arg(short, long)]
    pub language: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
