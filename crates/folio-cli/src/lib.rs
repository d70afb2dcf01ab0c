//! CLI logic for the Folio documentation tool.
//!
//! This module contains the core CLI logic for converting commented source
//! files into Folio documentation markup.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write as _},
};

use log::info;

use folio::{FolioError, Toolchain};

/// What a successful run converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    language: String,
    source_lines: usize,
}

impl Conversion {
    /// Language tag given to the code blocks.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of source lines read from the input.
    pub fn source_lines(&self) -> usize {
        self.source_lines
    }
}

/// Run the Folio CLI application
///
/// This function converts the input file into documentation markup and
/// writes it to the output file, or to standard output when no output file
/// is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `FolioError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unknown source languages
/// - Unusable comment patterns
pub fn run(args: &Args) -> Result<Conversion, FolioError> {
    info!(
        input_path = args.input,
        output_path:? = args.output,
        language:? = args.language;
        "Processing source file"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let toolchain = Toolchain::new(app_config);

    let converter = match &args.language {
        Some(language) => toolchain.converter(language)?,
        None => toolchain.converter_for_path(&args.input)?,
    };

    let source = fs::read_to_string(&args.input)?;
    let markup = converter.convert(&source);
    let conversion = Conversion {
        language: converter.language().to_string(),
        source_lines: source.lines().count(),
    };

    match &args.output {
        Some(output) => {
            fs::write(output, &markup)?;
            info!(output_file = output; "Markup written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(markup.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(conversion)
}
