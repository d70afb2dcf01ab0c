//! Folio CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use folio::FolioError;
use folio_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match folio_cli::run(&args) {
        Ok(conversion) => info!(
            language = conversion.language(),
            source_lines = conversion.source_lines();
            "Converted {}", args.input
        ),
        Err(err) => {
            report(&err);
            process::exit(1);
        }
    }
}

/// Install the logger, falling back to `warn` for an unknown level name.
fn init_logging(level: &str) {
    let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
}

/// Render every diagnostic of `err` through miette's graphical handler.
fn report(err: &FolioError) {
    let reporter = miette::GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        if reporter.render_report(&mut rendered, &reportable).is_err() {
            rendered = reportable.to_string();
        }
        error!("{rendered}");
    }
}
