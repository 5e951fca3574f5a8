//! Trellis CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use trellis_cli::{
    Args,
    error_adapter::{Reportable, to_reportables, warning_reportables},
};

fn render(reporter: &miette::GraphicalReportHandler, reportable: &Reportable) -> String {
    let mut writer = String::new();
    reporter
        .render_report(&mut writer, reportable)
        .expect("Writing to String buffer is infallible");
    writer
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Trellis");
    debug!(args:?; "Parsed arguments");

    let reporter = miette::GraphicalReportHandler::new();

    match trellis_cli::run(&args) {
        Ok(outcome) => {
            for reportable in warning_reportables(&outcome.warnings, &outcome.source) {
                warn!("{}", render(&reporter, &reportable));
            }
            info!(
                warnings = outcome.warnings.len(),
                config:% = outcome.config_source;
                "Completed successfully"
            );
        }
        Err(err) => {
            for reportable in to_reportables(&err) {
                error!("{}", render(&reporter, &reportable));
            }
            process::exit(1);
        }
    }
}
