//! Pinion CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use pinion::PinionError;
use pinion_cli::{Args, error_adapter::to_reportables};

/// Resolves the requested log level and installs the logger.
///
/// An unparseable level falls back to `warn` rather than aborting; a bad
/// `--log-level` should not stop a diagram from rendering.
fn init_logging(args: &Args) -> LevelFilter {
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

    log_level
}

/// Renders every diagnostic nested in the failure through miette.
fn report_failure(err: &PinionError) {
    let reporter = miette::GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &reportable)
            .expect("Writing to String buffer is infallible");

        error!("{writer}");
    }
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = init_logging(&args);

    info!(log_level:?; "Starting Pinion");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = pinion_cli::run(&args) {
        report_failure(&err);
        process::exit(1);
    }

    info!("Completed successfully");
}
