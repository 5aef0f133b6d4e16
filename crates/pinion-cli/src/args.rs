//! Command-line argument definitions for the Pinion CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the catalog path, which components to
//! place, output path, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Pinion pin-diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the catalog JSON file
    #[arg(help = "Path to the catalog file")]
    pub catalog: String,

    /// Component to place, by catalog name; repeat to place several in order
    #[arg(short, long = "place", value_name = "NAME")]
    pub place: Vec<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// List the catalog's component names and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
