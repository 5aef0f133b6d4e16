//! CLI logic for the Pinion pin-diagram tool.
//!
//! This module contains the core CLI logic: load the configuration and the
//! catalog, replay the requested placements through a placement log,
//! compose the scene, and write the rendered SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use pinion::catalog::Catalog;
use pinion::session::PlacementLog;
use pinion::{PinionError, PinoutBuilder};

/// Run the Pinion CLI application
///
/// # Errors
///
/// Returns `PinionError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Catalog loading errors
/// - Unknown component names
/// - Layout errors
pub fn run(args: &Args) -> Result<(), PinionError> {
    info!(
        catalog_path = args.catalog,
        output_path = args.output;
        "Processing pin diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let catalog = Catalog::from_path(&args.catalog)?;
    info!(components = catalog.len(); "Catalog loaded");

    if args.list {
        for name in catalog.names() {
            println!("{name}");
        }
        return Ok(());
    }

    // Replay the placement actions in order; name resolution happens at
    // composition time.
    let mut log = PlacementLog::new();
    for name in &args.place {
        log.place(name);
    }

    let builder = PinoutBuilder::new(app_config);
    let scene = builder.compose(&catalog, &log)?;
    let svg = builder.render_svg(&scene);

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
