//! Adapters for rendering Pinion errors through miette.
//!
//! The engine's error type knows nothing about terminal presentation; this
//! module wraps it in a [`miette::Diagnostic`] so the CLI can render
//! errors with the graphical report handler, with context-specific help
//! text where the fix is actionable.

use miette::Diagnostic;
use thiserror::Error;

use pinion::PinionError;

/// A single renderable diagnostic derived from a [`PinionError`].
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct Reportable {
    message: String,

    #[help]
    help: Option<String>,
}

/// Convert an error into the diagnostics to render, outermost first.
pub fn to_reportables(err: &PinionError) -> Vec<Reportable> {
    let help = match err {
        PinionError::UnknownComponent { .. } => {
            Some("run with --list to see the catalog's component names".to_string())
        }
        PinionError::Catalog(_) => Some(
            "a catalog maps component names to even-length arrays of pin-label strings"
                .to_string(),
        ),
        PinionError::Config(_) => {
            Some("config files are TOML with optional [layout] and [style] tables".to_string())
        }
        PinionError::Io(_) | PinionError::Layout(_) => None,
    };

    vec![Reportable {
        message: err.to_string(),
        help,
    }]
}
