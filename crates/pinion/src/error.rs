//! Error types for Pinion operations.
//!
//! This module provides the main error type [`PinionError`] which wraps the
//! error conditions that can occur while loading a catalog, laying out a
//! component, or composing a scene.
//!
//! Every variant is a deterministic input-validation failure: nothing here
//! is transient, so nothing is retried. A scene recomputation either
//! succeeds completely or fails with the first error encountered; there is
//! no partial-rendering fallback.

use std::io;

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::layout::LayoutError;

/// The main error type for Pinion operations.
#[derive(Debug, Error)]
pub enum PinionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("unknown component `{name}`: not present in the catalog")]
    UnknownComponent { name: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl PinionError {
    /// Create an `UnknownComponent` error for the given component name.
    pub fn unknown_component(name: impl Into<String>) -> Self {
        Self::UnknownComponent { name: name.into() }
    }
}
