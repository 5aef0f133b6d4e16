//! Exporters that consume the renderer-agnostic scene.
//!
//! The engine itself never talks to a display surface; anything that can
//! draw circles, rectangles, and text can consume a
//! [`Scene`](pinion_core::scene::Scene). This module hosts the built-in
//! SVG exporter.

pub mod svg;
