//! Configuration types for Pinion composition and rendering.
//!
//! This module provides configuration structures that control where placed
//! components land on the canvas and how the scene is styled. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources (the CLI loads them from a TOML file).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Slot spacing and canvas dimensions.
//! - [`StyleConfig`] - Visual styling: colors and marker geometry.
//!
//! # Example
//!
//! ```
//! # use pinion::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().x_start(), 2.0);
//! assert_eq!(config.style().marker_color(), "green");
//! ```

use serde::Deserialize;

use pinion_core::geometry::{Bounds, Size};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Slot spacing and canvas dimensions for the composition planner.
///
/// Defaults reproduce the interactive canvas of the tool: the first slot's
/// left column at x = 2, four units between slots, half a unit between the
/// columns of one component, a 15x10 base canvas.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    x_start: f32,
    x_spacing: f32,
    column_gap: f32,
    canvas_width: f32,
    canvas_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_start: 2.0,
            x_spacing: 4.0,
            column_gap: 0.5,
            canvas_width: 15.0,
            canvas_height: 10.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the x-coordinate of slot 0's left column
    pub fn x_start(&self) -> f32 {
        self.x_start
    }

    /// Returns the horizontal distance between consecutive slots
    pub fn x_spacing(&self) -> f32 {
        self.x_spacing
    }

    /// Returns the distance between a component's left and right columns
    pub fn column_gap(&self) -> f32 {
        self.column_gap
    }

    /// Returns the fixed base canvas as bounds anchored at the origin.
    ///
    /// The composition planner unions this with the content extent, so the
    /// canvas is a minimum viewport, not a clip.
    pub fn canvas_bounds(&self) -> Bounds {
        Bounds::from_size(Size::new(self.canvas_width, self.canvas_height))
    }
}

/// Visual styling for the emitted scene.
///
/// Colors are CSS color strings passed through to the renderer untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    marker_color: String,
    marker_size: f32,
    stroke_width: f32,
    border_color: String,
    reference_border_color: String,
    background_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            marker_color: "green".to_string(),
            marker_size: 20.0,
            stroke_width: 2.0,
            border_color: "blue".to_string(),
            reference_border_color: "black".to_string(),
            background_color: None,
        }
    }
}

impl StyleConfig {
    /// Returns the marker stroke color
    pub fn marker_color(&self) -> &str {
        &self.marker_color
    }

    /// Returns the marker diameter in renderer units
    pub fn marker_size(&self) -> f32 {
        self.marker_size
    }

    /// Returns the stroke width used for markers and borders
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns the border color for interactively placed components
    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    /// Returns the border color for reference-sheet components
    pub fn reference_border_color(&self) -> &str {
        &self.reference_border_color
    }

    /// Returns the canvas background color, if one is configured
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }
}
