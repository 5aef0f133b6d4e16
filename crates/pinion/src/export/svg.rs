//! SVG rendering of scenes.
//!
//! [`SvgBuilder`] configures and builds an [`Svg`] exporter, which renders
//! a [`Scene`] to a complete SVG document string in memory.
//!
//! The scene uses chart-style coordinates (Y up); SVG uses screen
//! coordinates (Y down). The exporter owns the flip: a diagram point
//! `(x, y)` maps to pixel `((x - min_x) * scale, (max_y - y) * scale)`
//! against the scene viewport. Z-order follows the scene contract:
//! borders first, then markers, then all text.

use svg::Document;
use svg::node::element as svg_element;

use pinion_core::geometry::{Bounds, Point};
use pinion_core::scene::{MarkerGroup, Scene, TextAnchor};

const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE: f32 = 12.0;

/// Pixel clearance between a marker's edge and the start of its label.
const LABEL_CLEARANCE: f32 = 4.0;

/// Builder for the SVG exporter.
///
/// # Examples
///
/// ```
/// # use pinion::export::svg::SvgBuilder;
/// let exporter = SvgBuilder::new()
///     .with_scale(40.0)
///     .with_background("white")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    scale: f32,
    background: Option<String>,
}

impl SvgBuilder {
    /// Creates a builder with the default scale (40 px per diagram unit)
    /// and no background.
    pub fn new() -> Self {
        Self {
            scale: 40.0,
            background: None,
        }
    }

    /// Sets the number of pixels per diagram unit.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets a background color (CSS color string) painted behind the scene.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Builds the exporter.
    pub fn build(self) -> Svg {
        Svg {
            scale: self.scale,
            background: self.background,
        }
    }
}

impl Default for SvgBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders scenes to SVG document strings.
pub struct Svg {
    scale: f32,
    background: Option<String>,
}

impl Svg {
    /// Renders a scene to a complete SVG document string.
    ///
    /// Rendering is infallible: the scene is already validated geometry
    /// and the document is assembled in memory.
    pub fn render(&self, scene: &Scene) -> String {
        let viewport = scene.viewport();
        let width = viewport.width() * self.scale;
        let height = viewport.height() * self.scale;

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0.0f32, 0.0f32, width, height));

        if let Some(color) = &self.background {
            document = document.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", color.clone()),
            );
        }

        for border in scene.borders() {
            let bounds = border.bounds();
            let (x, y) = self.to_pixels(viewport, Point::new(bounds.min_x(), bounds.max_y()));
            document = document.add(
                svg_element::Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", bounds.width() * self.scale)
                    .set("height", bounds.height() * self.scale)
                    .set("fill", "none")
                    .set("stroke", border.color())
                    .set("stroke-width", border.width()),
            );
        }

        for group in scene.markers() {
            for point in group.points() {
                let (cx, cy) = self.to_pixels(viewport, point.position());
                document = document.add(
                    svg_element::Circle::new()
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", group.style().size() / 2.0)
                        .set("fill", "none")
                        .set("stroke", group.style().stroke_color())
                        .set("stroke-width", group.style().stroke_width()),
                );
            }
        }

        for group in scene.markers() {
            document = self.add_pin_labels(document, viewport, group);
        }

        for label in scene.labels() {
            let (x, y) = self.to_pixels(viewport, label.position());
            document = document.add(centered_text(label.text()).set("x", x).set("y", y));
        }

        document.to_string()
    }

    /// Adds one marker group's text labels, anchored outward from the
    /// marker circles.
    fn add_pin_labels(
        &self,
        mut document: Document,
        viewport: Bounds,
        group: &MarkerGroup,
    ) -> Document {
        let offset = group.style().size() / 2.0 + LABEL_CLEARANCE;
        for point in group.points() {
            let (cx, cy) = self.to_pixels(viewport, point.position());
            let (x, anchor) = match group.anchor() {
                TextAnchor::Left => (cx - offset, "end"),
                TextAnchor::Right => (cx + offset, "start"),
                TextAnchor::Center => (cx, "middle"),
            };
            document = document.add(
                svg_element::Text::new(point.text())
                    .set("x", x)
                    .set("y", cy)
                    .set("text-anchor", anchor)
                    .set("dominant-baseline", "central")
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", FONT_SIZE),
            );
        }
        document
    }

    /// Maps a diagram point to pixel coordinates, flipping the y-axis.
    fn to_pixels(&self, viewport: Bounds, point: Point) -> (f32, f32) {
        (
            (point.x() - viewport.min_x()) * self.scale,
            (viewport.max_y() - point.y()) * self.scale,
        )
    }
}

fn centered_text(content: &str) -> svg_element::Text {
    svg_element::Text::new(content)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
        .set("font-family", FONT_FAMILY)
        .set("font-size", FONT_SIZE)
}
