//! Renderer-agnostic scene description for one draw cycle.
//!
//! This module provides the types the layout engine emits and any 2D
//! renderer consumes:
//!
//! - [`MarkerGroup`] - A column of labeled pin markers with a shared style
//!   and text-anchor side
//! - [`Border`] - A stroked rectangle around one component's pins
//! - [`SceneLabel`] - Free-standing centered text (component titles, pin
//!   numbers)
//! - [`Scene`] - The accumulated output of one composition pass, plus the
//!   viewport it should be drawn into
//!
//! Z-ordering is positional rather than layered: renderers must draw
//! borders first, then markers, then labels, so text is never occluded by
//! a border stroke.
//!
//! All types serialize with serde, so a scene can be handed across a
//! process boundary as plain data when the renderer is not in-process.

use serde::Serialize;

use crate::geometry::{Bounds, Point};

/// Which side of a marker its text label grows toward.
///
/// Pin labels are drawn to the outside of their column so text never
/// overlaps the marker circles: left-column labels grow further left,
/// right-column labels grow further right. Titles and pin numbers are
/// centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    /// Text extends leftward from the marker (left pin column)
    Left,
    /// Text extends rightward from the marker (right pin column)
    Right,
    /// Text is centered on the anchor point
    Center,
}

/// Visual style shared by every marker in a [`MarkerGroup`].
///
/// Markers are hollow circles: a transparent fill with a stroked outline.
/// Colors are CSS color strings passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    size: f32,
    stroke_color: String,
    stroke_width: f32,
}

impl MarkerStyle {
    /// Creates a marker style with the given diameter and stroke.
    pub fn new(size: f32, stroke_color: impl Into<String>, stroke_width: f32) -> Self {
        Self {
            size,
            stroke_color: stroke_color.into(),
            stroke_width,
        }
    }

    /// Returns the marker diameter in renderer units
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the stroke color as a CSS color string
    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    /// Returns the stroke width
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self::new(20.0, "green", 2.0)
    }
}

/// A point in diagram space paired with its text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledPoint {
    position: Point,
    text: String,
}

impl LabeledPoint {
    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Returns the position of this point
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the text attached to this point
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One column of pin markers sharing a style and a text-anchor side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerGroup {
    points: Vec<LabeledPoint>,
    anchor: TextAnchor,
    style: MarkerStyle,
}

impl MarkerGroup {
    pub fn new(points: Vec<LabeledPoint>, anchor: TextAnchor, style: MarkerStyle) -> Self {
        Self {
            points,
            anchor,
            style,
        }
    }

    /// Returns the labeled points in this group, in column order
    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    /// Returns the text-anchor side for this group's labels
    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    /// Returns the shared marker style
    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }
}

/// A stroked, unfilled rectangle around one component's pins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Border {
    bounds: Bounds,
    color: String,
    width: f32,
}

impl Border {
    pub fn new(bounds: Bounds, color: impl Into<String>, width: f32) -> Self {
        Self {
            bounds,
            color: color.into(),
            width,
        }
    }

    /// Returns the rectangle this border draws
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the stroke color as a CSS color string
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the stroke width
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Free-standing centered text, such as a component title or pin number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLabel {
    position: Point,
    text: String,
}

impl SceneLabel {
    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    /// Returns the anchor position of this label
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the label text
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The accumulated drawable output of one composition pass.
///
/// A `Scene` is a deterministic projection of the placement state that
/// produced it: composing the same placements twice yields equal scenes.
/// The viewport is the axis-aligned region a renderer should map to its
/// drawing surface; all content is guaranteed to fall within it.
///
/// # Examples
///
/// ```
/// # use pinion_core::geometry::{Bounds, Point};
/// # use pinion_core::scene::{Scene, SceneLabel};
/// let mut scene = Scene::new(Bounds::new(0.0, 0.0, 15.0, 10.0));
/// scene.push_label(SceneLabel::new(Point::new(2.25, 3.0), "Arduino"));
/// assert_eq!(scene.labels().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    markers: Vec<MarkerGroup>,
    borders: Vec<Border>,
    labels: Vec<SceneLabel>,
    viewport: Bounds,
}

impl Scene {
    /// Creates an empty scene with the given viewport
    pub fn new(viewport: Bounds) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Adds a marker group to the scene
    pub fn push_marker_group(&mut self, group: MarkerGroup) {
        self.markers.push(group);
    }

    /// Adds a border rectangle to the scene
    pub fn push_border(&mut self, border: Border) {
        self.borders.push(border);
    }

    /// Adds a free-standing label to the scene
    pub fn push_label(&mut self, label: SceneLabel) {
        self.labels.push(label);
    }

    /// Returns all marker groups, in insertion order
    pub fn markers(&self) -> &[MarkerGroup] {
        &self.markers
    }

    /// Returns all borders, in insertion order
    pub fn borders(&self) -> &[Border] {
        &self.borders
    }

    /// Returns all labels, in insertion order
    pub fn labels(&self) -> &[SceneLabel] {
        &self.labels
    }

    /// Returns the viewport this scene should be drawn into
    pub fn viewport(&self) -> Bounds {
        self.viewport
    }

    /// Grows the viewport to cover the given bounds
    pub fn expand_viewport(&mut self, bounds: Bounds) {
        self.viewport = self.viewport.merge(&bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_group() -> MarkerGroup {
        MarkerGroup::new(
            vec![
                LabeledPoint::new(Point::new(2.0, 2.0), "3.3V"),
                LabeledPoint::new(Point::new(2.0, 1.0), "GND"),
            ],
            TextAnchor::Left,
            MarkerStyle::default(),
        )
    }

    #[test]
    fn test_marker_style_default_is_hollow_green_circle() {
        let style = MarkerStyle::default();
        assert_eq!(style.size(), 20.0);
        assert_eq!(style.stroke_color(), "green");
        assert_eq!(style.stroke_width(), 2.0);
    }

    #[test]
    fn test_marker_group_preserves_point_order() {
        let group = sample_group();
        assert_eq!(group.points().len(), 2);
        assert_eq!(group.points()[0].text(), "3.3V");
        assert_eq!(group.points()[1].text(), "GND");
        assert_eq!(group.anchor(), TextAnchor::Left);
    }

    #[test]
    fn test_scene_accumulates_in_insertion_order() {
        let mut scene = Scene::new(Bounds::new(0.0, 0.0, 15.0, 10.0));
        scene.push_marker_group(sample_group());
        scene.push_border(Border::new(Bounds::new(1.5, 0.5, 3.0, 2.5), "blue", 2.0));
        scene.push_label(SceneLabel::new(Point::new(2.25, 3.0), "Board"));

        assert_eq!(scene.markers().len(), 1);
        assert_eq!(scene.borders().len(), 1);
        assert_eq!(scene.labels().len(), 1);
        assert_eq!(scene.labels()[0].text(), "Board");
    }

    #[test]
    fn test_scene_expand_viewport_never_shrinks() {
        let mut scene = Scene::new(Bounds::new(0.0, 0.0, 15.0, 10.0));
        scene.expand_viewport(Bounds::new(5.0, 0.0, 7.0, 22.0));
        assert_eq!(scene.viewport().max_x(), 15.0);
        assert_eq!(scene.viewport().max_y(), 22.0);

        scene.expand_viewport(Bounds::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(scene.viewport().max_y(), 22.0);
    }
}
