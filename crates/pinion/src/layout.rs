//! The pin layout engine.
//!
//! This module converts an ordered pin-label list and a pair of x-columns
//! into concrete geometry: one marker per pin, a border rectangle sized to
//! fit them, and a title anchor above the border.
//!
//! # Overview
//!
//! - [`Columns`] - A validated pair of x-coordinates for the two pin columns
//! - [`LayoutStyle`] - Presentation options (margins, frame mode, pin numbers)
//! - [`LayoutResult`] - The derived geometry for one component
//! - [`layout`] - The engine itself, a pure function
//!
//! # Pin ordering
//!
//! Pin lists are interleaved in physical order: index 0 is the top-left
//! pin, index 1 the top-right, index 2 the next left, and so on. The engine
//! de-zips the list by index parity (even indices form the left column, odd
//! indices the right), then assigns both columns the shared y-sequence
//! `n, n-1, …, 1`, so row `k` always pairs the pins that sit next to each
//! other on the physical header.

use serde::Serialize;
use thiserror::Error;

use pinion_core::geometry::{Bounds, Insets, Point};
use pinion_core::scene::LabeledPoint;

/// Errors produced by the layout engine.
///
/// Both variants are input-validation failures; the engine never silently
/// truncates or repairs its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The pin-label list cannot pair into two columns.
    #[error("invalid pin spec: pin list must be non-empty with an even number of labels, got {len}")]
    InvalidPinSpec { len: usize },

    /// The x-column pair is malformed.
    #[error("invalid column spec: {reason}")]
    InvalidColumnSpec { reason: String },
}

/// A validated pair of x-coordinates for the left and right pin columns.
///
/// Construction enforces `left < right`; a `Columns` value in hand is
/// always a usable column pair.
///
/// # Examples
///
/// ```
/// # use pinion::layout::Columns;
/// let columns = Columns::new(2.0, 2.5).unwrap();
/// assert_eq!(columns.midpoint_x(), 2.25);
///
/// assert!(Columns::new(2.5, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Columns {
    left: f32,
    right: f32,
}

impl Columns {
    /// Creates a column pair from left and right x-coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidColumnSpec`] unless `left < right`.
    /// NaN coordinates fail the ordering check and are rejected too.
    pub fn new(left: f32, right: f32) -> Result<Self, LayoutError> {
        if !(left < right) {
            return Err(LayoutError::InvalidColumnSpec {
                reason: format!(
                    "left column ({left}) must be strictly less than right column ({right})"
                ),
            });
        }
        Ok(Self { left, right })
    }

    /// Creates a column pair from a slice of x-coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidColumnSpec`] unless the slice holds
    /// exactly two coordinates with the first strictly less than the second.
    pub fn from_slice(coordinates: &[f32]) -> Result<Self, LayoutError> {
        match coordinates {
            [left, right] => Self::new(*left, *right),
            _ => Err(LayoutError::InvalidColumnSpec {
                reason: format!(
                    "expected exactly two x-coordinates, got {}",
                    coordinates.len()
                ),
            }),
        }
    }

    /// Returns the x-coordinate of the left column
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the x-coordinate of the right column
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the horizontal center between the two columns
    pub fn midpoint_x(self) -> f32 {
        (self.left + self.right) / 2.0
    }
}

/// Presentation options for the layout engine.
///
/// The geometric invariants (equal column lengths, shared row y, markers
/// strictly inside the border, title strictly above the markers) hold for
/// every style; the options only move the border edges and toggle the
/// numeric pin-index labels.
///
/// Two presets reproduce the two rendering variants of the tool:
///
/// - [`LayoutStyle::placed`] - interactive placement view: a 0.5-unit
///   margin on every side, title one unit above the top row, no numbers.
/// - [`LayoutStyle::reference`] - static reference sheet: 0.25-unit
///   horizontal margins, frame from the baseline (y = 0) up to one unit
///   above the top row, title 1.5 units above the top row, numbered pins.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStyle {
    margin: Insets,
    frame_from_baseline: bool,
    title_rise: f32,
    numbered_pins: bool,
}

impl LayoutStyle {
    /// Style used for interactively placed components.
    pub fn placed() -> Self {
        Self {
            margin: Insets::uniform(0.5),
            frame_from_baseline: false,
            title_rise: 1.0,
            numbered_pins: false,
        }
    }

    /// Style used for static reference sheets, with numbered pins.
    pub fn reference() -> Self {
        Self {
            margin: Insets::symmetric(0.25, 0.0),
            frame_from_baseline: true,
            title_rise: 1.5,
            numbered_pins: true,
        }
    }

    /// Overrides the border margin (builder style)
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    /// Enables or disables numeric pin-index labels (builder style)
    pub fn with_numbered_pins(mut self, numbered: bool) -> Self {
        self.numbered_pins = numbered;
        self
    }

    /// Returns true if numeric pin-index labels are emitted
    pub fn numbered_pins(&self) -> bool {
        self.numbered_pins
    }
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self::placed()
    }
}

/// The derived geometry for one component at one column position.
///
/// Never persisted; recomputed from the pin list whenever a scene is
/// composed.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    left_points: Vec<LabeledPoint>,
    right_points: Vec<LabeledPoint>,
    pin_numbers: Vec<LabeledPoint>,
    border: Bounds,
    title: LabeledPoint,
}

impl LayoutResult {
    /// Returns the left-column markers, top row first
    pub fn left_points(&self) -> &[LabeledPoint] {
        &self.left_points
    }

    /// Returns the right-column markers, top row first
    pub fn right_points(&self) -> &[LabeledPoint] {
        &self.right_points
    }

    /// Returns the numeric pin-index labels, or an empty slice if the
    /// style did not request them. Numbers follow the physical interleaved
    /// order: odd numbers down the left column, even down the right.
    pub fn pin_numbers(&self) -> &[LabeledPoint] {
        &self.pin_numbers
    }

    /// Returns the border rectangle enclosing all markers
    pub fn border(&self) -> Bounds {
        self.border
    }

    /// Returns the title anchor, centered above the border
    pub fn title(&self) -> &LabeledPoint {
        &self.title
    }

    /// Returns the number of rows per column
    pub fn rows(&self) -> usize {
        self.left_points.len()
    }

    /// Returns the full extent of this layout: the border merged with the
    /// title anchor. Used by the composition planner to grow the viewport.
    pub fn extent(&self) -> Bounds {
        self.border.merge(&self.title.position().to_bounds())
    }
}

/// Lays out one component's pins into two columns.
///
/// This is a pure function: identical inputs always produce identical
/// output, and it touches no state outside its arguments. It operates
/// purely within the x-range given by `columns`, so layouts assigned
/// non-overlapping column pairs can never collide.
///
/// # Arguments
///
/// * `title` - The component name, anchored above the border
/// * `labels` - The pin labels in physical interleaved order
/// * `columns` - The x-coordinates of the left and right columns
/// * `style` - Presentation options (margins, frame mode, pin numbers)
///
/// # Errors
///
/// Returns [`LayoutError::InvalidPinSpec`] if `labels` is empty or has odd
/// length. (A malformed column pair is rejected earlier, when the
/// [`Columns`] value is constructed.)
///
/// # Examples
///
/// ```
/// # use pinion::layout::{layout, Columns, LayoutStyle};
/// let labels: Vec<String> = ["3.3V", "5V", "GND", "GPIO1"]
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// let columns = Columns::new(2.0, 2.5).unwrap();
///
/// let result = layout("Board", &labels, columns, &LayoutStyle::placed()).unwrap();
/// assert_eq!(result.rows(), 2);
/// assert_eq!(result.left_points()[0].text(), "3.3V");
/// assert_eq!(result.right_points()[0].text(), "5V");
/// ```
pub fn layout(
    title: &str,
    labels: &[String],
    columns: Columns,
    style: &LayoutStyle,
) -> Result<LayoutResult, LayoutError> {
    if labels.is_empty() || labels.len() % 2 != 0 {
        return Err(LayoutError::InvalidPinSpec { len: labels.len() });
    }

    let rows = labels.len() / 2;

    // Interleaved de-zip: even indices left, odd indices right. Both
    // columns share the y-sequence n, n-1, ..., 1 so row k pairs the pins
    // that are physically adjacent.
    let row_ys = (1..=rows).rev().map(|y| y as f32);

    let left_points: Vec<LabeledPoint> = labels
        .iter()
        .step_by(2)
        .zip(row_ys.clone())
        .map(|(label, y)| LabeledPoint::new(Point::new(columns.left(), y), label))
        .collect();

    let right_points: Vec<LabeledPoint> = labels
        .iter()
        .skip(1)
        .step_by(2)
        .zip(row_ys)
        .map(|(label, y)| LabeledPoint::new(Point::new(columns.right(), y), label))
        .collect();

    let pin_numbers = if style.numbered_pins {
        left_points
            .iter()
            .zip((1..).step_by(2))
            .chain(right_points.iter().zip((2..).step_by(2)))
            .map(|(point, number)| LabeledPoint::new(point.position(), number.to_string()))
            .collect()
    } else {
        Vec::new()
    };

    let marker_bounds = Bounds::new(columns.left(), 1.0, columns.right(), rows as f32);
    let border = if style.frame_from_baseline {
        marker_bounds
            .add_padding(style.margin)
            .with_min_y(0.0)
            .with_max_y(rows as f32 + 1.0)
    } else {
        marker_bounds.add_padding(style.margin)
    };

    let title = LabeledPoint::new(
        Point::new(columns.midpoint_x(), rows as f32 + style.title_rise),
        title,
    );

    Ok(LayoutResult {
        left_points,
        right_points,
        pin_numbers,
        border,
        title,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    fn columns() -> Columns {
        Columns::new(2.0, 2.5).expect("valid columns")
    }

    #[test]
    fn test_layout_four_pin_scenario() {
        let result = layout(
            "Board",
            &labels(&["3.3V", "5V", "GND", "GPIO1"]),
            columns(),
            &LayoutStyle::placed(),
        )
        .expect("valid layout");

        let left: Vec<_> = result
            .left_points()
            .iter()
            .map(|p| (p.position().x(), p.position().y(), p.text().to_string()))
            .collect();
        let right: Vec<_> = result
            .right_points()
            .iter()
            .map(|p| (p.position().x(), p.position().y(), p.text().to_string()))
            .collect();

        assert_eq!(
            left,
            vec![(2.0, 2.0, "3.3V".to_string()), (2.0, 1.0, "GND".to_string())]
        );
        assert_eq!(
            right,
            vec![
                (2.5, 2.0, "5V".to_string()),
                (2.5, 1.0, "GPIO1".to_string())
            ]
        );

        let border = result.border();
        assert_eq!(border.min_x(), 1.5);
        assert_eq!(border.max_x(), 3.0);
        assert_eq!(border.min_y(), 0.5);
        assert_eq!(border.max_y(), 3.5);

        assert_eq!(result.title().position(), Point::new(2.25, 3.0));
        assert_eq!(result.title().text(), "Board");
    }

    #[test]
    fn test_layout_reference_style_frame_and_title() {
        let result = layout(
            "Board",
            &labels(&["3.3V", "5V", "GND", "GPIO1"]),
            columns(),
            &LayoutStyle::reference(),
        )
        .expect("valid layout");

        let border = result.border();
        assert_eq!(border.min_x(), 1.75);
        assert_eq!(border.max_x(), 2.75);
        assert_eq!(border.min_y(), 0.0);
        assert_eq!(border.max_y(), 3.0);

        assert_eq!(result.title().position(), Point::new(2.25, 3.5));
    }

    #[test]
    fn test_layout_reference_style_pin_numbers() {
        let result = layout(
            "Board",
            &labels(&["a", "b", "c", "d", "e", "f"]),
            columns(),
            &LayoutStyle::reference(),
        )
        .expect("valid layout");

        let numbers: Vec<_> = result
            .pin_numbers()
            .iter()
            .map(|p| (p.position().x(), p.position().y(), p.text().to_string()))
            .collect();

        // Odd numbers down the left column, even down the right, centered
        // on their markers.
        assert_eq!(
            numbers,
            vec![
                (2.0, 3.0, "1".to_string()),
                (2.0, 2.0, "3".to_string()),
                (2.0, 1.0, "5".to_string()),
                (2.5, 3.0, "2".to_string()),
                (2.5, 2.0, "4".to_string()),
                (2.5, 1.0, "6".to_string()),
            ]
        );
    }

    #[test]
    fn test_layout_custom_margin_moves_border_only() {
        let style = LayoutStyle::placed().with_margin(Insets::uniform(1.0));
        let result = layout("Board", &labels(&["a", "b"]), columns(), &style).expect("valid");

        assert_eq!(result.border().min_x(), 1.0);
        assert_eq!(result.border().max_x(), 3.5);
        // Markers and title are unaffected by the margin.
        assert_eq!(result.left_points()[0].position(), Point::new(2.0, 1.0));
        assert_eq!(result.title().position().y(), 2.0);
    }

    #[test]
    fn test_layout_placed_style_has_no_pin_numbers() {
        let result = layout(
            "Board",
            &labels(&["a", "b"]),
            columns(),
            &LayoutStyle::placed(),
        )
        .expect("valid layout");
        assert!(result.pin_numbers().is_empty());
    }

    #[test]
    fn test_layout_numbering_can_be_toggled_per_style() {
        let style = LayoutStyle::placed().with_numbered_pins(true);
        let result = layout("Board", &labels(&["a", "b"]), columns(), &style).expect("valid");
        assert_eq!(result.pin_numbers().len(), 2);
        assert!(style.numbered_pins());
    }

    #[test]
    fn test_layout_odd_length_is_invalid_pin_spec() {
        let err = layout(
            "Board",
            &labels(&["a", "b", "c"]),
            columns(),
            &LayoutStyle::placed(),
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::InvalidPinSpec { len: 3 });
    }

    #[test]
    fn test_layout_empty_list_is_invalid_pin_spec() {
        let err = layout("Board", &[], columns(), &LayoutStyle::placed()).unwrap_err();
        assert_eq!(err, LayoutError::InvalidPinSpec { len: 0 });
    }

    #[test]
    fn test_columns_rejects_inverted_pair() {
        assert!(matches!(
            Columns::new(2.5, 2.0),
            Err(LayoutError::InvalidColumnSpec { .. })
        ));
        assert!(matches!(
            Columns::new(2.0, 2.0),
            Err(LayoutError::InvalidColumnSpec { .. })
        ));
    }

    #[test]
    fn test_columns_rejects_non_finite_coordinates() {
        // NaN is unordered, so it must not satisfy the left < right guard.
        assert!(matches!(
            Columns::new(f32::NAN, f32::NAN),
            Err(LayoutError::InvalidColumnSpec { .. })
        ));
        assert!(matches!(
            Columns::new(f32::NAN, 2.5),
            Err(LayoutError::InvalidColumnSpec { .. })
        ));
        assert!(matches!(
            Columns::new(2.0, f32::NAN),
            Err(LayoutError::InvalidColumnSpec { .. })
        ));
        // An infinite but ordered pair is still a usable column pair.
        assert!(Columns::new(f32::NEG_INFINITY, 2.5).is_ok());
    }

    #[test]
    fn test_columns_from_slice_requires_exactly_two() {
        assert!(matches!(
            Columns::from_slice(&[2.0]),
            Err(LayoutError::InvalidColumnSpec { .. })
        ));
        assert!(matches!(
            Columns::from_slice(&[2.0, 2.5, 3.0]),
            Err(LayoutError::InvalidColumnSpec { .. })
        ));
        assert!(Columns::from_slice(&[2.0, 2.5]).is_ok());
    }

    #[test]
    fn test_layout_is_idempotent() {
        let pins = labels(&["3.3V", "5V", "GND", "GPIO1", "SDA", "SCL"]);
        let first = layout("Board", &pins, columns(), &LayoutStyle::reference());
        let second = layout("Board", &pins, columns(), &LayoutStyle::reference());
        assert_eq!(first, second);
    }

    /// Strategy for valid even-length pin lists (1..=20 rows).
    fn pin_lists() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-Z0-9 ]{1,12}", 1..=20)
            .prop_map(|rows| {
                rows.into_iter()
                    .flat_map(|label| [format!("{label} L"), format!("{label} R")])
                    .collect()
            })
    }

    fn styles() -> impl Strategy<Value = LayoutStyle> {
        prop_oneof![Just(LayoutStyle::placed()), Just(LayoutStyle::reference())]
    }

    proptest! {
        #[test]
        fn prop_columns_have_equal_length(pins in pin_lists(), style in styles()) {
            let result = layout("Board", &pins, columns(), &style).unwrap();
            prop_assert_eq!(result.left_points().len(), pins.len() / 2);
            prop_assert_eq!(result.right_points().len(), pins.len() / 2);
        }

        #[test]
        fn prop_rows_share_y(pins in pin_lists(), style in styles()) {
            let result = layout("Board", &pins, columns(), &style).unwrap();
            for (left, right) in result.left_points().iter().zip(result.right_points()) {
                prop_assert_eq!(left.position().y(), right.position().y());
            }
        }

        #[test]
        fn prop_border_strictly_contains_markers(pins in pin_lists(), style in styles()) {
            let result = layout("Board", &pins, columns(), &style).unwrap();
            let border = result.border();
            for point in result.left_points().iter().chain(result.right_points()) {
                prop_assert!(border.strictly_contains(point.position()));
            }
        }

        #[test]
        fn prop_title_is_strictly_above_markers(pins in pin_lists(), style in styles()) {
            let result = layout("Board", &pins, columns(), &style).unwrap();
            let title_y = result.title().position().y();
            prop_assert!(title_y > border_top(&result));
            for point in result.left_points().iter().chain(result.right_points()) {
                prop_assert!(title_y > point.position().y());
            }
        }

        #[test]
        fn prop_layout_stays_within_columns(pins in pin_lists(), style in styles()) {
            let result = layout("Board", &pins, columns(), &style).unwrap();
            for point in result.left_points().iter().chain(result.right_points()) {
                prop_assert!(point.position().x() >= columns().left());
                prop_assert!(point.position().x() <= columns().right());
            }
        }
    }

    fn border_top(result: &LayoutResult) -> f32 {
        result.border().max_y()
    }
}
