//! Geometric primitives for pin-diagram layout and positioning.
//!
//! This module provides the fundamental geometric types used throughout
//! Pinion for calculating pin positions, component borders, and canvas
//! viewports.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides
//!
//! # Coordinate System
//!
//! Pinion uses a chart-style coordinate system:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//!
//! Pin rows are laid out top-to-bottom with the topmost row at the largest
//! y value, matching the grid arithmetic of the layout engine. Renderers
//! targeting screen coordinates (SVG, most raster surfaces) are responsible
//! for flipping the y-axis; the geometry here never does.

use serde::Serialize;

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates. The coordinate system has origin at
/// bottom-left with Y increasing upward (see [module documentation](self)
/// for details).
///
/// # Examples
///
/// ```
/// # use pinion_core::geometry::Point;
/// let left = Point::new(2.0, 3.0);
/// let right = Point::new(2.5, 3.0);
///
/// // Midpoint calculation, e.g. for centering a title between columns
/// let mid = left.midpoint(right);
/// assert_eq!(mid.x(), 2.25);
/// assert_eq!(mid.y(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Converts this point into a degenerate (zero-size) bounds
    ///
    /// Useful as the seed when folding a set of points into their
    /// enclosing bounds with [`Bounds::merge`].
    pub fn to_bounds(self) -> Bounds {
        Bounds::new(self.x, self.y, self.x, self.y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from explicit minimum and maximum coordinates
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates a new bounds at the origin with the given size
    pub fn from_size(size: Size) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: size.width(),
            max_y: size.height(),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Sets the minimum y-coordinate of the bounds and returns the modified bounds
    pub fn with_min_y(mut self, min_y: f32) -> Self {
        self.min_y = min_y;
        self
    }

    /// Sets the maximum y-coordinate of the bounds and returns the modified bounds
    pub fn with_max_y(mut self, max_y: f32) -> Self {
        self.max_y = max_y;
        self
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// The resulting bounds will have the minimum values of both bounds for
    /// min_x and min_y, and the maximum values of both bounds for max_x and
    /// max_y.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinion_core::geometry::Bounds;
    /// let canvas = Bounds::new(0.0, 0.0, 15.0, 10.0);
    /// let tall_component = Bounds::new(1.5, 0.5, 3.0, 21.5);
    ///
    /// let viewport = canvas.merge(&tall_component);
    /// assert_eq!(viewport.max_x(), 15.0); // From canvas
    /// assert_eq!(viewport.max_y(), 21.5); // From the component
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Returns true if the point lies strictly inside the bounds.
    ///
    /// A point on any edge does not count as contained; a component border
    /// must enclose its markers with clearance on every side.
    pub fn strictly_contains(&self, point: Point) -> bool {
        point.x() > self.min_x
            && point.x() < self.max_x
            && point.y() > self.min_y
            && point.y() < self.max_y
    }

    /// Returns true if this bounds' horizontal extent overlaps another's.
    ///
    /// Touching edges (`self.max_x == other.min_x`) do not count as overlap.
    pub fn overlaps_horizontally(&self, other: &Self) -> bool {
        self.min_x < other.max_x && other.min_x < self.max_x
    }

    /// Expands the bounds by adding insets.
    ///
    /// This decreases the minimum coordinates by left/bottom insets and
    /// increases the maximum coordinates by right/top insets, effectively
    /// growing the bounds.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.bottom(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.top(),
        }
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates insets with the specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates insets with the same value on all four sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates insets with one horizontal value (left/right) and one
    /// vertical value (top/bottom)
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Returns the top inset
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset
    pub fn left(self) -> f32 {
        self.left
    }
}
