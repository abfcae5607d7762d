//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the geometric types used by layers and connectors to
//! describe where they sit on the canvas and how much room they take.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Laminar lays layers out left-to-right along the X axis. The vertical axis is
//! only ever copied from one layer to the next, so its orientation does not
//! matter to the layout engine. The SVG exporter treats it the same way SVG does:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Units are abstract canvas units; the default frame is `128 / 9` units wide.

/// A 2D point representing a position in canvas space.
///
/// # Examples
///
/// ```
/// # use laminar_core::geometry::Point;
/// let center = Point::new(1.0, 2.0);
/// let shifted = center.add_point(Point::new(0.5, 0.0));
/// assert_eq!(shifted.x(), 1.5);
/// assert_eq!(shifted.y(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
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

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
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

    /// Half of the width; the distance from a center to the left or right edge
    pub fn half_width(self) -> f32 {
        self.width / 2.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates the smallest bounds containing both points
    pub fn new_from_points(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
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
    /// # Examples
    ///
    /// ```
    /// # use laminar_core::geometry::{Bounds, Point, Size};
    /// let left = Bounds::new_from_center(Point::new(-2.0, 0.0), Size::new(1.0, 1.0));
    /// let right = Bounds::new_from_center(Point::new(2.0, 0.0), Size::new(1.0, 3.0));
    ///
    /// let combined = left.merge(&right);
    /// assert_eq!(combined.min_x(), -2.5);
    /// assert_eq!(combined.max_x(), 2.5);
    /// assert_eq!(combined.height(), 3.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Grows the bounds by `amount` on every side
    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);

        let sum = p1.add_point(p2);
        assert_eq!(sum, Point::new(4.0, 6.0));

        let diff = p2.sub_point(p1);
        assert_eq!(diff, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_size_half_width() {
        let size = Size::new(3.0, 1.0);
        assert_approx_eq!(f32, size.half_width(), 1.5);
    }

    #[test]
    fn test_bounds_new_from_center() {
        let center = Point::new(50.0, 60.0);
        let bounds = Bounds::new_from_center(center, Size::new(20.0, 30.0));

        assert_eq!(bounds.min_x(), 40.0);
        assert_eq!(bounds.min_y(), 45.0);
        assert_eq!(bounds.max_x(), 60.0);
        assert_eq!(bounds.max_y(), 75.0);
        assert_eq!(bounds.center(), center);
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 30.0);
    }

    #[test]
    fn test_bounds_new_from_points_orders_coordinates() {
        let bounds = Bounds::new_from_points(Point::new(4.0, -1.0), Point::new(-2.0, 3.0));

        assert_eq!(bounds.min_x(), -2.0);
        assert_eq!(bounds.min_y(), -1.0);
        assert_eq!(bounds.max_x(), 4.0);
        assert_eq!(bounds.max_y(), 3.0);
    }

    #[test]
    fn test_bounds_expand() {
        let bounds = Bounds::new_from_center(Point::default(), Size::new(2.0, 2.0));
        let expanded = bounds.expand(0.5);

        assert_approx_eq!(f32, expanded.width(), 3.0);
        assert_approx_eq!(f32, expanded.height(), 3.0);
        assert_eq!(expanded.center(), Point::default());
    }
}
