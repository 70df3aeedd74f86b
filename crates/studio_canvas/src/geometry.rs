// SPDX-License-Identifier: MIT OR Apache-2.0
//! Points and axis-aligned boxes.

use serde::{Deserialize, Serialize};

/// A 2D point (world or screen space depending on context)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum x
    pub left: f64,
    /// Minimum y
    pub top: f64,
    /// Maximum x
    pub right: f64,
    /// Maximum y
    pub bottom: f64,
}

impl BoundingBox {
    /// Create a box from its edges
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create a box from its top-left corner and extent
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Box spanning two corners
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    /// Top-left corner
    pub fn min(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Bottom-right corner
    pub fn max(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Centre point
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Smallest box containing both
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Grow by `margin` on every side
    pub fn expand(&self, margin: f64) -> BoundingBox {
        BoundingBox::new(
            self.left - margin,
            self.top - margin,
            self.right + margin,
            self.bottom + margin,
        )
    }

    /// True only when the boxes are strictly apart on some axis.
    ///
    /// Touching edges count as overlapping. Comparisons involving NaN are
    /// false, so NaN boxes are never reported as separated.
    pub fn is_separated_from(&self, other: &BoundingBox) -> bool {
        self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom
    }

    /// Whether the point lies inside or on the edge
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_extent() {
        let a = BoundingBox::from_origin_size(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::from_origin_size(20.0, -5.0, 5.0, 5.0);
        let u = a.union(&b);
        assert_eq!(u, BoundingBox::new(0.0, -5.0, 25.0, 10.0));
        assert_eq!(u.width(), 25.0);
        assert_eq!(u.height(), 15.0);
        assert_eq!(a.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_separation_is_strict() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let touching = BoundingBox::new(10.0, 0.0, 20.0, 10.0);
        let apart = BoundingBox::new(10.5, 0.0, 20.0, 10.0);
        assert!(!a.is_separated_from(&touching));
        assert!(a.is_separated_from(&apart));
        assert!(!a.expand(1.0).is_separated_from(&apart));
    }

    #[test]
    fn test_contains() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.contains(Point::new(10.0, 0.0)));
        assert!(!a.contains(Point::new(10.1, 5.0)));
    }
}
