//! Grid coordinates, map bounds, and axis-aligned rectangles.

use crate::error::GeomError;
use std::fmt;

/// A grid-cell identity: integer `(x, y)` position on the map.
///
/// Also used as a rectangle corner. Derives value equality and hashing so
/// that coordinates (and the rectangles built from them) deduplicate by
/// value in set containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Horizontal position, `0 <= x < width` for in-bounds cells.
    pub x: i32,
    /// Vertical position, `0 <= y < height` for in-bounds cells.
    pub y: i32,
}

impl Coordinate {
    /// Construct a coordinate from its components.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another coordinate.
    ///
    /// Computed in `i64` so that corner-to-corner distances on large maps
    /// cannot overflow.
    pub fn distance_sq(&self, other: Coordinate) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Map bounds: valid cells are `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Map width in cells.
    pub width: i32,
    /// Map height in cells.
    pub height: i32,
}

impl Size {
    /// Construct a size from its components.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Total cell count, clamping negative dimensions to zero.
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// The map's center cell, `(width / 2, height / 2)` with integer halves.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.width / 2, self.height / 2)
    }

    /// Whether `coord` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle with inclusive `min` and exclusive `max` corner.
///
/// Invariant: `min.x < max.x && min.y < max.y`, so a rectangle always covers
/// at least one cell. [`Rect::new`] enforces this; code paths that build the
/// struct directly must guarantee it themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rect {
    /// Top-left corner (inclusive).
    pub min: Coordinate,
    /// Bottom-right corner (exclusive).
    pub max: Coordinate,
}

impl Rect {
    /// Create a rectangle from its corners.
    ///
    /// Returns `Err(GeomError::DegenerateRect)` unless `min` is strictly
    /// above and to the left of `max` on both axes.
    pub fn new(min: Coordinate, max: Coordinate) -> Result<Self, GeomError> {
        if min.x >= max.x || min.y >= max.y {
            return Err(GeomError::DegenerateRect { min, max });
        }
        Ok(Self { min, max })
    }

    /// Width in cells (always positive).
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height in cells (always positive).
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Covered cell count.
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Open-interval AABB overlap test.
    ///
    /// True when the interiors intersect; rectangles that merely share an
    /// edge do not overlap under exclusive-max semantics.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }

    /// Whether the rectangle lies entirely inside `[0, width) x [0, height)`.
    ///
    /// The exclusive `max` corner may equal the bound itself.
    pub fn within(&self, size: Size) -> bool {
        self.min.x >= 0 && self.min.y >= 0 && self.max.x <= size.width && self.max.y <= size.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn r(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
        Rect::new(c(x0, y0), c(x1, y1)).unwrap()
    }

    #[test]
    fn rect_new_rejects_degenerate_corners() {
        assert!(Rect::new(c(0, 0), c(0, 5)).is_err());
        assert!(Rect::new(c(0, 0), c(5, 0)).is_err());
        assert!(Rect::new(c(3, 3), c(3, 3)).is_err());
        assert!(Rect::new(c(5, 5), c(2, 8)).is_err());
    }

    #[test]
    fn rect_new_accepts_unit_cell() {
        let rect = Rect::new(c(4, 7), c(5, 8)).unwrap();
        assert_eq!(rect.width(), 1);
        assert_eq!(rect.height(), 1);
        assert_eq!(rect.area(), 1);
    }

    #[test]
    fn intersects_detects_partial_overlap() {
        assert!(r(0, 0, 4, 4).intersects(&r(2, 2, 6, 6)));
        assert!(r(2, 2, 6, 6).intersects(&r(0, 0, 4, 4)));
    }

    #[test]
    fn intersects_detects_containment() {
        let outer = r(0, 0, 10, 10);
        let inner = r(3, 3, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn edge_adjacent_rects_do_not_intersect() {
        // Exclusive max: sharing an edge is not an overlap.
        assert!(!r(0, 0, 3, 3).intersects(&r(3, 0, 6, 3)));
        assert!(!r(0, 0, 3, 3).intersects(&r(0, 3, 3, 6)));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        assert!(!r(0, 0, 2, 2).intersects(&r(5, 5, 7, 7)));
    }

    #[test]
    fn size_center_uses_integer_halves() {
        assert_eq!(Size::new(100, 100).center(), c(50, 50));
        assert_eq!(Size::new(5, 7).center(), c(2, 3));
        assert_eq!(Size::new(0, 0).center(), c(0, 0));
    }

    #[test]
    fn size_contains_is_half_open() {
        let size = Size::new(4, 3);
        assert!(size.contains(c(0, 0)));
        assert!(size.contains(c(3, 2)));
        assert!(!size.contains(c(4, 0)));
        assert!(!size.contains(c(0, 3)));
        assert!(!size.contains(c(-1, 0)));
    }

    #[test]
    fn within_allows_touching_the_bound() {
        let size = Size::new(10, 10);
        assert!(r(0, 0, 10, 10).within(size));
        assert!(!r(0, 0, 11, 10).within(size));
        assert!(!r(-1, 0, 5, 5).within(size));
    }

    #[test]
    fn distance_sq_does_not_overflow_on_large_maps() {
        let d = c(i32::MIN / 2, i32::MIN / 2).distance_sq(c(i32::MAX / 2, i32::MAX / 2));
        assert!(d > 0);
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-50i32..50, -50i32..50, 1i32..20, 1i32..20)
            .prop_map(|(x, y, w, h)| r(x, y, x + w, y + h))
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn every_rect_intersects_itself(a in arb_rect()) {
            prop_assert!(a.intersects(&a));
        }
    }
}
