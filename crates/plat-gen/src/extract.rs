//! Run-based rectangle extraction from an occupancy map.
//!
//! This is deliberately NOT a connected-component or maximal-rectangle
//! pass. From each filled cell the scan grows a horizontal run along that
//! row and, independently, a vertical run down that column, and proposes
//! the bounding rectangle of the two runs. Candidates that intersect an
//! already-accepted rectangle are dropped, together with the cells they
//! covered. Downstream consumers depend on this exact first-fit behavior;
//! do not "fix" it into a flood fill.

use crate::occupancy::OccupancyMap;
use indexmap::IndexSet;
use plat_core::{Coordinate, Rect};

/// Convert runs of filled cells into a set of non-overlapping rectangles.
///
/// Scans row-major (y outer, x inner). Every accepted rectangle is
/// non-degenerate and pairwise non-intersecting with the others; there is
/// no guarantee that every filled cell is covered. Calling this twice on
/// the same map yields the same set, in the same insertion order.
pub fn extract_rectangles(map: &OccupancyMap) -> IndexSet<Rect> {
    let size = map.size();
    let mut rects: IndexSet<Rect> = IndexSet::new();

    for y in 0..size.height {
        for x in 0..size.width {
            if !map.is_filled(Coordinate::new(x, y)) {
                continue;
            }

            // Horizontal run on this row only.
            let mut x1 = x;
            while map.is_filled(Coordinate::new(x1, y)) {
                x1 += 1;
            }
            // Vertical run on this column only.
            let mut y1 = y;
            while map.is_filled(Coordinate::new(x, y1)) {
                y1 += 1;
            }

            // The origin cell is filled, so both runs advanced at least once.
            let candidate = Rect {
                min: Coordinate::new(x, y),
                max: Coordinate::new(x1, y1),
            };

            if !rects.iter().any(|r| candidate.intersects(r)) {
                rects.insert(candidate);
            }
        }
    }

    rects
}
