//! Error types for geometry construction.

use crate::geom::Coordinate;
use std::fmt;

/// Errors arising from geometry construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A rectangle's corners do not satisfy `min.x < max.x && min.y < max.y`.
    DegenerateRect {
        /// The offending top-left corner.
        min: Coordinate,
        /// The offending bottom-right corner.
        max: Coordinate,
    },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRect { min, max } => {
                write!(f, "degenerate rectangle: min {min} must be strictly above and left of max {max}")
            }
        }
    }
}

impl std::error::Error for GeomError {}
