//! Geometry value types for the plat layout generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! small `Copy` value types that the generators in `plat-gen` trade in:
//! [`Coordinate`] (grid-cell identity), [`Size`] (map bounds), and [`Rect`]
//! (axis-aligned building footprint with an exclusive max corner).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geom;

pub use error::GeomError;
pub use geom::{Coordinate, Rect, Size};
