//! Plat: procedural building-layout generation for grid-based maps.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the plat sub-crates. For most users, adding `plat` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use plat::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let size = Size::new(100, 100);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! // Raster path: scatter an occupancy disk, then extract rectangles.
//! let map = OccupancyMap::scatter(size, 0.8, &mut rng).unwrap();
//! let rects = extract_rectangles(&map);
//! assert!(rects.iter().all(|r| r.within(size)));
//!
//! // Direct path: sample building footprints straight from the spread.
//! let buildings = generate_buildings(size, 0.8, DEFAULT_LIMIT, &mut rng).unwrap();
//! assert!(buildings.len() <= DEFAULT_LIMIT);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geom`] | `plat-core` | `Coordinate`, `Size`, `Rect`, `GeomError` |
//! | [`gen`] | `plat-gen` | occupancy map, extractor, building generator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry value types (re-export of `plat-core`).
pub mod geom {
    pub use plat_core::*;
}

/// Layout generators (re-export of `plat-gen`).
pub mod gen {
    pub use plat_gen::*;
}

/// Commonly used types and functions, for glob import.
pub mod prelude {
    pub use plat_core::{Coordinate, GeomError, Rect, Size};
    pub use plat_gen::{
        extract_rectangles, generate_buildings, BuildBudget, GenError, OccupancyMap,
        ScatterBudget, DEFAULT_LIMIT, MAX_FOOTPRINT, MIN_FOOTPRINT,
    };
}
