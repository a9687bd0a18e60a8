//! Building-layout generators for grid-based maps.
//!
//! Two paths produce the same output type, an [`IndexSet`](indexmap::IndexSet)
//! of [`Rect`](plat_core::Rect) values:
//!
//! - **Raster path**: [`OccupancyMap::scatter`] marks cells inside a
//!   density-controlled disk around the map center, then
//!   [`extract_rectangles`] converts runs of filled cells into
//!   non-overlapping rectangles.
//! - **Direct path**: [`generate_buildings`] samples rectangle origins and
//!   footprints straight from the density-controlled disk, skipping the
//!   raster entirely. Buildings from this path may overlap each other.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so a seeded
//! [`ChaCha8Rng`](rand_chacha::ChaCha8Rng) gives bit-identical layouts for
//! identical seeds and parameters.
//!
//! ```
//! use plat_core::Size;
//! use plat_gen::{extract_rectangles, OccupancyMap};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let map = OccupancyMap::scatter(Size::new(64, 64), 0.8, &mut rng).unwrap();
//! let rects = extract_rectangles(&map);
//! assert!(rects.iter().all(|r| r.width() > 0 && r.height() > 0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buildings;
pub mod error;
pub mod extract;
pub mod occupancy;

pub use buildings::{generate_buildings, BuildBudget, DEFAULT_LIMIT, MAX_FOOTPRINT, MIN_FOOTPRINT};
pub use error::GenError;
pub use extract::extract_rectangles;
pub use occupancy::{OccupancyMap, ScatterBudget};
