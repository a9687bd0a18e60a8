//! Direct-sampling building generator.
//!
//! Samples building origins from a density-controlled disk-shaped spread
//! around the map center and footprints from a fixed extent range, with no
//! intermediate raster. Rejected samples are skipped, never retried, so the
//! placed count typically undershoots the budget on small maps or wide
//! spreads. Unlike the raster path, placed buildings MAY overlap each other;
//! only the map bounds are enforced.

use crate::error::{check_density, GenError};
use indexmap::IndexSet;
use plat_core::{Coordinate, Rect, Size};
use rand::Rng;

/// Smallest sampled building extent per axis, in cells.
pub const MIN_FOOTPRINT: i32 = 1;
/// Largest sampled building extent per axis, in cells.
pub const MAX_FOOTPRINT: i32 = 10;
/// Default cap on the number of placed buildings.
pub const DEFAULT_LIMIT: usize = 1000;

/// Sampling budget for [`generate_buildings`], derived from map size and
/// density.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildBudget {
    /// Number of placement attempts: `trunc(width * density)`. Width only —
    /// the raster path scales with area, this path with one axis.
    pub attempts: i64,
    /// Origin spread radius around the map center:
    /// `trunc((width + height) / (4 * density)) / 2`.
    pub radius: i64,
}

impl BuildBudget {
    /// Compute the budget for a map of `size` at `density`.
    ///
    /// Returns `Err(GenError::InvalidDensity)` for non-finite or
    /// non-positive densities.
    pub fn new(size: Size, density: f64) -> Result<Self, GenError> {
        check_density(density)?;
        let w = size.width as i64;
        let h = size.height as i64;
        let attempts = (w as f64 * density) as i64;
        let radius = ((w + h) as f64 / (4.0 * density)) as i64 / 2;
        Ok(Self { attempts, radius })
    }
}

/// Stochastically place building footprints inside the map bounds.
///
/// Makes up to [`BuildBudget::attempts`] placement attempts, stopping early
/// once `limit` buildings are placed. Each attempt draws an origin uniformly
/// from `[center - radius, center + radius - 1]` per axis and a footprint
/// uniformly from `[MIN_FOOTPRINT, MAX_FOOTPRINT]` per axis, then skips the
/// attempt when any part of the building would fall outside
/// `[0, width) x [0, height)`. Surviving rectangles are value-deduplicated.
///
/// An empty sample range — zero attempts or a zero spread radius — yields an
/// empty set.
///
/// # Errors
///
/// Returns `Err(GenError::InvalidDensity)` for non-finite or non-positive
/// densities.
pub fn generate_buildings(
    size: Size,
    density: f64,
    limit: usize,
    rng: &mut impl Rng,
) -> Result<IndexSet<Rect>, GenError> {
    let budget = BuildBudget::new(size, density)?;
    let mut placed: IndexSet<Rect> = IndexSet::new();
    if budget.attempts <= 0 || budget.radius <= 0 {
        return Ok(placed);
    }

    let center = size.center();
    let x_range = (center.x as i64 - budget.radius)..(center.x as i64 + budget.radius);
    let y_range = (center.y as i64 - budget.radius)..(center.y as i64 + budget.radius);

    for _ in 0..budget.attempts {
        if placed.len() >= limit {
            break;
        }

        let x = rng.random_range(x_range.clone());
        let y = rng.random_range(y_range.clone());
        let w = rng.random_range(MIN_FOOTPRINT as i64..=MAX_FOOTPRINT as i64);
        let h = rng.random_range(MIN_FOOTPRINT as i64..=MAX_FOOTPRINT as i64);

        // Reject-and-continue: a building poking past the far edge or
        // starting off-map is simply lost.
        if x + w >= size.width as i64 || y + h >= size.height as i64 {
            continue;
        }
        if x < 0 || y < 0 {
            continue;
        }

        let rect = Rect::new(
            Coordinate::new(x as i32, y as i32),
            Coordinate::new((x + w) as i32, (y + h) as i32),
        )?;
        placed.insert(rect);
    }

    Ok(placed)
}
