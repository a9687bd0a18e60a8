//! Dense occupancy grid and the density-driven scatter pass.
//!
//! The map is a fully dense row-major `Vec<u8>` over `[0, width) x
//! [0, height)`, one flag per cell: `0` empty, `1` filled. Out-of-bounds
//! reads answer "empty" and out-of-bounds writes are dropped, so the scan
//! loops in [`extract`](crate::extract) never need bounds arithmetic of
//! their own.

use crate::error::{check_density, GenError};
use plat_core::{Coordinate, Size};
use rand::Rng;

/// Sampling budget for [`OccupancyMap::scatter`], derived from map size and
/// density.
///
/// These are the two quantities the scatter pass is parameterized by: how
/// many uniform cell draws to make, and the radius of the disk around the
/// map center inside which draws stick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScatterBudget {
    /// Number of uniform cell draws: `trunc(width * height * density)`.
    pub samples: i64,
    /// Disk radius: `trunc((width + height) / (4 * density)) / 4`, integer
    /// division on the last step.
    pub radius: i64,
}

impl ScatterBudget {
    /// Compute the budget for a map of `size` at `density`.
    ///
    /// Returns `Err(GenError::InvalidDensity)` for non-finite or
    /// non-positive densities.
    pub fn new(size: Size, density: f64) -> Result<Self, GenError> {
        check_density(density)?;
        let w = size.width as i64;
        let h = size.height as i64;
        let samples = (w as f64 * h as f64 * density) as i64;
        let radius = ((w + h) as f64 / (4.0 * density)) as i64 / 4;
        Ok(Self { samples, radius })
    }
}

/// A dense grid of 0/1 occupancy flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyMap {
    size: Size,
    cells: Vec<u8>,
}

impl OccupancyMap {
    /// Create an all-empty map covering `[0, width) x [0, height)`.
    ///
    /// Non-positive dimensions yield a zero-cell map rather than an error;
    /// degenerate sizes flow through the generators as empty results.
    pub fn empty(size: Size) -> Self {
        Self {
            size,
            cells: vec![0; size.area()],
        }
    }

    /// Create a map and scatter filled cells into it.
    ///
    /// Draws [`ScatterBudget::samples`] uniform cells; each draw whose
    /// squared Euclidean distance to the map center is strictly less than
    /// the squared [`ScatterBudget::radius`] is marked `1`. Re-marking an
    /// already-filled cell is a no-op, so the filled count is typically well
    /// below the sample count.
    ///
    /// Returns `Err(GenError::InvalidDensity)` for non-finite or
    /// non-positive densities. A map with a non-positive dimension comes
    /// back empty without consuming any draws.
    pub fn scatter(size: Size, density: f64, rng: &mut impl Rng) -> Result<Self, GenError> {
        let budget = ScatterBudget::new(size, density)?;
        let mut map = Self::empty(size);
        if size.width <= 0 || size.height <= 0 {
            return Ok(map);
        }

        let middle = size.center();
        // Tiny densities push the radius cast toward i64::MAX; the square
        // must saturate rather than overflow. Any in-map distance_sq is
        // below a saturated threshold, matching the unbounded arithmetic
        // of the radius formula.
        let radius_sq = budget.radius.saturating_mul(budget.radius);
        for _ in 0..budget.samples {
            let x = rng.random_range(0..size.width);
            let y = rng.random_range(0..size.height);
            let cell = Coordinate::new(x, y);
            if cell.distance_sq(middle) < radius_sq {
                map.set(cell, 1);
            }
        }
        Ok(map)
    }

    /// Map bounds.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Read a cell's flag; `None` when out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<u8> {
        if !self.size.contains(coord) {
            return None;
        }
        Some(self.cells[self.index(coord)])
    }

    /// Whether the cell holds exactly the filled flag `1`.
    ///
    /// Out-of-bounds cells are not filled; run growth in the extractor
    /// stops on the first non-`1` or out-of-range cell.
    pub fn is_filled(&self, coord: Coordinate) -> bool {
        self.get(coord) == Some(1)
    }

    /// Write a cell's flag. Out-of-bounds writes are dropped.
    pub fn set(&mut self, coord: Coordinate, value: u8) {
        if self.size.contains(coord) {
            let idx = self.index(coord);
            self.cells[idx] = value;
        }
    }

    /// Number of cells currently holding the filled flag.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    /// Render the grid as one line of `0`/`1` digits per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size.area() + self.size.height.max(0) as usize);
        for y in 0..self.size.height {
            for x in 0..self.size.width {
                let filled = self.is_filled(Coordinate::new(x, y));
                out.push(if filled { '1' } else { '0' });
            }
            out.push('\n');
        }
        out
    }

    fn index(&self, coord: Coordinate) -> usize {
        coord.y as usize * self.size.width as usize + coord.x as usize
    }
}
