//! Benchmark fixtures for the plat layout generator.
//!
//! Provides pre-scattered occupancy maps so extractor benchmarks measure
//! extraction alone, not the scatter pass.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plat_core::Size;
use plat_gen::OccupancyMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Reference map: 100x100 at density 0.8, fixed seed.
pub fn reference_map(seed: u64) -> OccupancyMap {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    OccupancyMap::scatter(Size::new(100, 100), 0.8, &mut rng)
        .expect("reference density is valid")
}

/// Stress map: 316x316 (~100K cells) at density 0.8, fixed seed.
pub fn stress_map(seed: u64) -> OccupancyMap {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    OccupancyMap::scatter(Size::new(316, 316), 0.8, &mut rng)
        .expect("stress density is valid")
}
