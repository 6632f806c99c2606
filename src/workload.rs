//! Seeded random workload generation.
//!
//! Produces burst-time and priority lists in the same raw form callers
//! submit, for demos and invariant checks. A fixed seed always yields the
//! same workload.

use rand::prelude::*;

/// Generates `count` burst times uniformly in `1..=max_burst`.
///
/// `max_burst` values below 1 are treated as 1.
pub fn random_burst_times(count: usize, max_burst: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_burst = max_burst.max(1);
    (0..count).map(|_| rng.random_range(1..=max_burst)).collect()
}

/// Generates `count` priorities uniformly in `0..levels`.
///
/// `levels` below 1 are treated as 1 (every priority is 0).
pub fn random_priorities(count: usize, levels: i64, seed: u64) -> Vec<i64> {
    // Offset so bursts and priorities from the same seed are uncorrelated.
    let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    let levels = levels.max(1);
    (0..count).map(|_| rng.random_range(0..levels)).collect()
}
