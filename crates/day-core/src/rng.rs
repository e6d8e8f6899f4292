//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The run owns one root `SimRng` seeded from `SimConfig::seed`.  Every
//! stochastic model (e.g. a need interval) receives its own child stream:
//!
//!   child_seed = root.next_u64() XOR (stream * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream numbers uniformly across the seed space.
//! Models never share RNG state, so adding a model does not perturb the draws
//! of the others, and the same seed always reproduces the same day.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Single-threaded by construction: the scheduler owns every model, and each
/// model owns its own `SimRng`.
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` for an independent stream.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ stream.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Draw one value from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }
}
