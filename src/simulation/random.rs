//! Injectable uniform random source
//!
//! Every random draw in the simulation (spawn colors and altitudes, bounce
//! perturbations, post-impact angular velocities) goes through
//! [`UniformRandom`], so tests can substitute a deterministic stream and
//! assert exact post-bounce velocities.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait UniformRandom {
    /// Uniform draw in [min, max)
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

/// Production source backed by `StdRng`, seeded from OS entropy per run
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed variant for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandom for EntropyRandom {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        min + self.rng.gen::<f32>() * (max - min)
    }
}
