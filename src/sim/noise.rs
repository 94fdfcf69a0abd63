//! Smooth deterministic noise for the tremble effect
//!
//! The tremble needs a value that wanders continuously from tick to tick;
//! fresh uniform random every tick reads as jitter, not shaking. This is
//! 1D value noise: a seeded lattice of random samples with a smoothstep
//! fade between neighbors, periodic every [`LATTICE_SIZE`] lattice points.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::lerp;

/// Lattice period; coordinates wrap past this many whole steps
pub const LATTICE_SIZE: usize = 256;

/// Seeded 1D value noise, output in [0, 1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueNoise {
    lattice: Vec<f32>,
}

impl ValueNoise {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let lattice = (0..LATTICE_SIZE).map(|_| rng.random()).collect();
        Self { lattice }
    }

    /// Sample the noise at coordinate `t`
    pub fn sample(&self, t: f32) -> f32 {
        let cell = t.floor();
        let frac = t - cell;
        let i = (cell as i64).rem_euclid(LATTICE_SIZE as i64) as usize;
        let a = self.lattice[i];
        let b = self.lattice[(i + 1) % LATTICE_SIZE];
        // Smoothstep fade keeps the slope continuous at lattice points
        let u = frac * frac * (3.0 - 2.0 * frac);
        lerp(a, b, u)
    }
}
