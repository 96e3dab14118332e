//! Deterministic random number generation.
//!
//! Wraps PCG (Permuted Congruential Generator) behind an explicit handle that
//! is threaded through population generation and resampling. There is no
//! global RNG anywhere in the crate.
//!
//! # Reproducibility Guarantee
//!
//! Given the same master seed, all random number sequences will be
//! bitwise-identical across runs and platforms.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone)]
pub struct SimRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SimRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            rng: Pcg64::seed_from_u64(master_seed),
        }
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate a random f64 in [min, max).
    ///
    /// The upper bound is never returned, even when `max - min` is tiny
    /// relative to `min`. An empty or inverted range yields `min`.
    pub fn gen_range_f64(&mut self, min: f64, max: f64) -> f64 {
        debug_assert!(min <= max, "Invalid range: min > max");
        if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Pick an index uniformly from `[0, len)`.
    ///
    /// Returns `None` when `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.gen_range(0..len))
    }

    /// Generate a standard normal sample using Box-Muller transform.
    pub fn gen_standard_normal(&mut self) -> f64 {
        let u1 = self.gen_f64();
        let u2 = self.gen_f64();

        // Avoid log(0)
        let u1 = if u1 < f64::EPSILON { f64::EPSILON } else { u1 };

        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Generate a normal sample with given mean and std.
    pub fn gen_normal(&mut self, mean: f64, std: f64) -> f64 {
        mean + std * self.gen_standard_normal()
    }

    /// Generate an exponential sample with the given scale (mean = scale).
    ///
    /// Inverse transform on `1 - u`, which lies in (0, 1], so the logarithm
    /// is always finite.
    pub fn gen_exponential(&mut self, scale: f64) -> f64 {
        let u = self.gen_f64();
        -scale * (1.0 - u).ln()
    }
}
