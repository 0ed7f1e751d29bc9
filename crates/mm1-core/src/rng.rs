//! Exponential variate sources.
//!
//! # Determinism strategy
//!
//! Each engine owns its own source.  There is no process-wide generator, so
//! two engines never disturb each other's streams, and a seeded source
//! reseeded at the start of a run replays exactly the same draws.
//!
//! Engines are generic over [`VariateSource`] so tests can substitute a
//! scripted source with hand-picked values.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Exp1;

/// An infinite supply of independent exponential samples.
pub trait VariateSource {
    /// Draw one sample from an exponential distribution with the given mean.
    ///
    /// Callers guarantee `mean` is finite and positive.
    fn exponential(&mut self, mean: f64) -> f64;

    /// Re-establish a reproducible state for all subsequent draws.
    fn seed(&mut self, seed: u64);
}

// ── ExpSource ─────────────────────────────────────────────────────────────────

/// `SmallRng`-backed source sampling the unit exponential and scaling it.
///
/// The type is `!Sync` in spirit: hand each thread its own engine.
pub struct ExpSource(SmallRng);

impl ExpSource {
    /// Seed deterministically.
    pub fn seeded(seed: u64) -> Self {
        ExpSource(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (non-reproducible).
    pub fn from_entropy() -> Self {
        ExpSource(SmallRng::from_entropy())
    }
}

impl Default for ExpSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl VariateSource for ExpSource {
    #[inline]
    fn exponential(&mut self, mean: f64) -> f64 {
        let unit: f64 = self.0.sample(Exp1);
        unit * mean
    }

    fn seed(&mut self, seed: u64) {
        self.0 = SmallRng::seed_from_u64(seed);
    }
}

impl<S: VariateSource + ?Sized> VariateSource for &mut S {
    #[inline]
    fn exponential(&mut self, mean: f64) -> f64 {
        (**self).exponential(mean)
    }

    fn seed(&mut self, seed: u64) {
        (**self).seed(seed)
    }
}
