//! Random sources for tree building.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The draws the builder and the noise image need.
///
/// Implemented for every [`rand::Rng`]; tests can supply a
/// [`ScriptedSource`] to control each draw.
pub trait RandomSource {
    /// A uniform draw in [0, 1).
    fn unit(&mut self) -> f64;

    /// A uniform index in [0, n). `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// A reproducible generator, stable across platforms.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays a fixed list of unit draws, cycling when exhausted.
///
/// `below(n)` consumes one unit draw `u` and returns `floor(u * n)`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            pos: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        value
    }

    fn below(&mut self, n: usize) -> usize {
        ((self.unit() * n as f64) as usize).min(n.saturating_sub(1))
    }
}
