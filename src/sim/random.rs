//! Injectable randomness for spawn decisions
//!
//! The simulation never reaches for a global RNG. Callers hand a
//! [`RandomSource`] to every tick, so a seeded PCG stream and a scripted
//! replay sequence are interchangeable.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;

    /// Uniform sample in `[min, max)`
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// `true` with the given probability
    fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }

    /// Uniform index in `0..len`; an empty range yields 0
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f32() * len as f32) as usize).min(len.saturating_sub(1))
    }
}

impl RandomSource for Pcg32 {
    fn next_f32(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded PCG stream for a run
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed sequence of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ReplayRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ReplayRandom {
    /// Samples are clamped into `[0, 1)`; an empty sequence always yields 0
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of samples drawn so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ReplayRandom {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
