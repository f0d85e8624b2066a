//! Randomness boundary: placement and targeting draw from a `RandomSource`
//! so games can be replayed from a seed or scripted in tests.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ship::Orientation;

/// Uniform integers and orientation choices.
pub trait RandomSource {
    /// Uniform integer in `0..upper`. `upper` must be non-zero.
    fn below(&mut self, upper: usize) -> usize;

    /// Uniform choice between the two orientations.
    fn orientation(&mut self) -> Orientation {
        if self.below(2) == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// `SmallRng` backed source.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Reproducible source; the same seed replays the same game.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self {
            rng: SmallRng::from_rng(&mut seed_rng),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    fn orientation(&mut self) -> Orientation {
        if self.rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Replays a fixed sequence of values, each reduced modulo the requested
/// bound. Once exhausted it keeps returning zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, upper: usize) -> usize {
        self.values.pop_front().unwrap_or(0) % upper
    }
}
