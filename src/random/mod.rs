mod seeding;

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use rand::{rngs::StdRng, Rng, SeedableRng};
pub use seeding::{Clock, Seeder, SystemClock};

/// Where strategies get their randomness from.
pub trait RandomSource {
    /// A fair coin. `true` is heads.
    fn coin_flip(&mut self) -> bool;

    /// Uniform integer in `0..bound`. A `bound` of zero is treated as one.
    fn uniform_below(&mut self, bound: u32) -> u32;
}

/// Handle on a single generator shared by every strategy that holds a clone.
///
/// Draws are taken in call order across all holders, so the sequence any
/// one strategy sees depends on how calls interleave.
#[derive(Debug, Clone)]
pub struct SharedRandom {
    rng: Rc<RefCell<StdRng>>,
}

impl SharedRandom {
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rc::new(RefCell::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Whether `self` and `other` draw from the same generator.
    #[must_use]
    pub fn shares_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.rng, &other.rng)
    }
}

impl RandomSource for SharedRandom {
    fn coin_flip(&mut self) -> bool {
        self.rng.borrow_mut().gen()
    }

    fn uniform_below(&mut self, bound: u32) -> u32 {
        self.rng.borrow_mut().gen_range(0..bound.max(1))
    }
}

/// Replays a fixed script of draws, for tests and deterministic replays.
///
/// Coin flips and integers are consumed from separate queues. Once a queue
/// runs dry it keeps answering tails (or zero).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    flips:  VecDeque<bool>,
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_flips(flips: impl IntoIterator<Item = bool>) -> Self {
        Self::new().then_flips(flips)
    }

    #[must_use]
    pub fn with_values(values: impl IntoIterator<Item = u32>) -> Self {
        Self::new().then_values(values)
    }

    #[must_use]
    pub fn then_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    #[must_use]
    pub fn then_values(
        mut self,
        values: impl IntoIterator<Item = u32>,
    ) -> Self {
        self.values.extend(values);
        self
    }

    #[must_use]
    pub fn remaining_flips(&self) -> usize {
        self.flips.len()
    }

    #[must_use]
    pub fn remaining_values(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.flips.is_empty() && self.values.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }

    fn uniform_below(&mut self, bound: u32) -> u32 {
        self.values.pop_front().unwrap_or(0) % bound.max(1)
    }
}
