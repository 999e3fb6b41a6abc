use std::time::{SystemTime, UNIX_EPOCH};

use color_eyre::{eyre::WrapErr, Result};
use log::debug;

use super::SharedRandom;

/// Coarse wall clock used to pick the seed.
pub trait Clock {
    /// # Errors
    ///
    /// Fails if the clock cannot be read.
    fn unix_seconds(&self) -> Result<u64>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> Result<u64> {
        Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .wrap_err("system clock is set before the unix epoch")?
            .as_secs())
    }
}

/// Owns the one random source handed out to every strategy.
///
/// The clock is read on the first `ensure_seeded` only.
#[derive(Debug)]
pub struct Seeder<C = SystemClock> {
    clock:  C,
    source: Option<SharedRandom>,
}

impl Seeder<SystemClock> {
    #[must_use]
    pub const fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl Default for Seeder<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock> Seeder<C> {
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            source: None,
        }
    }

    pub const fn is_seeded(&self) -> bool {
        self.source.is_some()
    }

    /// Seeds the shared source on first use and hands out a handle on it.
    ///
    /// # Errors
    ///
    /// Fails only on the first call, if the clock cannot be read. Nothing is
    /// seeded in that case and a later call tries again.
    pub fn ensure_seeded(&mut self) -> Result<SharedRandom> {
        if let Some(source) = &self.source {
            return Ok(source.clone());
        }

        let seed = self
            .clock
            .unix_seconds()
            .wrap_err("failed to read the clock for the random seed")?;
        debug!("seeding shared random source with {seed}");

        let source = SharedRandom::with_seed(seed);
        self.source = Some(source.clone());
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use color_eyre::eyre::eyre;

    use super::*;
    use crate::random::RandomSource;

    struct CountingClock {
        seconds: u64,
        reads:   Cell<u32>,
    }

    impl CountingClock {
        fn at(seconds: u64) -> Self {
            Self {
                seconds,
                reads: Cell::new(0),
            }
        }
    }

    impl Clock for &CountingClock {
        fn unix_seconds(&self) -> Result<u64> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.seconds)
        }
    }

    struct BrokenClock;

    impl Clock for BrokenClock {
        fn unix_seconds(&self) -> Result<u64> {
            Err(eyre!("no clock here"))
        }
    }

    #[test]
    fn seeds_only_once() {
        let clock = CountingClock::at(1_700_000_000);
        let mut seeder = Seeder::new(&clock);
        assert!(!seeder.is_seeded());

        let first = seeder.ensure_seeded().unwrap();
        let second = seeder.ensure_seeded().unwrap();
        let third = seeder.ensure_seeded().unwrap();

        assert_eq!(clock.reads.get(), 1);
        assert!(seeder.is_seeded());
        assert!(first.shares_with(&second));
        assert!(second.shares_with(&third));
    }

    #[test]
    fn seed_comes_from_the_clock() {
        let clock = CountingClock::at(1234);
        let mut seeded = Seeder::new(&clock).ensure_seeded().unwrap();
        let mut expected = SharedRandom::with_seed(1234);
        for _ in 0..32 {
            assert_eq!(seeded.uniform_below(20), expected.uniform_below(20));
        }
    }

    #[test]
    fn clock_failure_is_reported_and_leaves_seeder_unseeded() {
        let mut seeder = Seeder::new(BrokenClock);
        assert!(seeder.ensure_seeded().is_err());
        assert!(!seeder.is_seeded());
    }

    #[test]
    fn system_clock_is_past_the_epoch() {
        assert!(SystemClock.unix_seconds().unwrap() > 0);
    }
}
