use color_eyre::Result;

use crate::{
    random::{Clock, Seeder, SharedRandom},
    strategies::{Attacker, Defender},
};

/// One attacker and one defender drawing from the same seeded source.
#[derive(Debug, Clone)]
pub struct Lineup {
    pub attacker: Attacker<SharedRandom>,
    pub defender: Defender<SharedRandom>,
}

impl Lineup {
    /// Seeds from the system clock.
    ///
    /// # Errors
    ///
    /// Fails if the system clock can't be read.
    pub fn new() -> Result<Self> {
        Self::assemble(&mut Seeder::system())
    }

    /// Builds both strategies around `seeder`'s source, seeding it first if
    /// nobody has yet.
    ///
    /// # Errors
    ///
    /// Fails if the seeder has to read its clock and can't.
    pub fn assemble<C: Clock>(seeder: &mut Seeder<C>) -> Result<Self> {
        let random = seeder.ensure_seeded()?;
        Ok(Self {
            attacker: Attacker::new(random.clone()),
            defender: Defender::new(random),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{Position, Spy};
    use crate::strategies::Strategy;

    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn unix_seconds(&self) -> Result<u64> {
            Ok(self.0)
        }
    }

    #[test]
    fn strategies_share_one_source() {
        let lineup = Lineup::assemble(&mut Seeder::new(FixedClock(5))).unwrap();
        assert!(lineup.attacker.random().shares_with(lineup.defender.random()));
    }

    #[test]
    fn lineups_from_one_seeder_share_a_source() {
        let mut seeder = Seeder::new(FixedClock(5));
        let first = Lineup::assemble(&mut seeder).unwrap();
        let second = Lineup::assemble(&mut seeder).unwrap();
        assert!(first.attacker.random().shares_with(second.attacker.random()));
    }

    #[test]
    fn same_clock_same_game() {
        let play = |seconds| {
            let mut lineup =
                Lineup::assemble(&mut Seeder::new(FixedClock(seconds))).unwrap();
            (0..50)
                .map(|tick| {
                    (
                        lineup
                            .attacker
                            .get_movement(Position::new(tick, 0), &Spy::blind()),
                        lineup
                            .defender
                            .get_movement(Position::new(0, tick), &Spy::blind()),
                    )
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(play(77), play(77));
    }

    #[test]
    fn system_lineup_assembles() {
        assert!(Lineup::new().is_ok());
    }
}
