use super::Strategy;
use crate::{
    arena::{Direction, Position, Spy},
    random::{RandomSource, SharedRandom},
};

/// Mostly stands still, stepping up or down once in a while.
///
/// Being blocked doesn't matter to it, so it keeps no state.
#[derive(Debug, Clone)]
pub struct Defender<R = SharedRandom> {
    random: R,
}

impl<R: RandomSource> Defender<R> {
    /// One draw in `0..ODDS` per tick: 0 is Up, 1 is Down, the rest Stay.
    pub const ODDS: u32 = 20;

    pub const fn new(random: R) -> Self {
        Self { random }
    }

    pub const fn random(&self) -> &R {
        &self.random
    }
}

impl<R: RandomSource> Strategy for Defender<R> {
    fn get_movement(&mut self, _position: Position, _opponent: &Spy) -> Direction {
        match self.random.uniform_below(Self::ODDS) {
            0 => Direction::Up,
            1 => Direction::Down,
            _ => Direction::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn maps_draws_to_directions() {
        let mut defender =
            Defender::new(ScriptedRandom::with_values([0, 1, 2, 19, 7]));
        let here = Position::new(0, 0);
        let moves: Vec<_> = (0..5)
            .map(|_| defender.get_movement(here, &Spy::blind()))
            .collect();
        assert_eq!(
            moves,
            vec![
                Direction::Up,
                Direction::Down,
                Direction::Stay,
                Direction::Stay,
                Direction::Stay,
            ]
        );
    }

    #[test]
    fn ignores_position_and_opponent() {
        let script = [1, 0, 5];
        let mut a = Defender::new(ScriptedRandom::with_values(script));
        let mut b = Defender::new(ScriptedRandom::with_values(script));
        for tick in 0..3 {
            assert_eq!(
                a.get_movement(Position::new(tick, 0), &Spy::blind()),
                b.get_movement(
                    Position::INVALID,
                    &Spy::new(Position::new(9, tick))
                ),
            );
        }
    }

    #[test]
    fn draws_once_per_tick() {
        let mut defender = Defender::new(ScriptedRandom::with_values([3, 4]));
        defender.get_movement(Position::new(0, 0), &Spy::blind());
        assert_eq!(defender.random().remaining_values(), 1);
    }
}
