pub mod blacklist;

use log::trace;

use self::blacklist::{DirectionBlacklist, PRIORITY};
use super::Strategy;
use crate::{
    arena::{Direction, Position, Spy},
    random::{RandomSource, SharedRandom},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    position:  Position,
    direction: Direction,
}

/// What the attacker remembers between ticks.
///
/// Starts with nothing recorded and a clear blacklist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackerState {
    previous:  Option<Step>,
    blacklist: DirectionBlacklist,
}

impl AttackerState {
    /// Where the attacker was when it last picked a direction.
    #[must_use]
    pub fn previous_position(&self) -> Option<Position> {
        self.previous.map(|step| step.position)
    }

    #[must_use]
    pub fn previous_direction(&self) -> Option<Direction> {
        self.previous.map(|step| step.direction)
    }

    #[must_use]
    pub const fn blacklist(&self) -> &DirectionBlacklist {
        &self.blacklist
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Blacklists the last direction if it didn't get us anywhere, otherwise
    /// starts over with a clear blacklist.
    ///
    /// Repeated stalls on the same cell keep adding to the blacklist, so
    /// every direction tried from there is skipped until the attacker moves.
    fn observe(&mut self, position: Position) {
        match self.previous {
            Some(step) if position.is_valid() && step.position == position => {
                trace!(
                    "attacker still at {position} after moving {}, avoiding it",
                    step.direction
                );
                self.blacklist.avoid(step.direction);
            }
            _ => self.blacklist.clear(),
        }
    }

    fn record(&mut self, position: Position, direction: Direction) {
        self.previous = Some(Step {
            position,
            direction,
        });
    }
}

/// Random walk that never retries a move that left it in place.
///
/// Directions are tried in [`PRIORITY`] order, each taken on a coin flip,
/// so Right comes up half the time and every later direction half as often
/// as the one before it. Left takes whatever is left over, and when Left
/// itself is blacklisted the attacker stays put.
#[derive(Debug, Clone)]
pub struct Attacker<R = SharedRandom> {
    state:  AttackerState,
    random: R,
}

impl<R: RandomSource> Attacker<R> {
    pub fn new(random: R) -> Self {
        Self {
            state: AttackerState::default(),
            random,
        }
    }

    pub const fn state(&self) -> &AttackerState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub const fn random(&self) -> &R {
        &self.random
    }

    fn pick_direction(&mut self) -> Direction {
        let [rest @ .., last] = PRIORITY;

        for direction in rest {
            if self.state.blacklist.is_avoided(direction) {
                continue;
            }
            if self.random.coin_flip() {
                return direction;
            }
        }

        if self.state.blacklist.is_avoided(last) {
            Direction::Stay
        } else {
            last
        }
    }
}

impl<R: RandomSource> Strategy for Attacker<R> {
    fn get_movement(&mut self, position: Position, _opponent: &Spy) -> Direction {
        self.state.observe(position);

        let direction = self.pick_direction();
        trace!("attacker at {position} moving {direction}");

        self.state.record(position, direction);
        direction
    }
}
