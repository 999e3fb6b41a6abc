pub mod attacker;
pub mod defender;

pub use attacker::{Attacker, AttackerState};
pub use defender::Defender;

use crate::arena::{Direction, Position, Spy};

pub trait Strategy {
    /// Picks the direction to move in this tick.
    ///
    /// Called once per tick with the agent's current position. The caller
    /// applies the move, and must leave the agent in place if the move is
    /// not allowed.
    fn get_movement(&mut self, position: Position, opponent: &Spy) -> Direction;
}
