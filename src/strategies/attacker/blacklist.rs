use crate::arena::Direction;

/// Every direction the attacker can move in, most likely pick first.
pub const PRIORITY: [Direction; 8] = [
    Direction::Right,
    Direction::UpRight,
    Direction::DownRight,
    Direction::Up,
    Direction::Down,
    Direction::UpLeft,
    Direction::DownLeft,
    Direction::Left,
];

/// Position of `direction` in [`PRIORITY`]. Stay has none.
#[must_use]
pub const fn rank(direction: Direction) -> Option<usize> {
    match direction {
        Direction::Right => Some(0),
        Direction::UpRight => Some(1),
        Direction::DownRight => Some(2),
        Direction::Up => Some(3),
        Direction::Down => Some(4),
        Direction::UpLeft => Some(5),
        Direction::DownLeft => Some(6),
        Direction::Left => Some(7),
        Direction::Stay => None,
    }
}

/// Directions to skip on the next pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionBlacklist {
    avoided: [bool; PRIORITY.len()],
}

impl DirectionBlacklist {
    /// Marks `direction` as avoided. Stay can't be avoided and is ignored.
    pub fn avoid(&mut self, direction: Direction) {
        if let Some(index) = rank(direction) {
            self.avoided[index] = true;
        }
    }

    pub fn clear(&mut self) {
        self.avoided = [false; PRIORITY.len()];
    }

    #[must_use]
    pub const fn is_avoided(&self, direction: Direction) -> bool {
        match rank(direction) {
            Some(index) => self.avoided[index],
            None => false,
        }
    }

    #[must_use]
    pub fn is_clear(&self) -> bool {
        !self.avoided.contains(&true)
    }

    /// Avoided directions in priority order.
    pub fn avoided(&self) -> impl Iterator<Item = Direction> + '_ {
        PRIORITY
            .iter()
            .zip(self.avoided)
            .filter_map(|(direction, avoided)| avoided.then_some(*direction))
    }
}
