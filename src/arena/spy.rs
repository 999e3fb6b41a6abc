use super::types::Position;

/// Read-only view of the opposing agent.
///
/// Handed to every strategy each tick. The strategies in this crate know
/// nothing about the grid, so they have no use for it and never look.
#[derive(Debug, Clone, Copy)]
pub struct Spy {
    target: Position,
}

impl Spy {
    #[must_use]
    pub const fn new(target: Position) -> Self {
        Self { target }
    }

    /// A spy that has seen nothing yet.
    #[must_use]
    pub const fn blind() -> Self {
        Self::new(Position::INVALID)
    }

    #[must_use]
    pub const fn locate(&self) -> Position {
        self.target
    }
}

impl Default for Spy {
    fn default() -> Self {
        Self::blind()
    }
}
