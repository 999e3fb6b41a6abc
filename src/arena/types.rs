use std::{fmt, slice::Iter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    DownRight,
    Up,
    Down,
    UpLeft,
    DownLeft,
    Left,
    Stay,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 9] = [
            Direction::Right,
            Direction::UpRight,
            Direction::DownRight,
            Direction::Up,
            Direction::Down,
            Direction::UpLeft,
            Direction::DownLeft,
            Direction::Left,
            Direction::Stay,
        ];
        DIRECTIONS.iter()
    }

    #[must_use]
    pub const fn is_stay(self) -> bool {
        matches!(self, Direction::Stay)
    }

    /// Unit step taken by this direction. Up is towards positive y.
    #[must_use]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::Right => (1, 0),
            Direction::UpRight => (1, 1),
            Direction::DownRight => (1, -1),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::UpLeft => (-1, 1),
            Direction::DownLeft => (-1, -1),
            Direction::Left => (-1, 0),
            Direction::Stay => (0, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Right => "Right",
                Direction::UpRight => "UpRight",
                Direction::DownRight => "DownRight",
                Direction::Up => "Up",
                Direction::Down => "Down",
                Direction::UpLeft => "UpLeft",
                Direction::DownLeft => "DownLeft",
                Direction::Left => "Left",
                Direction::Stay => "Stay",
            }
        )
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Marks "no position recorded". Never produced by `neighbour`.
    pub const INVALID: Position = Position {
        x: i64::MAX,
        y: i64::MAX,
    };

    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !(self.x == Self::INVALID.x && self.y == Self::INVALID.y)
    }

    /// The cell reached by moving one step in `direction`.
    ///
    /// Saturates at the edges of the `i64` range instead of wrapping.
    #[must_use]
    pub const fn neighbour(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_valid() {
            write!(f, "({}, {})", self.x, self.y)
        } else {
            write!(f, "(invalid)")
        }
    }
}
