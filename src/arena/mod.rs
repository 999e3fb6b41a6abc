pub mod spy;
pub mod types;

pub use spy::Spy;
pub use types::{Direction, Position};
