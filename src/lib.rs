#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::module_name_repetitions, // Attacker in strategies::attacker reads fine
)]
pub mod arena;
pub mod lineup;
pub mod random;
pub mod strategies;
