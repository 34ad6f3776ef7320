//! Connect-Four style gravity game

pub mod board;
pub mod frontier;

pub use board::{FourPlay, Slot};
pub use frontier::Frontier;
