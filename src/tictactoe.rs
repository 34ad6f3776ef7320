//! Tic-Tac-Toe game implementation

pub mod board;
pub mod symmetry;

pub use board::{TicTacToe, Tile};
pub use symmetry::{D4Transform, canonicalize};
