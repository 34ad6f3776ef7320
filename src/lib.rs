//! Adversarial grid games and the agents that play them
//!
//! This crate provides:
//! - Tic-Tac-Toe on a square board with symmetry-folded position keys
//! - Fourplay, a Connect-Four style gravity game
//! - Random, negamax, Monte Carlo tree search and TD value-function agents
//! - A turn-taking game loop, series statistics and snapshot persistence

pub mod adapters;
pub mod agents;
pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod fourplay;
pub mod game;
pub mod ports;
pub mod series;
pub mod tictactoe;
pub mod transposition;
pub mod types;

pub use board::{Board, GameOutcome, Player};
pub use error::{Error, Result};
pub use types::CanonicalKey;
