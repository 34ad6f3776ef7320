//! Board abstraction shared by every game and agent

pub mod grid;
pub mod lines;
pub mod scenario;

use std::{fmt, hash::Hash};

use serde::{Deserialize, Serialize};

pub use grid::Grid;
pub use lines::LineAnalyzer;
pub use scenario::Scenario;

use crate::{Result, types::CanonicalKey};

/// A cell on a game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A player in the game. X always moves first from an empty grid and is the
/// fixed perspective for [`GameOutcome::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }

    /// +1.0 for X, -1.0 for O
    pub fn sign(self) -> f64 {
        match self {
            Player::X => 1.0,
            Player::O => -1.0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Score from X's perspective: +1 for an X win, -1 for an O win, 0 for a draw.
    pub fn score(self) -> f64 {
        match self {
            GameOutcome::Win(player) => player.sign(),
            GameOutcome::Draw => 0.0,
        }
    }

    /// Score from the given player's perspective.
    pub fn score_for(self, player: Player) -> f64 {
        self.score() * player.sign()
    }

    /// Swap the winner perspective (X <-> O). Useful when mirroring games.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// A two-player grid game position.
///
/// Implementations keep `outcome()` consistent with the cells after every
/// `apply`/`undo`: it is `Some` exactly when a line of the game's win length
/// exists or no legal move remains.
pub trait Board: Clone + Default + fmt::Debug + fmt::Display + Send {
    /// A single move. Compared by position only.
    type Move: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + 'static;

    /// Depth cap used by exhaustive search when no explicit limit is configured.
    const SEARCH_DEPTH_LIMIT: Option<usize>;

    /// Side to move next
    fn mover(&self) -> Player;

    fn outcome(&self) -> Option<GameOutcome>;

    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Legal moves in deterministic order; empty once the game is over.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Place a piece for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the move is not playable. The
    /// board is left untouched in that case.
    fn apply(&mut self, mv: Self::Move) -> Result<()>;

    /// Reverse the most recent `apply` of `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if `mv` does not name a piece
    /// the previous mover placed.
    fn undo(&mut self, mv: Self::Move) -> Result<()>;

    /// Successor position, leaving `self` intact.
    fn clone_with(&self, mv: Self::Move) -> Result<Self> {
        let mut next = self.clone();
        next.apply(mv)?;
        Ok(next)
    }

    /// Key under which caches store this position.
    fn transposition_key(&self) -> CanonicalKey;

    fn grid(&self) -> &Grid;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_scores_from_x_perspective() {
        assert_eq!(GameOutcome::Win(Player::X).score(), 1.0);
        assert_eq!(GameOutcome::Win(Player::O).score(), -1.0);
        assert_eq!(GameOutcome::Draw.score(), 0.0);
    }

    #[test]
    fn test_score_for_negates_for_o() {
        let outcome = GameOutcome::Win(Player::X);
        assert_eq!(outcome.score_for(Player::X), 1.0);
        assert_eq!(outcome.score_for(Player::O), -1.0);
        assert_eq!(GameOutcome::Draw.score_for(Player::O), 0.0);
    }

    #[test]
    fn test_winner() {
        assert_eq!(GameOutcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_cell_char_round_trip() {
        for cell in [Cell::Empty, Cell::X, Cell::O] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('#'), None);
    }
}
