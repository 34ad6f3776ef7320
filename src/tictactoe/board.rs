//! Tic-Tac-Toe board state and move rules

use std::fmt;

use serde::{Deserialize, Serialize};

use super::symmetry::{self, D4Transform};
use crate::{
    Error, Result,
    board::{Board, Cell, GameOutcome, Grid, LineAnalyzer, Player, Scenario},
    types::CanonicalKey,
};

/// A move on a Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    pub row: usize,
    pub column: usize,
}

impl Tile {
    pub const fn new(row: usize, column: usize) -> Self {
        Tile { row, column }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Square board where any empty cell is playable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    grid: Grid,
    mover: Player,
    win_length: usize,
    outcome: Option<GameOutcome>,
}

impl TicTacToe {
    pub const SIZE: usize = 3;
    pub const WIN_LENGTH: usize = 3;

    /// Create a new empty 3x3 board with X to move
    pub fn new() -> Self {
        TicTacToe {
            grid: Grid::new(Self::SIZE, Self::SIZE),
            mover: Player::X,
            win_length: Self::WIN_LENGTH,
            outcome: None,
        }
    }

    /// Create an empty `size`×`size` board won by `win_length` in a row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] unless `1 <= win_length <= size`.
    pub fn with_size(size: usize, win_length: usize) -> Result<Self> {
        if win_length == 0 || win_length > size {
            return Err(Error::InvalidConfiguration {
                message: format!("win length {win_length} does not fit a {size}x{size} board"),
            });
        }
        Ok(TicTacToe {
            grid: Grid::new(size, size),
            mover: Player::X,
            win_length,
            outcome: None,
        })
    }

    /// Build a board from a literal scenario with an explicit side to move.
    /// Returns the board and the marked tile, if the scenario has one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScenario`] if the rows do not parse or do not
    /// form a square.
    pub fn from_scenario<S: AsRef<str>>(rows: &[S], mover: Player) -> Result<(Self, Option<Tile>)> {
        let Scenario { grid, marker } = Scenario::parse(rows)?;
        if !grid.is_square() {
            return Err(Error::InvalidScenario {
                row: 0,
                line: rows[0].as_ref().to_string(),
                reason: format!("{}x{} is not square", grid.rows(), grid.columns()),
            });
        }
        let win_length = Self::WIN_LENGTH.min(grid.rows());
        let mut board = TicTacToe {
            grid,
            mover,
            win_length,
            outcome: None,
        };
        board.outcome = board.evaluate();
        Ok((board, marker.map(|(row, column)| Tile::new(row, column))))
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn cell(&self, tile: Tile) -> Option<Cell> {
        self.grid.get(tile.row, tile.column)
    }

    /// The board under each of the 8 D4 transforms, identity first.
    pub fn symmetric_variants(&self) -> Vec<TicTacToe> {
        D4Transform::all()
            .iter()
            .map(|t| TicTacToe {
                grid: t.apply_to_grid(&self.grid),
                ..self.clone()
            })
            .collect()
    }

    fn evaluate(&self) -> Option<GameOutcome> {
        if let Some(winner) = LineAnalyzer::find_winner(&self.grid, self.win_length) {
            Some(GameOutcome::Win(winner))
        } else if self.grid.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for TicTacToe {
    type Move = Tile;

    const SEARCH_DEPTH_LIMIT: Option<usize> = None;

    fn mover(&self) -> Player {
        self.mover
    }

    fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    fn legal_moves(&self) -> Vec<Tile> {
        if self.is_terminal() {
            return Vec::new();
        }
        let size = self.grid.columns();
        self.grid
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| Tile::new(idx / size, idx % size))
            .collect()
    }

    fn apply(&mut self, tile: Tile) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::illegal_move(tile, "game is already over"));
        }
        match self.cell(tile) {
            None => return Err(Error::illegal_move(tile, "outside the board")),
            Some(Cell::Empty) => {}
            Some(_) => return Err(Error::illegal_move(tile, "cell is already occupied")),
        }

        self.grid.set(tile.row, tile.column, self.mover.to_cell());
        self.outcome = match LineAnalyzer::connected_through(
            &self.grid,
            tile.row,
            tile.column,
            self.win_length,
        ) {
            Some(winner) => Some(GameOutcome::Win(winner)),
            None if self.grid.is_full() => Some(GameOutcome::Draw),
            None => None,
        };
        self.mover = self.mover.opponent();
        Ok(())
    }

    fn undo(&mut self, tile: Tile) -> Result<()> {
        let previous = self.mover.opponent();
        if self.cell(tile) != Some(previous.to_cell()) {
            return Err(Error::illegal_move(
                tile,
                format!("no {previous} piece to take back"),
            ));
        }
        self.grid.set(tile.row, tile.column, Cell::Empty);
        self.mover = previous;
        self.outcome = self.evaluate();
        Ok(())
    }

    fn transposition_key(&self) -> CanonicalKey {
        symmetry::fold(&self.grid, self.mover)
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = LineAnalyzer::winning_line(&self.grid, self.win_length).unwrap_or_default();
        write!(f, "{}", self.grid.render(&line))
    }
}
