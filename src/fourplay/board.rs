//! Gravity board: pieces drop to the lowest free row of a column

use std::fmt;

use serde::{Deserialize, Serialize};

use super::frontier::Frontier;
use crate::{
    Error, Result,
    board::{Board, Cell, GameOutcome, Grid, LineAnalyzer, Player, Scenario},
    types::CanonicalKey,
};

/// A drop into a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub column: usize,
}

impl Slot {
    pub const fn new(column: usize) -> Self {
        Slot { column }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPlay {
    grid: Grid,
    frontier: Frontier,
    mover: Player,
    win_length: usize,
    outcome: Option<GameOutcome>,
}

impl FourPlay {
    pub const ROWS: usize = 6;
    pub const COLUMNS: usize = 7;
    pub const WIN_LENGTH: usize = 4;

    /// Empty 6x7 board, four in a row wins, X to move
    pub fn new() -> Self {
        FourPlay {
            grid: Grid::new(Self::ROWS, Self::COLUMNS),
            frontier: Frontier::empty(Self::ROWS, Self::COLUMNS),
            mover: Player::X,
            win_length: Self::WIN_LENGTH,
            outcome: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for an empty grid or a win
    /// length longer than both dimensions.
    pub fn with_size(rows: usize, columns: usize, win_length: usize) -> Result<Self> {
        if rows == 0 || columns == 0 || win_length == 0 || win_length > rows.max(columns) {
            return Err(Error::InvalidConfiguration {
                message: format!("win length {win_length} does not fit a {rows}x{columns} board"),
            });
        }
        Ok(FourPlay {
            grid: Grid::new(rows, columns),
            frontier: Frontier::empty(rows, columns),
            mover: Player::X,
            win_length,
            outcome: None,
        })
    }

    /// Build a board from a literal scenario with an explicit side to move.
    /// Returns the board and the marked column, if the scenario has one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScenario`] if the rows do not parse or a piece
    /// floats above an empty cell.
    pub fn from_scenario<S: AsRef<str>>(rows: &[S], mover: Player) -> Result<(Self, Option<Slot>)> {
        let Scenario { grid, marker } = Scenario::parse(rows)?;
        for column in 0..grid.columns() {
            for row in 1..grid.rows() {
                let above = grid.get(row - 1, column);
                if above != Some(Cell::Empty) && grid.get(row, column) == Some(Cell::Empty) {
                    return Err(Error::InvalidScenario {
                        row: row - 1,
                        line: rows[row - 1].as_ref().to_string(),
                        reason: format!("piece in column {column} is not supported"),
                    });
                }
            }
        }

        let win_length = Self::WIN_LENGTH.min(grid.rows().max(grid.columns()));
        let mut board = FourPlay {
            frontier: Frontier::from_grid(&grid),
            grid,
            mover,
            win_length,
            outcome: None,
        };
        board.outcome = board.evaluate();
        Ok((board, marker.map(|(_, column)| Slot::new(column))))
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    fn evaluate(&self) -> Option<GameOutcome> {
        if let Some(winner) = LineAnalyzer::find_winner(&self.grid, self.win_length) {
            Some(GameOutcome::Win(winner))
        } else if self.frontier.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl Default for FourPlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for FourPlay {
    type Move = Slot;

    const SEARCH_DEPTH_LIMIT: Option<usize> = Some(8);

    fn mover(&self) -> Player {
        self.mover
    }

    fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    fn legal_moves(&self) -> Vec<Slot> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.frontier.open_columns().map(Slot::new).collect()
    }

    fn apply(&mut self, slot: Slot) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::illegal_move(slot, "game is already over"));
        }
        if slot.column >= self.grid.columns() {
            return Err(Error::illegal_move(slot, "outside the board"));
        }
        let Some(row) = self.frontier.row(slot.column) else {
            return Err(Error::illegal_move(slot, "column is full"));
        };

        self.grid.set(row, slot.column, self.mover.to_cell());
        self.frontier.raise(slot.column);
        self.outcome =
            match LineAnalyzer::connected_through(&self.grid, row, slot.column, self.win_length) {
                Some(winner) => Some(GameOutcome::Win(winner)),
                None if self.frontier.is_full() => Some(GameOutcome::Draw),
                None => None,
            };
        self.mover = self.mover.opponent();
        Ok(())
    }

    fn undo(&mut self, slot: Slot) -> Result<()> {
        let previous = self.mover.opponent();
        let top = self.frontier.row(slot.column).map_or(0, |row| row + 1);
        if self.grid.get(top, slot.column) != Some(previous.to_cell()) {
            return Err(Error::illegal_move(
                slot,
                format!("no {previous} piece on top of the column"),
            ));
        }
        self.grid.set(top, slot.column, Cell::Empty);
        self.frontier.lower(slot.column);
        self.mover = previous;
        self.outcome = self.evaluate();
        Ok(())
    }

    fn transposition_key(&self) -> CanonicalKey {
        CanonicalKey::encode(self.grid.cells(), self.grid.columns(), self.mover)
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl fmt::Display for FourPlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = LineAnalyzer::winning_line(&self.grid, self.win_length).unwrap_or_default();
        write!(f, "{}", self.grid.render(&line))?;
        for column in 0..self.grid.columns() {
            write!(f, "{}", column % 10)?;
        }
        writeln!(f)
    }
}
