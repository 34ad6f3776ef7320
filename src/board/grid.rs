//! Rectangular cell storage

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Cell;

/// Row-major grid of cells. Row 0 is the top row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize) -> Self {
        Grid {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    pub(crate) fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Grid {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Cell at (row, column), `None` when out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if self.contains(row, column) {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Overwrite a cell. Callers bounds-check first.
    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) {
        debug_assert!(self.contains(row, column));
        self.cells[row * self.columns + column] = cell;
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Render the grid one row per line, lower-casing the pieces listed in
    /// `highlight`.
    pub fn render(&self, highlight: &[(usize, usize)]) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows);
        for row in 0..self.rows {
            for column in 0..self.columns {
                let c = self.cells[row * self.columns + column].to_char();
                if highlight.contains(&(row, column)) {
                    out.push(c.to_ascii_lowercase());
                } else {
                    out.push(c);
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&[]))
    }
}
