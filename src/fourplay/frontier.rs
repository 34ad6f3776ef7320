//! Per-column drop positions for the gravity game

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Grid};

/// For every column, the lowest empty row (rows count down from the top),
/// or `None` once the column is full. Derived from the grid and updated on
/// every drop and take-back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frontier(Vec<Option<usize>>);

impl Frontier {
    /// Frontier of an empty grid
    pub fn empty(rows: usize, columns: usize) -> Self {
        Frontier(vec![rows.checked_sub(1); columns])
    }

    /// Rebuild from a grid whose pieces all rest on the floor or on another
    /// piece.
    pub fn from_grid(grid: &Grid) -> Self {
        let rows = grid.rows();
        Frontier(
            (0..grid.columns())
                .map(|column| {
                    (0..rows)
                        .rev()
                        .find(|&row| grid.get(row, column) == Some(Cell::Empty))
                })
                .collect(),
        )
    }

    /// Row a piece dropped into `column` lands on
    pub fn row(&self, column: usize) -> Option<usize> {
        self.0.get(column).copied().flatten()
    }

    pub fn columns(&self) -> usize {
        self.0.len()
    }

    /// Columns that still accept a piece, left to right
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(column, row)| row.map(|_| column))
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Record a piece landing on the frontier of `column`.
    pub(crate) fn raise(&mut self, column: usize) {
        if let Some(slot) = self.0.get_mut(column) {
            *slot = slot.and_then(|row| row.checked_sub(1));
        }
    }

    /// Record the top piece of `column` being removed.
    pub(crate) fn lower(&mut self, column: usize) {
        if let Some(slot) = self.0.get_mut(column) {
            *slot = Some(slot.map_or(0, |row| row + 1));
        }
    }

    /// Whether every column points at the lowest empty cell of `grid`.
    pub fn is_consistent_with(&self, grid: &Grid) -> bool {
        *self == Self::from_grid(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frontier_points_at_bottom_row() {
        let frontier = Frontier::empty(6, 7);
        assert_eq!(frontier.row(0), Some(5));
        assert_eq!(frontier.open_columns().count(), 7);
        assert_eq!(frontier, Frontier::from_grid(&Grid::new(6, 7)));
    }

    #[test]
    fn test_raise_until_full_then_lower() {
        let mut frontier = Frontier::empty(2, 1);
        frontier.raise(0);
        assert_eq!(frontier.row(0), Some(0));
        frontier.raise(0);
        assert_eq!(frontier.row(0), None);
        assert!(frontier.is_full());
        frontier.lower(0);
        assert_eq!(frontier.row(0), Some(0));
        frontier.lower(0);
        assert_eq!(frontier.row(0), Some(1));
    }

    #[test]
    fn test_out_of_range_column() {
        let frontier = Frontier::empty(6, 7);
        assert_eq!(frontier.row(7), None);
    }
}
