//! Line analysis for grid games of any size and win length

use super::{Grid, Player};

/// Axis directions as (row step, column step): horizontal, vertical and
/// both diagonals.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Utility for analyzing lines of same-player pieces
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Length of the contiguous run of the piece at (row, column) along one
    /// axis, counting forward and backward. Zero for an empty cell.
    pub fn run_length(grid: &Grid, row: usize, column: usize, direction: (isize, isize)) -> usize {
        let Some(target) = grid.get(row, column).and_then(|cell| cell.player()) else {
            return 0;
        };
        1 + Self::count_towards(grid, row, column, direction, target)
            + Self::count_towards(grid, row, column, (-direction.0, -direction.1), target)
    }

    /// The owner of (row, column) if any axis through it holds a run of at
    /// least `win_length`.
    pub fn connected_through(
        grid: &Grid,
        row: usize,
        column: usize,
        win_length: usize,
    ) -> Option<Player> {
        let player = grid.get(row, column)?.player()?;
        DIRECTIONS
            .iter()
            .any(|&direction| Self::run_length(grid, row, column, direction) >= win_length)
            .then_some(player)
    }

    /// Scan every occupied cell for a winning run.
    pub fn find_winner(grid: &Grid, win_length: usize) -> Option<Player> {
        (0..grid.rows())
            .flat_map(|row| (0..grid.columns()).map(move |column| (row, column)))
            .find_map(|(row, column)| Self::connected_through(grid, row, column, win_length))
    }

    /// Cells of the first winning run found, in order along its axis.
    pub fn winning_line(grid: &Grid, win_length: usize) -> Option<Vec<(usize, usize)>> {
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                for &direction in &DIRECTIONS {
                    let length = Self::run_length(grid, row, column, direction);
                    if length < win_length {
                        continue;
                    }
                    let Some(player) = grid.get(row, column).and_then(|cell| cell.player()) else {
                        continue;
                    };
                    let back = Self::count_towards(
                        grid,
                        row,
                        column,
                        (-direction.0, -direction.1),
                        player,
                    );
                    let line = (0..length)
                        .filter_map(|step| {
                            let offset = step as isize - back as isize;
                            Self::offset(grid, row, column, direction, offset)
                        })
                        .collect();
                    return Some(line);
                }
            }
        }
        None
    }

    fn count_towards(
        grid: &Grid,
        row: usize,
        column: usize,
        direction: (isize, isize),
        target: Player,
    ) -> usize {
        let mut count = 0;
        let mut step = 1;
        while let Some((r, c)) = Self::offset(grid, row, column, direction, step) {
            if grid.get(r, c).and_then(|cell| cell.player()) != Some(target) {
                break;
            }
            count += 1;
            step += 1;
        }
        count
    }

    fn offset(
        grid: &Grid,
        row: usize,
        column: usize,
        direction: (isize, isize),
        step: isize,
    ) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(direction.0 * step)?;
        let c = column.checked_add_signed(direction.1 * step)?;
        grid.contains(r, c).then_some((r, c))
    }
}
