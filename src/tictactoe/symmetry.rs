//! D4 symmetry group operations for board canonicalization

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    board::{Cell, Grid, Player},
    types::CanonicalKey,
};

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply reflection
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [Self::identity(); 8];
        for (i, rotation) in [0, 90, 180, 270].into_iter().enumerate() {
            transforms[2 * i] = D4Transform {
                rotation,
                reflection: false,
            };
            transforms[2 * i + 1] = D4Transform {
                rotation,
                reflection: true,
            };
        }
        transforms
    }

    /// Map (row, column) on a `size`×`size` grid. Reflection (across the
    /// vertical axis) is applied before the clockwise rotation.
    pub fn transform_position(&self, row: usize, column: usize, size: usize) -> (usize, usize) {
        let (mut row, mut column) = (row, column);
        if self.reflection {
            column = size - 1 - column;
        }
        for _ in 0..(self.rotation / 90) {
            let new_row = column;
            let new_column = size - 1 - row;
            row = new_row;
            column = new_column;
        }
        (row, column)
    }

    /// Apply transform to a row-major square cell slice
    pub fn apply_to_cells(&self, cells: &[Cell], size: usize) -> Vec<Cell> {
        let mut transformed = vec![Cell::Empty; cells.len()];
        for (idx, &cell) in cells.iter().enumerate() {
            let (row, column) = self.transform_position(idx / size, idx % size, size);
            transformed[row * size + column] = cell;
        }
        transformed
    }

    /// Apply transform to a square grid
    pub fn apply_to_grid(&self, grid: &Grid) -> Grid {
        let size = grid.rows();
        Grid::from_cells(size, size, self.apply_to_cells(grid.cells(), size))
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> D4Transform {
        if self.reflection {
            // reflect-then-rotate is an involution for every rotation
            *self
        } else {
            D4Transform {
                rotation: (360 - self.rotation) % 360,
                reflection: false,
            }
        }
    }
}

/// Smallest key among the 8 symmetric images of `grid` with `mover` to move.
///
/// # Errors
///
/// Returns [`Error::PreconditionViolation`] if the grid is not square.
pub fn canonicalize(grid: &Grid, mover: Player) -> Result<CanonicalKey> {
    if !grid.is_square() {
        return Err(Error::precondition(format!(
            "symmetry canonicalization needs a square grid, got {}x{}",
            grid.rows(),
            grid.columns()
        )));
    }
    Ok(fold(grid, mover))
}

/// Canonical key of a grid already known to be square.
pub(crate) fn fold(grid: &Grid, mover: Player) -> CanonicalKey {
    let size = grid.rows();
    D4Transform::all()
        .iter()
        .map(|t| CanonicalKey::encode(&t.apply_to_cells(grid.cells(), size), size, mover))
        .min()
        .unwrap_or_else(|| CanonicalKey::encode(grid.cells(), size, mover))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_transforms_are_distinct() {
        let transforms = D4Transform::all();
        for (i, a) in transforms.iter().enumerate() {
            for b in &transforms[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_rotation_moves_corner_clockwise() {
        let quarter = D4Transform {
            rotation: 90,
            reflection: false,
        };
        assert_eq!(quarter.transform_position(0, 0, 3), (0, 2));
        assert_eq!(quarter.transform_position(0, 2, 3), (2, 2));
        assert_eq!(quarter.transform_position(1, 1, 3), (1, 1));
    }

    #[test]
    fn test_inverse_round_trips_positions() {
        for size in [3, 4, 5] {
            for t in D4Transform::all() {
                let inv = t.inverse();
                for row in 0..size {
                    for column in 0..size {
                        let (r, c) = t.transform_position(row, column, size);
                        assert_eq!(inv.transform_position(r, c, size), (row, column));
                    }
                }
            }
        }
    }

    #[test]
    fn test_canonicalize_rejects_non_square() {
        let grid = Grid::new(6, 7);
        let err = canonicalize(&grid, Player::X).unwrap_err();
        assert!(matches!(err, Error::PreconditionViolation { .. }));
    }

    #[test]
    fn test_corners_share_a_key() {
        let keys: Vec<_> = [(0, 0), (0, 2), (2, 0), (2, 2)]
            .iter()
            .map(|&(r, c)| {
                let mut grid = Grid::new(3, 3);
                grid.set(r, c, Cell::X);
                canonicalize(&grid, Player::O).unwrap()
            })
            .collect();
        assert!(keys.windows(2).all(|w| w[0] == w[1]));

        let mut edge = Grid::new(3, 3);
        edge.set(0, 1, Cell::X);
        assert_ne!(canonicalize(&edge, Player::O).unwrap(), keys[0]);
    }
}
