//! Newtype wrappers shared by the boards and the caches.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Player};

/// Deterministic key identifying a board position, or for square boards its
/// whole equivalence class under rotation and reflection.
///
/// The encoding is the grid row by row (rows joined by `/`, empty cells as
/// `-`) followed by `_X` or `_O` for the side to move, e.g. `X--/-O-/---_X`.
/// Keys order lexicographically, which is what makes the symmetric minimum
/// well defined.
///
/// # Examples
///
/// ```
/// use gridplay::board::Board;
/// use gridplay::tictactoe::{Tile, TicTacToe};
///
/// let corner = TicTacToe::new().clone_with(Tile::new(0, 0)).unwrap();
/// let other = TicTacToe::new().clone_with(Tile::new(2, 2)).unwrap();
/// assert_eq!(corner.transposition_key(), other.transposition_key());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Encode a row-major cell slice of the given width together with the
    /// side to move.
    pub fn encode(cells: &[Cell], columns: usize, mover: Player) -> Self {
        let rows = if columns == 0 { 0 } else { cells.len() / columns };
        let mut encoding = String::with_capacity(cells.len() + rows + 2);
        for (index, cell) in cells.iter().enumerate() {
            if index > 0 && columns > 0 && index % columns == 0 {
                encoding.push('/');
            }
            encoding.push(cell.to_char());
        }
        encoding.push('_');
        encoding.push(mover.to_char());
        CanonicalKey(encoding)
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let mut cells = vec![Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::O;
        let key = CanonicalKey::encode(&cells, 3, Player::X);
        assert_eq!(key.as_str(), "X--/-O-/---_X");
    }

    #[test]
    fn test_mover_distinguishes_keys() {
        let cells = vec![Cell::Empty; 9];
        let x = CanonicalKey::encode(&cells, 3, Player::X);
        let o = CanonicalKey::encode(&cells, 3, Player::O);
        assert_ne!(x, o);
    }

    #[test]
    fn test_keys_are_totally_ordered() {
        let cells = vec![Cell::Empty; 4];
        let mut other = cells.clone();
        other[1] = Cell::O;
        let a = CanonicalKey::encode(&cells, 2, Player::X);
        let b = CanonicalKey::encode(&other, 2, Player::X);
        assert!(a < b || b < a);
    }
}
