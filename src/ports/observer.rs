//! Observer port - move notifications for rendering and logging
//!
//! The game loop calls these hooks synchronously after every successful
//! move and after every reset. It ignores whatever the observer does with
//! them.

use crate::board::{Board, Player};

/// Listener for game loop events
///
/// # Examples
///
/// ```
/// use gridplay::{
///     board::Player,
///     ports::MoveObserver,
///     tictactoe::{TicTacToe, Tile},
/// };
///
/// #[derive(Default)]
/// struct MoveCounter {
///     moves: usize,
/// }
///
/// impl MoveObserver<TicTacToe> for MoveCounter {
///     fn on_move(&mut self, _mover: Player, _mv: Tile, _board: &TicTacToe) {
///         self.moves += 1;
///     }
/// }
/// ```
pub trait MoveObserver<B: Board>: Send {
    /// Called after `mover` played `mv`; `board` is the position after the move.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_move(&mut self, _mover: Player, _mv: B::Move, _board: &B) {}

    /// Called after the game loop replaced its board with a fresh one.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn on_reset(&mut self, _board: &B) {}
}
