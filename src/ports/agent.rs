//! Agent port - the single capability every move-choosing strategy offers

use crate::{Result, board::Board};

/// Chooses moves for whichever side is to move on the board it is handed.
///
/// Agents never hold on to the board: the game loop passes the current
/// position into every call.
///
/// # Examples
///
/// ```
/// use gridplay::{
///     agents::RandomAgent,
///     board::Board,
///     ports::Agent,
///     tictactoe::TicTacToe,
/// };
///
/// let mut agent = RandomAgent::with_seed(3);
/// let board = TicTacToe::new();
/// let mv = agent.choose_move(&board)?;
/// assert!(board.legal_moves().contains(&mv));
/// # Ok::<(), gridplay::Error>(())
/// ```
pub trait Agent<B: Board>: Send {
    /// Select a legal move for `board.mover()`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PreconditionViolation`] if the board is
    /// already terminal.
    fn choose_move(&mut self, board: &B) -> Result<B::Move>;

    /// Used for identification in logs and series summaries.
    fn name(&self) -> &str;

    /// Drop per-session state such as search statistics. Learned state that
    /// is meant to be persisted survives.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for stateless agents.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }

    /// Seed the agent's internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

impl<B: Board, A: Agent<B> + ?Sized> Agent<B> for Box<A> {
    fn choose_move(&mut self, board: &B) -> Result<B::Move> {
        (**self).choose_move(board)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        (**self).set_rng_seed(seed)
    }
}
