//! Turn-taking loop between two agents

use log::debug;

use crate::{
    Error, Result,
    board::{Board, GameOutcome, Player},
    ports::{Agent, MoveObserver},
};

/// A board, the agents playing X and O, and the moves played so far.
///
/// # Examples
///
/// ```
/// use gridplay::{
///     agents::{NegamaxAgent, RandomAgent},
///     board::Board,
///     game::Game,
///     tictactoe::TicTacToe,
/// };
///
/// let mut game: Game<TicTacToe> =
///     Game::new(Box::new(NegamaxAgent::default()), Box::new(RandomAgent::with_seed(1)));
/// let outcome = game.play_to_end()?;
/// assert_eq!(game.board().outcome(), Some(outcome));
/// # Ok::<(), gridplay::Error>(())
/// ```
pub struct Game<B: Board> {
    initial: B,
    board: B,
    x: Box<dyn Agent<B>>,
    o: Box<dyn Agent<B>>,
    observers: Vec<Box<dyn MoveObserver<B>>>,
    history: Vec<(Player, B::Move)>,
}

impl<B: Board> Game<B> {
    /// Game from the board type's empty position
    pub fn new(x: Box<dyn Agent<B>>, o: Box<dyn Agent<B>>) -> Self {
        Self::from_board(B::default(), x, o)
    }

    /// Game starting from `board`, e.g. a scenario. `reset` returns here.
    pub fn from_board(board: B, x: Box<dyn Agent<B>>, o: Box<dyn Agent<B>>) -> Self {
        Game {
            initial: board.clone(),
            board,
            x,
            o,
            observers: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn MoveObserver<B>>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn MoveObserver<B>>) {
        self.observers.push(observer);
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn history(&self) -> &[(Player, B::Move)] {
        &self.history
    }

    pub fn agent(&self, player: Player) -> &dyn Agent<B> {
        match player {
            Player::X => self.x.as_ref(),
            Player::O => self.o.as_ref(),
        }
    }

    /// Ask the side to move for a move, check it, and play it.
    ///
    /// Returns the board's outcome after the move, `None` while the game
    /// continues.
    ///
    /// # Errors
    ///
    /// - [`Error::PreconditionViolation`] if the game is already over
    /// - [`Error::IllegalMove`] if the agent proposes a move outside
    ///   `legal_moves()`
    pub fn play_round(&mut self) -> Result<Option<GameOutcome>> {
        if self.board.is_terminal() {
            return Err(Error::precondition("game is already over"));
        }

        let mover = self.board.mover();
        let agent = match mover {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        let mv = agent.choose_move(&self.board)?;
        if !self.board.legal_moves().contains(&mv) {
            return Err(Error::illegal_move(
                mv,
                format!("{} proposed a move outside the legal set", agent.name()),
            ));
        }
        debug!("{} ({mover}) plays {mv}", agent.name());

        self.board.apply(mv)?;
        self.history.push((mover, mv));
        for observer in &mut self.observers {
            observer.on_move(mover, mv, &self.board);
        }
        Ok(self.board.outcome())
    }

    /// Play rounds until the game ends.
    pub fn play_to_end(&mut self) -> Result<GameOutcome> {
        loop {
            if let Some(outcome) = self.play_round()? {
                return Ok(outcome);
            }
        }
    }

    /// Restore the starting position and history. Agents drop per-session
    /// state; persisted tables are kept.
    pub fn reset(&mut self) -> Result<()> {
        self.board = self.initial.clone();
        self.history.clear();
        self.x.reset()?;
        self.o.reset()?;
        for observer in &mut self.observers {
            observer.on_reset(&self.board);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        agents::{NegamaxAgent, RandomAgent},
        tictactoe::{TicTacToe, Tile},
    };

    struct Fixed(Tile);

    impl Agent<TicTacToe> for Fixed {
        fn choose_move(&mut self, _board: &TicTacToe) -> Result<Tile> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<Option<Player>>>>);

    impl MoveObserver<TicTacToe> for Recorder {
        fn on_move(&mut self, mover: Player, _mv: Tile, _board: &TicTacToe) {
            self.0.lock().unwrap().push(Some(mover));
        }

        fn on_reset(&mut self, _board: &TicTacToe) {
            self.0.lock().unwrap().push(None);
        }
    }

    #[test]
    fn test_illegal_agent_move_is_surfaced() {
        let mut game: Game<TicTacToe> = Game::new(
            Box::new(Fixed(Tile::new(0, 0))),
            Box::new(Fixed(Tile::new(0, 0))),
        );
        assert_eq!(game.play_round().unwrap(), None);
        let err = game.play_round().unwrap_err();
        assert!(matches!(err, Error::IllegalMove { .. }));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_observer_sees_moves_and_reset() {
        let recorder = Recorder::default();
        let mut game: Game<TicTacToe> = Game::new(
            Box::new(RandomAgent::with_seed(1)),
            Box::new(RandomAgent::with_seed(2)),
        )
        .with_observer(Box::new(recorder.clone()));

        game.play_to_end().unwrap();
        let moves = game.history().len();
        game.reset().unwrap();

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.len(), moves + 1);
        assert_eq!(events[0], Some(Player::X));
        assert_eq!(events[1], Some(Player::O));
        assert_eq!(events.last(), Some(&None));
    }

    #[test]
    fn test_playing_after_the_end_is_rejected() {
        let mut game: Game<TicTacToe> = Game::new(
            Box::new(NegamaxAgent::default()),
            Box::new(NegamaxAgent::default()),
        );
        assert_eq!(game.play_to_end().unwrap(), GameOutcome::Draw);
        assert!(matches!(
            game.play_round(),
            Err(Error::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn test_reset_returns_to_scenario() {
        let (start, _) = TicTacToe::from_scenario(&["X--", "---", "---"], Player::O).unwrap();
        let mut game = Game::from_board(
            start.clone(),
            Box::new(RandomAgent::with_seed(3)),
            Box::new(RandomAgent::with_seed(4)),
        );
        game.play_round().unwrap();
        game.reset().unwrap();
        assert_eq!(game.board(), &start);
        assert!(game.history().is_empty());
    }
}
