//! Turn-taking, move validation and observers.

use std::sync::{Arc, Mutex};

use gridplay::{
    Board, Error, GameOutcome, Player, Result,
    agents::{NegamaxAgent, RandomAgent},
    board::Cell,
    config::NegamaxConfig,
    fourplay::{FourPlay, Slot},
    game::Game,
    ports::{Agent, MoveObserver},
    series::play_series,
    tictactoe::TicTacToe,
};

/// Plays the given moves in order, whatever the board says.
struct Scripted(Vec<Slot>);

impl Agent<FourPlay> for Scripted {
    fn choose_move(&mut self, _board: &FourPlay) -> Result<Slot> {
        Ok(self.0.remove(0))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[derive(Clone, Default)]
struct MoveCounter(Arc<Mutex<usize>>);

impl<B: Board> MoveObserver<B> for MoveCounter {
    fn on_move(&mut self, _mover: Player, _mv: B::Move, _board: &B) {
        *self.0.lock().unwrap() += 1;
    }
}

#[test]
fn full_column_is_rejected_without_changing_the_board() {
    // Both sides stack column 0 until it is full, then X tries it once more
    let x = vec![Slot::new(0), Slot::new(0), Slot::new(0), Slot::new(0)];
    let o = vec![Slot::new(0), Slot::new(0), Slot::new(0)];
    let mut game: Game<FourPlay> = Game::new(Box::new(Scripted(x)), Box::new(Scripted(o)));

    for _ in 0..6 {
        assert_eq!(game.play_round().unwrap(), None);
    }
    let before = game.board().clone();
    let err = game.play_round().unwrap_err();
    assert!(matches!(err, Error::IllegalMove { .. }));
    assert_eq!(game.board(), &before);
    assert_eq!(game.board().outcome(), None);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn observers_see_every_move() {
    let counter = MoveCounter::default();
    let mut game: Game<FourPlay> = Game::new(
        Box::new(NegamaxAgent::new(
            NegamaxConfig::new()
                .with_depth_limit(Some(4))
                .with_shuffle(true)
                .with_seed(1),
        )),
        Box::new(RandomAgent::with_seed(2)),
    )
    .with_observer(Box::new(counter.clone()));

    game.play_to_end().unwrap();
    let moves = game.history().len();
    assert_eq!(*counter.0.lock().unwrap(), moves);

    let grid = game.board().grid();
    assert_eq!(grid.count(Cell::X) + grid.count(Cell::O), moves);
    assert!(game.board().legal_moves().is_empty());
}

#[test]
fn history_alternates_sides() {
    let mut game: Game<TicTacToe> = Game::new(
        Box::new(RandomAgent::with_seed(4)),
        Box::new(RandomAgent::with_seed(5)),
    );
    game.play_to_end().unwrap();
    for (i, (mover, _)) in game.history().iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(*mover, expected);
    }
}

#[test]
fn series_counts_add_up() {
    let mut game: Game<TicTacToe> = Game::new(
        Box::new(RandomAgent::with_seed(8)),
        Box::new(RandomAgent::with_seed(9)),
    );
    let mut outcomes = Vec::new();
    let result = play_series(&mut game, 25, |_, outcome| outcomes.push(outcome)).unwrap();
    assert_eq!(result.total_games, 25);
    assert_eq!(result.x_wins + result.o_wins + result.draws, 25);
    assert_eq!(
        outcomes
            .iter()
            .filter(|o| **o == GameOutcome::Draw)
            .count(),
        result.draws
    );
    assert!((result.x_win_rate + result.o_win_rate + result.draw_rate - 1.0).abs() < 1e-9);
}
