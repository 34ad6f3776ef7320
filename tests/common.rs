//! Shared helpers for the integration tests.

#![allow(dead_code)]

use gridplay::{Board, Player, agents::RandomAgent, ports::Agent, tictactoe::TicTacToe};

/// Play up to `plies` uniformly random moves from the empty board,
/// stopping early if the game ends.
pub fn random_position<B: Board>(seed: u64, plies: usize) -> B {
    let mut agent = RandomAgent::with_seed(seed);
    let mut board = B::default();
    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let mv = agent.choose_move(&board).unwrap();
        board.apply(mv).unwrap();
    }
    board
}

/// Tic-tac-toe position with X to move, plus the move marked with `#`.
pub fn x_to_move(rows: &[&str]) -> (TicTacToe, gridplay::tictactoe::Tile) {
    let (board, marked) = TicTacToe::from_scenario(rows, Player::X).unwrap();
    (board, marked.expect("scenario has no marked move"))
}
