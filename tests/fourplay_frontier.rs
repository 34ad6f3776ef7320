//! The fourplay frontier tracks the grid through any legal sequence.

mod common;

use common::random_position;
use gridplay::{
    Board, Error, Player,
    fourplay::{FourPlay, Frontier, Slot},
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_frontier_matches_grid(seed in any::<u64>(), plies in 0usize..43) {
        let board: FourPlay = random_position(seed, plies);
        prop_assert!(board.frontier().is_consistent_with(board.grid()));
        prop_assert_eq!(board.frontier(), &Frontier::from_grid(board.grid()));

        let open: Vec<Slot> = board.frontier().open_columns().map(Slot::new).collect();
        if board.is_terminal() {
            prop_assert!(board.legal_moves().is_empty());
        } else {
            prop_assert_eq!(board.legal_moves(), open);
        }
    }

    #[test]
    fn prop_undo_retraces_to_empty(seed in any::<u64>(), plies in 1usize..43) {
        let mut board = FourPlay::new();
        let mut played = Vec::new();
        let mut agent = gridplay::agents::RandomAgent::with_seed(seed);
        for _ in 0..plies {
            if board.is_terminal() {
                break;
            }
            let mv = gridplay::ports::Agent::choose_move(&mut agent, &board).unwrap();
            board.apply(mv).unwrap();
            played.push(mv);
        }
        while let Some(mv) = played.pop() {
            board.undo(mv).unwrap();
            prop_assert!(board.frontier().is_consistent_with(board.grid()));
        }
        prop_assert_eq!(board, FourPlay::new());
    }
}

#[test]
fn full_column_is_not_legal() {
    let (board, _) = FourPlay::from_scenario(
        &["X------", "O------", "X------", "O------", "X------", "O------"],
        Player::X,
    )
    .unwrap();
    assert_eq!(board.frontier().row(0), None);
    assert!(!board.legal_moves().contains(&Slot::new(0)));
    assert!(matches!(
        board.clone_with(Slot::new(0)),
        Err(Error::IllegalMove { .. })
    ));
}

#[test]
fn floating_piece_is_rejected() {
    let result = FourPlay::from_scenario(
        &["-------", "-------", "-------", "-------", "X------", "-------"],
        Player::O,
    );
    assert!(matches!(result, Err(Error::InvalidScenario { .. })));
}
