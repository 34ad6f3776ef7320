//! Symmetric tic-tac-toe positions share one cache entry.

mod common;

use common::random_position;
use gridplay::{
    Board, Player,
    board::Cell,
    tictactoe::{D4Transform, TicTacToe, canonicalize},
    transposition::TranspositionCache,
};
use proptest::prelude::*;

fn arb_position() -> impl Strategy<Value = TicTacToe> {
    (any::<u64>(), 0usize..10).prop_map(|(seed, plies)| random_position(seed, plies))
}

proptest! {
    #[test]
    fn prop_variants_hit_the_first_entry(board in arb_position()) {
        let mut cache = TranspositionCache::new();
        *cache.get_or_insert(&board, 0) = 7;

        for (i, variant) in board.symmetric_variants().iter().enumerate() {
            prop_assert_eq!(*cache.get_or_insert(variant, i + 100), 7);
        }
        prop_assert_eq!(cache.len(), 1);
    }

    #[test]
    fn prop_key_is_smallest_image(board in arb_position()) {
        let key = board.transposition_key();
        prop_assert_eq!(canonicalize(board.grid(), board.mover()).unwrap(), key.clone());
        for transform in D4Transform::all() {
            let image = transform.apply_to_grid(board.grid());
            prop_assert_eq!(canonicalize(&image, board.mover()).unwrap(), key.clone());
        }
    }

    #[test]
    fn prop_inverse_restores_grid(board in arb_position()) {
        for transform in D4Transform::all() {
            let image = transform.apply_to_grid(board.grid());
            prop_assert_eq!(transform.inverse().apply_to_grid(&image), board.grid().clone());
        }
    }
}

#[test]
fn mover_is_part_of_the_key() {
    let (x_to_move, _) = TicTacToe::from_scenario(&["X--", "-O-", "---"], Player::X).unwrap();
    let (o_to_move, _) = TicTacToe::from_scenario(&["X--", "-O-", "---"], Player::O).unwrap();
    assert_ne!(x_to_move.transposition_key(), o_to_move.transposition_key());
}

#[test]
fn corner_openings_fold_together() {
    let mut cache = TranspositionCache::new();
    let empty = TicTacToe::new();
    for mv in empty.legal_moves() {
        let child = empty.clone_with(mv).unwrap();
        *cache.get_or_insert(&child, 0) += 1;
    }
    // corner, edge, centre
    assert_eq!(cache.len(), 3);
    let corner = empty.clone_with(gridplay::tictactoe::Tile::new(0, 0)).unwrap();
    assert_eq!(cache.get(&corner), Some(&4));
    assert_eq!(corner.grid().count(Cell::X), 1);
}
