//! Depth-discounted negamax search
//!
//! A terminal child is worth its outcome for the side that just moved,
//! divided by the recursion level, so quicker wins and slower losses score
//! higher. Non-terminal children are worth the negated best score of the
//! opponent one level down. Each node carries an `(own_best, opponent_best)`
//! window; it is negated and swapped on the way down and the move loop stops
//! as soon as `own_best` reaches `opponent_best`.

use log::debug;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::build_rng;
use crate::{Error, Result, board::Board, config::NegamaxConfig, ports::Agent};

/// Window bounds outside the reachable score range [-1, 1].
const LOWER_BOUND: f64 = -2.0;
const UPPER_BOUND: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct NegamaxAgent {
    config: NegamaxConfig,
    rng: StdRng,
    nodes: u64,
}

impl NegamaxAgent {
    pub fn new(config: NegamaxConfig) -> Self {
        NegamaxAgent {
            rng: build_rng(config.seed),
            config,
            nodes: 0,
        }
    }

    /// Search tuned to the board type: unbounded and in move order when the
    /// game tree is small, depth-capped and shuffled otherwise.
    pub fn for_board<B: Board>() -> Self {
        Self::new(
            NegamaxConfig::new()
                .with_depth_limit(B::SEARCH_DEPTH_LIMIT)
                .with_shuffle(B::SEARCH_DEPTH_LIMIT.is_some()),
        )
    }

    pub fn config(&self) -> &NegamaxConfig {
        &self.config
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best move for the side to move together with its discounted score.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] on a terminal board.
    pub fn evaluate<B: Board>(&mut self, board: &B) -> Result<(B::Move, f64)> {
        if board.is_terminal() {
            return Err(Error::precondition("negamax search on a finished game"));
        }
        self.nodes = 0;
        let (score, best) = self.search(board, LOWER_BOUND, UPPER_BOUND, 1)?;
        let mv = best.ok_or_else(|| Error::precondition("negamax found no move to play"))?;
        debug!(
            "negamax picked {mv} for {} (score {score:+.3}, {} nodes)",
            board.mover(),
            self.nodes
        );
        Ok((mv, score))
    }

    fn search<B: Board>(
        &mut self,
        board: &B,
        mut own_best: f64,
        opponent_best: f64,
        level: usize,
    ) -> Result<(f64, Option<B::Move>)> {
        let mover = board.mover();
        let mut moves = board.legal_moves();
        if self.config.shuffle {
            moves.shuffle(&mut self.rng);
        }

        let mut best_move = None;
        for mv in moves {
            self.nodes += 1;
            let child = board.clone_with(mv)?;
            let score = match child.outcome() {
                Some(outcome) => outcome.score_for(mover) / level as f64,
                None => match self.config.depth_limit {
                    Some(limit) if level >= limit => -1.0 / limit as f64,
                    _ => -self.search(&child, -opponent_best, -own_best, level + 1)?.0,
                },
            };

            if score > own_best {
                own_best = score;
                best_move = Some(mv);
            }
            if opponent_best <= own_best {
                break;
            }
        }
        Ok((own_best, best_move))
    }
}

impl Default for NegamaxAgent {
    fn default() -> Self {
        Self::new(NegamaxConfig::default())
    }
}

impl<B: Board> Agent<B> for NegamaxAgent {
    fn choose_move(&mut self, board: &B) -> Result<B::Move> {
        self.evaluate(board).map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        "negamax"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::Player,
        fourplay::FourPlay,
        tictactoe::{TicTacToe, Tile},
    };

    #[test]
    fn test_finish_scores_a_draw() {
        let (board, marked) =
            TicTacToe::from_scenario(&["#OX", "OXX", "OXO"], Player::X).unwrap();
        let (mv, score) = NegamaxAgent::default().evaluate(&board).unwrap();
        assert_eq!(Some(mv), marked);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_immediate_win_scores_one() {
        let (board, marked) =
            TicTacToe::from_scenario(&["#X-", "XOO", "XOO"], Player::X).unwrap();
        let (mv, score) = NegamaxAgent::default().evaluate(&board).unwrap();
        assert_eq!(Some(mv), marked);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_forced_loss_is_delayed() {
        // O threatens two lines; blocking one loses on O's next move
        let (board, _) = TicTacToe::from_scenario(&["O-O", "-X-", "O-X"], Player::X).unwrap();
        let (_, score) = NegamaxAgent::default().evaluate(&board).unwrap();
        assert_eq!(score, -0.5);
    }

    #[test]
    fn test_depth_cap_value() {
        let mut agent = NegamaxAgent::new(NegamaxConfig::new().with_depth_limit(Some(1)));
        let (_, score) = agent.evaluate(&FourPlay::new()).unwrap();
        assert_eq!(score, -1.0);
    }

    #[test]
    fn test_terminal_board_rejected() {
        let (board, _) = TicTacToe::from_scenario(&["XXX", "OO-", "---"], Player::O).unwrap();
        let err = NegamaxAgent::default().evaluate(&board).unwrap_err();
        assert!(matches!(err, Error::PreconditionViolation { .. }));
    }

    #[test]
    fn test_for_board_uses_game_depth_limit() {
        assert_eq!(NegamaxAgent::for_board::<TicTacToe>().config().depth_limit, None);
        assert_eq!(NegamaxAgent::for_board::<FourPlay>().config().depth_limit, Some(8));
        assert!(NegamaxAgent::for_board::<FourPlay>().config().shuffle);
    }

    #[test]
    fn test_unshuffled_search_is_deterministic() {
        let board = TicTacToe::new().clone_with(Tile::new(0, 0)).unwrap();
        let a = NegamaxAgent::default().evaluate(&board).unwrap();
        let b = NegamaxAgent::default().evaluate(&board).unwrap();
        assert_eq!(a, b);
    }
}
