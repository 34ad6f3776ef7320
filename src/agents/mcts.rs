//! Monte Carlo Tree Search with UCB1 selection
//!
//! Statistics live in a [`TranspositionCache`] rather than an explicit tree,
//! so positions reached by different move orders (or, on square boards, by
//! symmetry) share visits. One simulation:
//!
//! 1. **Select**: from the root follow the child with the highest UCB1 score
//!    until reaching a terminal position or one with a child missing from
//!    the cache.
//! 2. **Expand**: add every missing child with zero statistics and run a
//!    uniformly random playout from the first of them in legal-move order.
//! 3. **Backpropagate**: add one visit and the playout score to every
//!    position from the root to the expanded child.
//!
//! The move played is the root child with the most visits. Ties go to the
//! earliest child in legal-move order.

use log::debug;
use serde::{Deserialize, Serialize};

use super::random::RandomAgent;
use crate::{
    Error, Result,
    board::{Board, GameOutcome},
    config::MctsConfig,
    ports::Agent,
    transposition::TranspositionCache,
};

/// Visit statistics for one position. `score` is the sum of playout
/// outcomes from X's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    pub visits: u64,
    pub score: f64,
}

impl NodeStats {
    /// Mean playout score from X's perspective, 0 when unvisited
    pub fn mean(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.score / self.visits as f64
        }
    }

    /// UCB1 value of this child for a parent whose mover has sign `sign`
    /// (+1 for X, -1 for O). Unvisited children are always tried first.
    pub fn ucb(&self, parent_visits: u64, sign: f64, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let visits = self.visits as f64;
        let parent = parent_visits.max(1) as f64;
        sign * self.mean() + exploration * (parent.ln() / visits).sqrt()
    }
}

pub struct MonteCarloTreeSearchAgent {
    config: MctsConfig,
    stats: TranspositionCache<NodeStats>,
    playout: RandomAgent,
}

impl MonteCarloTreeSearchAgent {
    pub fn new(config: MctsConfig) -> Self {
        let playout = match config.seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        };
        MonteCarloTreeSearchAgent {
            config,
            stats: TranspositionCache::new(),
            playout,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Statistics gathered by the most recent decision
    pub fn statistics(&self) -> &TranspositionCache<NodeStats> {
        &self.stats
    }

    pub fn stats_for<B: Board>(&self, board: &B) -> Option<NodeStats> {
        self.stats.get(board).copied()
    }

    /// Run a full simulation budget from `root` and return the robust child.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] on a terminal board.
    pub fn search<B: Board>(&mut self, root: &B) -> Result<B::Move> {
        if root.is_terminal() {
            return Err(Error::precondition("MCTS search on a finished game"));
        }

        self.stats.clear();
        self.stats.get_or_insert(root, NodeStats::default());
        for _ in 0..self.config.simulations {
            self.simulate(root)?;
        }

        let mut best: Option<(B::Move, NodeStats)> = None;
        for mv in root.legal_moves() {
            let child = root.clone_with(mv)?;
            let stats = self.stats_for(&child).unwrap_or_default();
            if best.is_none_or(|(_, top)| stats.visits > top.visits) {
                best = Some((mv, stats));
            }
        }
        let (mv, stats) = best.ok_or_else(|| Error::precondition("MCTS root has no moves"))?;
        debug!(
            "mcts picked {mv} for {} ({} visits, mean {:+.3}, {} positions cached)",
            root.mover(),
            stats.visits,
            stats.mean(),
            self.stats.len()
        );
        Ok(mv)
    }

    fn simulate<B: Board>(&mut self, root: &B) -> Result<()> {
        let mut path = Vec::new();
        let mut node = root.clone();
        while let Some(child) = self.select_child(&node)? {
            path.push(std::mem::replace(&mut node, child));
        }

        let score = match node.outcome() {
            Some(outcome) => outcome.score(),
            None => {
                let child = self.expand(&node)?;
                let score = self.rollout(&child)?;
                path.push(std::mem::replace(&mut node, child));
                score
            }
        };
        path.push(node);

        for board in &path {
            let stats = self.stats.get_or_insert(board, NodeStats::default());
            stats.visits += 1;
            stats.score += score;
        }
        Ok(())
    }

    /// Highest-UCB child, or `None` if `node` is terminal or not fully expanded.
    fn select_child<B: Board>(&self, node: &B) -> Result<Option<B>> {
        if node.is_terminal() {
            return Ok(None);
        }
        let parent_visits = self.stats_for(node).map_or(0, |stats| stats.visits);
        let sign = node.mover().sign();

        let mut best: Option<(f64, B)> = None;
        for mv in node.legal_moves() {
            let child = node.clone_with(mv)?;
            let Some(stats) = self.stats_for(&child) else {
                return Ok(None);
            };
            let ucb = stats.ucb(parent_visits, sign, self.config.exploration);
            if best.as_ref().is_none_or(|(top, _)| ucb > *top) {
                best = Some((ucb, child));
            }
        }
        Ok(best.map(|(_, child)| child))
    }

    /// Insert every uncached child and return the first of them.
    fn expand<B: Board>(&mut self, node: &B) -> Result<B> {
        let mut first = None;
        for mv in node.legal_moves() {
            let child = node.clone_with(mv)?;
            if !self.stats.contains(&child) {
                self.stats.set(&child, NodeStats::default());
                if first.is_none() {
                    first = Some(child);
                }
            }
        }
        first.ok_or_else(|| Error::precondition("expanded a position with every child cached"))
    }

    fn rollout<B: Board>(&mut self, from: &B) -> Result<f64> {
        let mut board = from.clone();
        while !board.is_terminal() {
            let mv = self.playout.choose_move(&board)?;
            board.apply(mv)?;
        }
        Ok(board.outcome().map_or(0.0, GameOutcome::score))
    }
}

impl Default for MonteCarloTreeSearchAgent {
    fn default() -> Self {
        Self::new(MctsConfig::default())
    }
}

impl<B: Board> Agent<B> for MonteCarloTreeSearchAgent {
    fn choose_move(&mut self, board: &B) -> Result<B::Move> {
        self.search(board)
    }

    fn name(&self) -> &str {
        "mcts"
    }

    fn reset(&mut self) -> Result<()> {
        self.stats.clear();
        Ok(())
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.playout = RandomAgent::with_seed(seed);
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

    fn agent(simulations: usize, seed: u64) -> MonteCarloTreeSearchAgent {
        MonteCarloTreeSearchAgent::new(
            MctsConfig::new()
                .with_simulations(simulations)
                .with_seed(seed),
        )
    }

    #[test]
    fn test_ucb_prefers_unvisited() {
        let unvisited = NodeStats::default();
        let visited = NodeStats {
            visits: 10,
            score: 10.0,
        };
        assert!(unvisited.ucb(10, 1.0, 1.0) > visited.ucb(10, 1.0, 1.0));
    }

    #[test]
    fn test_ucb_signs_mean_for_mover() {
        let stats = NodeStats {
            visits: 4,
            score: 2.0,
        };
        assert_eq!(stats.ucb(1, 1.0, 1.0), 0.5);
        assert_eq!(stats.ucb(1, -1.0, 1.0), -0.5);
    }

    #[test]
    fn test_root_visits_equal_simulations() {
        let mut mcts = agent(200, 3);
        let board = TicTacToe::new();
        mcts.search(&board).unwrap();
        assert_eq!(mcts.stats_for(&board).unwrap().visits, 200);
    }

    #[test]
    fn test_single_move_still_simulates() {
        let (board, marked) =
            TicTacToe::from_scenario(&["#OX", "OXX", "OXO"], Player::X).unwrap();
        let mut mcts = agent(25, 1);
        assert_eq!(Some(mcts.search(&board).unwrap()), marked);
        let child = board.clone_with(marked.unwrap()).unwrap();
        assert_eq!(mcts.stats_for(&child).unwrap().visits, 25);
    }

    #[test]
    fn test_visit_ties_go_to_first_move() {
        // (2,0) and (2,2) are mirror images and share one cache entry
        let (board, _) = TicTacToe::from_scenario(&["XOX", "OXO", "-O-"], Player::X).unwrap();
        let mut mcts = agent(50, 9);
        assert_eq!(mcts.search(&board).unwrap(), Tile::new(2, 0));
    }

    #[test]
    fn test_reset_clears_statistics() {
        let mut mcts = agent(20, 4);
        let board = FourPlay::new();
        Agent::<FourPlay>::choose_move(&mut mcts, &board).unwrap();
        assert!(!mcts.statistics().is_empty());
        Agent::<FourPlay>::reset(&mut mcts).unwrap();
        assert!(mcts.statistics().is_empty());
    }

    #[test]
    fn test_terminal_root_rejected() {
        let (board, _) = TicTacToe::from_scenario(&["XXX", "OO-", "---"], Player::O).unwrap();
        assert!(agent(10, 0).search(&board).is_err());
    }
}
