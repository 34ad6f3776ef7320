use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use super::build_rng;
use crate::{Error, Result, board::Board, ports::Agent};

/// Picks a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: build_rng(None),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: build_rng(Some(seed)),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> Agent<B> for RandomAgent {
    fn choose_move(&mut self, board: &B) -> Result<B::Move> {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| Error::precondition("random agent asked to move on a finished game"))
    }

    fn name(&self) -> &str {
        "random"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
