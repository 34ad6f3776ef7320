//! Move-choosing strategies
//!
//! - [`RandomAgent`]: uniform baseline, also drives MCTS playouts
//! - [`NegamaxAgent`]: exhaustive depth-discounted search with a pruning window
//! - [`MonteCarloTreeSearchAgent`]: UCB1 tree search over a transposition cache
//! - [`ValueFunctionAgent`]: TD(0) learner with a persisted value table

pub mod mcts;
pub mod negamax;
pub mod random;
pub mod snapshot;
pub mod value_function;

use rand::{SeedableRng, rngs::StdRng};

pub use mcts::{MonteCarloTreeSearchAgent, NodeStats};
pub use negamax::NegamaxAgent;
pub use random::RandomAgent;
pub use snapshot::ValueSnapshot;
pub use value_function::{TrainingSummary, ValueFunctionAgent};

pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}
