//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Configuration for a [`crate::agents::NegamaxAgent`].
///
/// # Examples
///
/// ```
/// use gridplay::config::NegamaxConfig;
///
/// let config = NegamaxConfig::new()
///     .with_depth_limit(Some(8))
///     .with_shuffle(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegamaxConfig {
    /// Deepest recursion level searched; `None` searches to the end
    pub depth_limit: Option<usize>,
    /// Shuffle move order at every node
    pub shuffle: bool,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl NegamaxConfig {
    /// Exhaustive search in legal-move order.
    pub fn new() -> Self {
        Self {
            depth_limit: None,
            shuffle: false,
            seed: None,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: Option<usize>) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for a zero depth limit.
    pub fn validate(&self) -> Result<()> {
        if self.depth_limit == Some(0) {
            return Err(Error::InvalidConfiguration {
                message: "negamax depth limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for NegamaxConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a [`crate::agents::MonteCarloTreeSearchAgent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Simulations per decision
    pub simulations: usize,
    /// UCB1 exploration constant
    pub exploration: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl MctsConfig {
    pub const DEFAULT_SIMULATIONS: usize = 500;
    pub const DEFAULT_EXPLORATION: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            simulations: Self::DEFAULT_SIMULATIONS,
            exploration: Self::DEFAULT_EXPLORATION,
            seed: None,
        }
    }

    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.simulations = simulations;
        self
    }

    pub fn with_exploration(mut self, exploration: f64) -> Self {
        self.exploration = exploration;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] for zero simulations or a
    /// negative or non-finite exploration constant.
    pub fn validate(&self) -> Result<()> {
        if self.simulations == 0 {
            return Err(Error::InvalidConfiguration {
                message: "MCTS needs at least one simulation".to_string(),
            });
        }
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!("invalid exploration constant {}", self.exploration),
            });
        }
        Ok(())
    }
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a [`crate::agents::ValueFunctionAgent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueFunctionConfig {
    /// TD(0) step size
    pub alpha: f64,
    /// Random-move probability while training
    pub exploration: f64,
    /// Random-move probability during normal play
    pub epsilon: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl ValueFunctionConfig {
    pub const DEFAULT_ALPHA: f64 = 0.5;
    pub const DEFAULT_EXPLORATION: f64 = 0.2;

    pub fn new() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            exploration: Self::DEFAULT_EXPLORATION,
            epsilon: 0.0,
            seed: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_exploration(mut self, exploration: f64) -> Self {
        self.exploration = exploration;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `alpha` is outside (0, 1]
    /// or either probability is outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("alpha must be in (0, 1], got {}", self.alpha),
            });
        }
        for (name, value) in [("exploration", self.exploration), ("epsilon", self.epsilon)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be in [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ValueFunctionConfig {
    fn default() -> Self {
        Self::new()
    }
}
