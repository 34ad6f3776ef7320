//! Shared configuration types for CLI commands

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::MsgPackRepository,
    agents::{MonteCarloTreeSearchAgent, NegamaxAgent, RandomAgent, ValueFunctionAgent},
    board::{Board, Player},
    config::{MctsConfig, NegamaxConfig, ValueFunctionConfig},
    ports::Agent,
};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,

    /// Whether to show progress bars
    pub progress: bool,
}

impl CommonConfig {
    /// Seed for the agent playing `player`, so the two sides never share a
    /// random stream.
    pub fn seed_for(&self, player: Player) -> Option<u64> {
        self.seed.map(|seed| match player {
            Player::X => seed,
            Player::O => seed.wrapping_add(1),
        })
    }
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            seed: None,
            progress: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameKind {
    /// 3x3 noughts and crosses
    #[value(name = "tictactoe")]
    TicTacToe,
    /// 6x7 gravity game, four in a row wins
    #[value(name = "fourplay")]
    FourPlay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Uniformly random legal moves
    Random,
    /// Depth-discounted negamax search
    Negamax,
    /// Monte Carlo tree search
    Mcts,
    /// TD(0) value table, loaded from `--snapshot` when given
    ValueFunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

/// Knobs for building agents from the command line
#[derive(Args, Debug, Clone)]
pub struct AgentOptions {
    /// MCTS simulations per move
    #[arg(long, default_value_t = MctsConfig::DEFAULT_SIMULATIONS)]
    pub simulations: usize,

    /// MCTS exploration constant
    #[arg(long, default_value_t = MctsConfig::DEFAULT_EXPLORATION)]
    pub exploration: f64,

    /// Negamax depth limit (defaults to the game's own limit)
    #[arg(long)]
    pub depth: Option<usize>,

    /// Value-function snapshot to play from
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            simulations: MctsConfig::DEFAULT_SIMULATIONS,
            exploration: MctsConfig::DEFAULT_EXPLORATION,
            depth: None,
            snapshot: None,
        }
    }
}

/// Build the agent of `kind` that will play `side` on boards of type `B`.
pub fn build_agent<B: Board>(
    kind: AgentKind,
    side: Player,
    options: &AgentOptions,
    seed: Option<u64>,
) -> Result<Box<dyn Agent<B>>> {
    let agent: Box<dyn Agent<B>> = match kind {
        AgentKind::Random => Box::new(seed.map_or_else(RandomAgent::new, RandomAgent::with_seed)),
        AgentKind::Negamax => {
            let mut config = NegamaxConfig::new()
                .with_depth_limit(options.depth.or(B::SEARCH_DEPTH_LIMIT))
                .with_shuffle(B::SEARCH_DEPTH_LIMIT.is_some());
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            config.validate()?;
            Box::new(NegamaxAgent::new(config))
        }
        AgentKind::Mcts => {
            let mut config = MctsConfig::new()
                .with_simulations(options.simulations)
                .with_exploration(options.exploration);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            config.validate()?;
            Box::new(MonteCarloTreeSearchAgent::new(config))
        }
        AgentKind::ValueFunction => {
            let mut config = ValueFunctionConfig::new();
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            config.validate()?;
            let agent = match &options.snapshot {
                Some(path) => {
                    ValueFunctionAgent::load(side, config, &MsgPackRepository::new(), path)
                }
                None => {
                    warn!(
                        "value-function agent for {side} has no snapshot; playing from an empty table"
                    );
                    ValueFunctionAgent::new(side, config)
                }
            };
            Box::new(agent)
        }
    };
    Ok(agent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fourplay::FourPlay, tictactoe::TicTacToe};

    #[test]
    fn test_sides_get_distinct_seeds() {
        let common = CommonConfig {
            seed: Some(7),
            ..CommonConfig::default()
        };
        assert_eq!(common.seed_for(Player::X), Some(7));
        assert_eq!(common.seed_for(Player::O), Some(8));
        assert_eq!(CommonConfig::default().seed_for(Player::O), None);
    }

    #[test]
    fn test_build_every_agent_kind() {
        let options = AgentOptions::default();
        for (kind, name) in [
            (AgentKind::Random, "random"),
            (AgentKind::Negamax, "negamax"),
            (AgentKind::Mcts, "mcts"),
            (AgentKind::ValueFunction, "value-function"),
        ] {
            let agent = build_agent::<TicTacToe>(kind, Player::X, &options, Some(1)).unwrap();
            assert_eq!(agent.name(), name);
        }
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = AgentOptions {
            simulations: 0,
            ..AgentOptions::default()
        };
        assert!(build_agent::<FourPlay>(AgentKind::Mcts, Player::O, &options, None).is_err());
    }
}
