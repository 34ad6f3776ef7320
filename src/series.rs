//! Repeated games between the same two agents

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{Board, GameOutcome, Player},
    game::Game,
};

/// Result of a series of games
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// Agent playing X
    pub x_agent: String,

    /// Agent playing O
    pub o_agent: String,

    /// Total games played
    pub total_games: usize,

    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,

    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
}

impl SeriesResult {
    pub fn new(
        x_agent: impl Into<String>,
        o_agent: impl Into<String>,
        x_wins: usize,
        o_wins: usize,
        draws: usize,
    ) -> Self {
        let total_games = x_wins + o_wins + draws;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };
        Self {
            x_agent: x_agent.into(),
            o_agent: o_agent.into(),
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Play `games` games, resetting between them, and tally outcomes.
/// `on_game` is called with the game index and outcome after each game.
pub fn play_series<B, F>(game: &mut Game<B>, games: usize, mut on_game: F) -> Result<SeriesResult>
where
    B: Board,
    F: FnMut(usize, GameOutcome),
{
    let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);
    for index in 0..games {
        game.reset()?;
        let outcome = game.play_to_end()?;
        match outcome {
            GameOutcome::Win(Player::X) => x_wins += 1,
            GameOutcome::Win(Player::O) => o_wins += 1,
            GameOutcome::Draw => draws += 1,
        }
        on_game(index, outcome);
    }
    Ok(SeriesResult::new(
        game.agent(Player::X).name(),
        game.agent(Player::O).name(),
        x_wins,
        o_wins,
        draws,
    ))
}
