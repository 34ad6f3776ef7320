//! Temporal-difference (TD(0)) value-function agent
//!
//! The agent keeps one scalar per position, from the perspective of the side
//! it plays, defaulting to 0.0 for positions it has never seen. In play it
//! moves to the successor with the best stored value. In training, after
//! every ply, the position before the move is pulled towards the position
//! after it:
//!
//! ```text
//! value[before] = (1 - alpha) * value[before] + alpha * value[after]
//! ```
//!
//! where a terminal `after` is first pinned to the game's outcome.

use std::path::Path;

use log::{info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{build_rng, snapshot::ValueSnapshot};
use crate::{
    Error, Result,
    board::{Board, GameOutcome, Player},
    config::ValueFunctionConfig,
    ports::{Agent, SnapshotRepository},
    transposition::TranspositionCache,
};

/// Tally of a training run from the learning side's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl TrainingSummary {
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };
        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValueFunctionAgent {
    side: Player,
    config: ValueFunctionConfig,
    values: TranspositionCache<f64>,
    epsilon: f64,
    games_trained: usize,
    rng: StdRng,
}

impl ValueFunctionAgent {
    /// Agent with an empty value table.
    pub fn new(side: Player, config: ValueFunctionConfig) -> Self {
        Self::with_values(side, config, TranspositionCache::new(), 0)
    }

    /// Agent resuming from a previously saved snapshot.
    pub fn from_snapshot(snapshot: ValueSnapshot, config: ValueFunctionConfig) -> Self {
        Self::with_values(
            snapshot.side,
            config,
            snapshot.values,
            snapshot.games_trained,
        )
    }

    fn with_values(
        side: Player,
        config: ValueFunctionConfig,
        values: TranspositionCache<f64>,
        games_trained: usize,
    ) -> Self {
        ValueFunctionAgent {
            side,
            epsilon: config.epsilon,
            rng: build_rng(config.seed),
            config,
            values,
            games_trained,
        }
    }

    /// Load the value table stored at `path`.
    ///
    /// A missing snapshot starts an empty table. So does one that cannot be
    /// read or decoded, or one learned for the other side; those cases are
    /// logged and never abort construction.
    pub fn load<R: SnapshotRepository + ?Sized>(
        side: Player,
        config: ValueFunctionConfig,
        repository: &R,
        path: &Path,
    ) -> Self {
        match repository.load(path) {
            Ok(Some(snapshot)) if snapshot.side == side => {
                info!(
                    "loaded {} values ({} games) from {}",
                    snapshot.values.len(),
                    snapshot.games_trained,
                    path.display()
                );
                Self::from_snapshot(snapshot, config)
            }
            Ok(Some(snapshot)) => {
                warn!(
                    "value snapshot {} was learned for {}, not {side}; starting with an empty table",
                    path.display(),
                    snapshot.side
                );
                Self::new(side, config)
            }
            Ok(None) => Self::new(side, config),
            Err(e) => {
                warn!("{e}; starting with an empty value table");
                Self::new(side, config)
            }
        }
    }

    /// Write the current table to `path`.
    pub fn save<R: SnapshotRepository + ?Sized>(&self, repository: &R, path: &Path) -> Result<()> {
        repository.save(&self.snapshot(), path)
    }

    pub fn snapshot(&self) -> ValueSnapshot {
        ValueSnapshot::new(self.side, self.games_trained, self.values.clone())
    }

    pub fn side(&self) -> Player {
        self.side
    }

    pub fn config(&self) -> &ValueFunctionConfig {
        &self.config
    }

    pub fn values(&self) -> &TranspositionCache<f64> {
        &self.values
    }

    pub fn games_trained(&self) -> usize {
        self.games_trained
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    /// Stored value of `board` for this agent's side, 0.0 if unseen.
    pub fn value<B: Board>(&self, board: &B) -> f64 {
        self.values.get(board).copied().unwrap_or(0.0)
    }

    /// Apply one TD(0) update for the ply `before` -> `after`.
    pub fn transition<B: Board>(&mut self, before: &B, after: &B) {
        if let Some(outcome) = after.outcome() {
            self.values.set(after, outcome.score_for(self.side));
        }
        let target = self.value(after);
        let alpha = self.config.alpha;
        let value = self.values.get_or_insert(before, 0.0);
        *value = (1.0 - alpha) * *value + alpha * target;
    }

    /// Self-play `games` games from `start`, this agent choosing for both
    /// sides with the training exploration rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `start` is terminal.
    pub fn train<B: Board>(&mut self, start: &B, games: usize) -> Result<TrainingSummary> {
        self.run_training(start, games, None)
    }

    /// Train against `opponent`, which moves whenever it is not this agent's
    /// side to play.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PreconditionViolation`] if `start` is terminal, or
    /// any error the opponent raises.
    pub fn train_against<B: Board>(
        &mut self,
        start: &B,
        opponent: &mut dyn Agent<B>,
        games: usize,
    ) -> Result<TrainingSummary> {
        self.run_training(start, games, Some(opponent))
    }

    fn run_training<B: Board>(
        &mut self,
        start: &B,
        games: usize,
        mut opponent: Option<&mut dyn Agent<B>>,
    ) -> Result<TrainingSummary> {
        if start.is_terminal() {
            return Err(Error::precondition("training from a finished game"));
        }

        let play_epsilon = self.epsilon;
        self.epsilon = self.config.exploration;
        let (mut wins, mut draws, mut losses) = (0, 0, 0);
        let mut result = Ok(());
        for _ in 0..games {
            let opponent = opponent.as_mut().map(|o| &mut **o as &mut dyn Agent<B>);
            match self.training_game(start, opponent) {
                Ok(outcome) => match outcome.winner() {
                    None => draws += 1,
                    Some(winner) if winner == self.side => wins += 1,
                    Some(_) => losses += 1,
                },
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
            self.games_trained += 1;
        }
        self.epsilon = play_epsilon;
        result?;

        let summary = TrainingSummary::new(wins + draws + losses, wins, draws, losses);
        info!(
            "trained {} games as {}: {} wins, {} draws, {} losses ({} positions)",
            summary.total_games,
            self.side,
            wins,
            draws,
            losses,
            self.values.len()
        );
        Ok(summary)
    }

    fn training_game<B: Board>(
        &mut self,
        start: &B,
        mut opponent: Option<&mut dyn Agent<B>>,
    ) -> Result<GameOutcome> {
        let mut board = start.clone();
        loop {
            let before = board.clone();
            let mv = match opponent.as_deref_mut() {
                Some(opponent) if board.mover() != self.side => opponent.choose_move(&board)?,
                _ => self.select_move(&board)?,
            };
            board.apply(mv)?;
            self.transition(&before, &board);
            if let Some(outcome) = board.outcome() {
                return Ok(outcome);
            }
        }
    }

    /// Epsilon-greedy choice. The side to move maximizes this agent's value
    /// when it is the agent's own side and minimizes it otherwise; ties are
    /// broken uniformly at random.
    fn select_move<B: Board>(&mut self, board: &B) -> Result<B::Move> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(Error::precondition(
                "value-function agent asked to move on a finished game",
            ));
        }
        if self.rng.random::<f64>() < self.epsilon {
            if let Some(&mv) = moves.choose(&mut self.rng) {
                return Ok(mv);
            }
        }

        let sign = if board.mover() == self.side { 1.0 } else { -1.0 };
        let mut best = f64::NEG_INFINITY;
        let mut candidates = Vec::new();
        for mv in moves {
            let value = sign * self.value(&board.clone_with(mv)?);
            if value > best {
                best = value;
                candidates.clear();
                candidates.push(mv);
            } else if value == best {
                candidates.push(mv);
            }
        }
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| Error::precondition("no candidate move"))
    }
}

impl<B: Board> Agent<B> for ValueFunctionAgent {
    fn choose_move(&mut self, board: &B) -> Result<B::Move> {
        self.select_move(board)
    }

    fn name(&self) -> &str {
        "value-function"
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
