//! Train command - Teach a value-function agent by self-play or against an opponent

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::MsgPackRepository,
    agents::{TrainingSummary, ValueFunctionAgent},
    board::{Board, Player},
    cli::{
        config::{AgentKind, AgentOptions, CommonConfig, GameKind, Side, build_agent},
        output::{create_game_progress, format_count, print_kv, print_section},
    },
    config::ValueFunctionConfig,
    fourplay::FourPlay,
    tictactoe::TicTacToe,
};

/// Training runs are split into this many batches for progress reporting
const BATCHES: usize = 20;

#[derive(Parser, Debug)]
#[command(about = "Train a value-function agent")]
pub struct TrainArgs {
    /// Value table to resume from and write back to
    pub table: PathBuf,

    /// Game to train on
    #[arg(long, value_enum, default_value_t = GameKind::TicTacToe)]
    pub game: GameKind,

    /// Side the table is learned for
    #[arg(long, value_enum, default_value_t = Side::X)]
    pub side: Side,

    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 1000)]
    pub games: usize,

    /// Opponent to train against (self-play when omitted)
    #[arg(long, value_enum)]
    pub opponent: Option<AgentKind>,

    #[command(flatten)]
    pub agents: AgentOptions,

    /// TD(0) step size
    #[arg(long, default_value_t = ValueFunctionConfig::DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Random-move probability while training
    #[arg(long, default_value_t = ValueFunctionConfig::DEFAULT_EXPLORATION)]
    pub epsilon: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Write the training summary to a JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let summary = match args.game {
        GameKind::TicTacToe => run::<TicTacToe>(&args)?,
        GameKind::FourPlay => run::<FourPlay>(&args)?,
    };

    print_section("Training Results");
    print_kv("Total games", &summary.total_games.to_string());
    print_kv("Wins", &format_count(summary.wins, summary.win_rate));
    print_kv("Draws", &format_count(summary.draws, summary.draw_rate));
    print_kv("Losses", &format_count(summary.losses, summary.loss_rate));
    print_kv("Table", &args.table.display().to_string());

    if let Some(path) = &args.summary {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("\n✓ Summary written to: {}", path.display());
    }
    Ok(())
}

fn run<B: Board>(args: &TrainArgs) -> Result<TrainingSummary> {
    let side = Player::from(args.side);
    let common = CommonConfig {
        seed: args.seed,
        progress: !args.no_progress,
    };
    let mut config = ValueFunctionConfig::new()
        .with_alpha(args.alpha)
        .with_exploration(args.epsilon);
    if let Some(seed) = common.seed_for(side) {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let repository = MsgPackRepository::new();
    let mut agent = ValueFunctionAgent::load(side, config, &repository, &args.table);
    let mut opponent = args
        .opponent
        .map(|kind| {
            build_agent::<B>(
                kind,
                side.opponent(),
                &args.agents,
                common.seed_for(side.opponent()),
            )
        })
        .transpose()?;

    let start = B::default();
    let batch = args.games.div_ceil(BATCHES).max(1);
    let pb = create_game_progress(args.games as u64, common.progress);
    let (mut wins, mut draws, mut losses) = (0, 0, 0);
    let mut remaining = args.games;
    while remaining > 0 {
        let games = batch.min(remaining);
        let part = match opponent.as_mut() {
            Some(opponent) => agent.train_against(&start, &mut **opponent, games)?,
            None => agent.train(&start, games)?,
        };
        wins += part.wins;
        draws += part.draws;
        losses += part.losses;
        remaining -= games;
        pb.inc(games as u64);
        pb.set_message(format!("{} positions", agent.values().len()));
    }
    pb.finish_and_clear();

    agent
        .save(&repository, &args.table)
        .with_context(|| format!("failed to save value table to {}", args.table.display()))?;
    Ok(TrainingSummary::new(wins + draws + losses, wins, draws, losses))
}
