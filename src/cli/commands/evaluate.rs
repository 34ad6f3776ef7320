//! Evaluate command - Play a series of games and report outcome rates

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    board::{Board, Player},
    cli::{
        config::{AgentKind, AgentOptions, CommonConfig, GameKind, build_agent},
        output::{create_game_progress, format_count, print_kv, print_section},
    },
    fourplay::FourPlay,
    game::Game,
    series::{SeriesResult, play_series},
    tictactoe::TicTacToe,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate two agents over many games")]
pub struct EvaluateArgs {
    /// Game to play
    #[arg(long, value_enum, default_value_t = GameKind::TicTacToe)]
    pub game: GameKind,

    /// Agent playing X (moves first)
    #[arg(long, value_enum, default_value_t = AgentKind::Mcts)]
    pub x_agent: AgentKind,

    /// Agent playing O
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    pub o_agent: AgentKind,

    #[command(flatten)]
    pub agents: AgentOptions,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let result = match args.game {
        GameKind::TicTacToe => run::<TicTacToe>(&args)?,
        GameKind::FourPlay => run::<FourPlay>(&args)?,
    };

    print_section("Evaluation Results");
    print_kv("X", &result.x_agent);
    print_kv("O", &result.o_agent);
    print_kv("Total games", &result.total_games.to_string());
    print_kv("X wins", &format_count(result.x_wins, result.x_win_rate));
    print_kv("O wins", &format_count(result.o_wins, result.o_win_rate));
    print_kv("Draws", &format_count(result.draws, result.draw_rate));

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("failed to export results to {}", path.display()))?;
        println!("\n✓ Results exported to: {}", path.display());
    }
    Ok(())
}

fn run<B: Board>(args: &EvaluateArgs) -> Result<SeriesResult> {
    let common = CommonConfig {
        seed: args.seed,
        progress: !args.no_progress,
    };
    let x = build_agent::<B>(args.x_agent, Player::X, &args.agents, common.seed_for(Player::X))?;
    let o = build_agent::<B>(args.o_agent, Player::O, &args.agents, common.seed_for(Player::O))?;
    let mut game = Game::new(x, o);

    let pb = create_game_progress(args.games as u64, common.progress);
    let result = play_series(&mut game, args.games, |_, outcome| {
        pb.set_message(outcome.to_string());
        pb.inc(1);
    })?;
    pb.finish_and_clear();
    Ok(result)
}
