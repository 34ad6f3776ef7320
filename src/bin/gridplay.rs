//! gridplay CLI - play, evaluate and train agents for tic-tac-toe and fourplay

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridplay")]
#[command(version, about = "Adversarial grid games and the agents that play them", long_about = None)]
struct Cli {
    /// Log search and training details
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game and print it move by move
    Play(gridplay::cli::commands::play::PlayArgs),

    /// Play a series of games and report outcome rates
    Evaluate(gridplay::cli::commands::evaluate::EvaluateArgs),

    /// Train a value-function agent and save its table
    Train(Box<gridplay::cli::commands::train::TrainArgs>),
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .format_timestamp(None)
    .target(env_logger::Target::Stderr)
    .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => gridplay::cli::commands::play::execute(args),
        Commands::Evaluate(args) => gridplay::cli::commands::evaluate::execute(args),
        Commands::Train(args) => gridplay::cli::commands::train::execute(*args),
    }
}
