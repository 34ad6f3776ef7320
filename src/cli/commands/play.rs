//! Play command - One game between two agents, printed move by move

use anyhow::Result;
use clap::Parser;

use crate::{
    board::{Board, Player},
    cli::{
        config::{AgentKind, AgentOptions, CommonConfig, GameKind, build_agent},
        output::{BoardPrinter, print_kv, print_section},
    },
    fourplay::FourPlay,
    game::Game,
    tictactoe::TicTacToe,
};

#[derive(Parser, Debug)]
#[command(about = "Play a single game")]
pub struct PlayArgs {
    /// Game to play
    #[arg(long, value_enum, default_value_t = GameKind::TicTacToe)]
    pub game: GameKind,

    /// Agent playing X (moves first)
    #[arg(long, value_enum, default_value_t = AgentKind::Negamax)]
    pub x_agent: AgentKind,

    /// Agent playing O
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    pub o_agent: AgentKind,

    #[command(flatten)]
    pub agents: AgentOptions,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only print the final position
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    match args.game {
        GameKind::TicTacToe => run::<TicTacToe>(&args),
        GameKind::FourPlay => run::<FourPlay>(&args),
    }
}

fn run<B: Board>(args: &PlayArgs) -> Result<()> {
    let common = CommonConfig {
        seed: args.seed,
        progress: false,
    };
    let x = build_agent::<B>(args.x_agent, Player::X, &args.agents, common.seed_for(Player::X))?;
    let o = build_agent::<B>(args.o_agent, Player::O, &args.agents, common.seed_for(Player::O))?;
    let mut game = Game::new(x, o);

    if !args.quiet {
        println!("{}", game.board());
        game.add_observer(Box::new(BoardPrinter));
    }
    let outcome = game.play_to_end()?;
    if args.quiet {
        println!("{}", game.board());
    }

    print_section("Result");
    print_kv("X", game.agent(Player::X).name());
    print_kv("O", game.agent(Player::O).name());
    print_kv("Moves", &game.history().len().to_string());
    print_kv("Outcome", &outcome.to_string());
    Ok(())
}
