//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    board::{Board, Player},
    ports::MoveObserver,
};

/// Create a progress bar counting games
pub fn create_game_progress(total_games: u64, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Count with its share of the total, e.g. `7 (70.0%)`
pub fn format_count(count: usize, rate: f64) -> String {
    format!("{count} ({:.1}%)", rate * 100.0)
}

/// Prints the board after every move
#[derive(Debug, Default)]
pub struct BoardPrinter;

impl<B: Board> MoveObserver<B> for BoardPrinter {
    fn on_move(&mut self, mover: Player, mv: B::Move, board: &B) {
        println!("\n{mover} plays {mv}\n{board}");
    }

    fn on_reset(&mut self, board: &B) {
        println!("{board}");
    }
}
