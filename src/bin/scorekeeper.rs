//! Scorekeeper CLI - keep score for 400 and Trix at the terminal.
//!
//! Reads line commands from stdin (type `help` for the list) and prints
//! totals and the round history on `show`.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use trix_scorekeeper::core::{Game, ScorekeeperConfig, SeatId};
use trix_scorekeeper::session::{self, Scorekeeper};

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Keep score for the 400 and Trix card games")]
struct Args {
    /// JSON config file (undo_capacity, default_names, initial_game, initial_target)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Game to start with (400 or trix); overrides the config file
    #[arg(short, long)]
    game: Option<Game>,

    /// Target score
    #[arg(short, long)]
    target: Option<i64>,

    /// Seat names in table order (up to four)
    #[arg(short, long = "name", num_args = 1..=4)]
    names: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Warnings only unless asked; RUST_LOG still wins when set.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => ScorekeeperConfig::load(path)?,
        None => ScorekeeperConfig::default(),
    };
    if let Some(game) = args.game {
        config = config.with_initial_game(game);
    }
    if let Some(target) = args.target {
        config = config.with_initial_target(Some(target));
    }
    let game = config.initial_game;
    info!(undo_capacity = config.undo_capacity, "configuration loaded");

    let mut keeper = Scorekeeper::new(config);
    for (i, name) in args.names.iter().enumerate() {
        if let Some(seat) = SeatId::new(i) {
            keeper.rename_seat(seat, name);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", game.hint())?;
    writeln!(out, "Type 'help' for commands.")?;
    out.flush()?;

    let stdin = io::stdin();
    session::run(&mut keeper, stdin.lock(), &mut out)?;
    Ok(())
}
