//! HEXCIV CLI - Command-line interface
//!
//! Commands:
//! - new: Generate a map and starting units, write a save file
//! - inspect: Show one tile of a saved game
//! - path: Plan a unit's path in a saved game
//! - turn: Advance a saved game by one or more turns
//! - serve: Start the renderer API server

mod game_io;
mod inspect;
mod new_cmd;
mod path_cmd;
mod server;
mod turn_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexciv")]
#[command(about = "HEXCIV hex-grid strategy engine")]
struct Cli {
    /// Game config JSON file (defaults apply when omitted)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed for map generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new game
    New(new_cmd::NewArgs),
    /// Inspect a tile
    Inspect(inspect::InspectArgs),
    /// Plan a path for a unit
    Path(path_cmd::PathArgs),
    /// Advance turns
    Turn(turn_cmd::TurnArgs),
    /// Start the renderer API server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = game_io::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::New(args) => new_cmd::run(args, config, cli.seed),
        Commands::Inspect(args) => inspect::run(args, config),
        Commands::Path(args) => path_cmd::run(args, config),
        Commands::Turn(args) => turn_cmd::run(args, config),
        Commands::Serve(args) => server::run(args, config, cli.seed),
    }
}

/// `RUST_LOG` wins unless `--verbose` is given
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
