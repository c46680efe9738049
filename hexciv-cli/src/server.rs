//! Server command - start the renderer API server
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: configure_server(), start_server()
//! - Level 3: (delegated to hexciv-server crate)
//! - Level 4: configuration validation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use hexciv_core::{GameConfig, GameState};
use hexciv_server::{run_server, ServerConfig};

use crate::game_io::{generate_game, load_game};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8002")]
    pub port: u16,

    /// Directory containing static files for the renderer
    #[arg(long, default_value = "hexciv/renderer")]
    pub static_dir: PathBuf,

    /// Save file to serve (a new game is generated when omitted)
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run server command
///
/// 1. Configure server
/// 2. Load or generate the game
/// 3. Start server (blocking)
pub fn run(args: ServerArgs, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let server_config = configure_server(&args)?;

    let game = match &args.save {
        Some(path) => load_game(path, config)?,
        None => generate_game(config, seed)?,
    };

    tracing::info!(
        "Starting HEXCIV server on port {} at turn {}",
        server_config.port,
        game.turn()
    );

    start_server(server_config, game)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Configure server from command arguments
fn configure_server(args: &ServerArgs) -> Result<ServerConfig> {
    validate_static_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().to_string(),
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig, game: GameState) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(config, game))
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Validate that static directory exists
fn validate_static_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Server will start but may not serve files.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!(
            "Static path exists but is not a directory: {}",
            path.display()
        );
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
