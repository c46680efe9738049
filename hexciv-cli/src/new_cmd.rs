//! New command - generate a map and starting units
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: generate_game(), save_game(), report_game()
//! - Level 3: summarize()

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hexciv_core::{GameConfig, GameState, HexCoordinate};

use crate::game_io::{generate_game, save_game};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct NewArgs {
    /// Save file to write
    #[arg(long, short, value_name = "FILE", default_value = "hexciv-save.json")]
    pub output: PathBuf,

    /// Output summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// One line of the summary per civilization
#[derive(Serialize)]
struct StartSummary {
    civilization: String,
    start: Option<HexCoordinate>,
    units: Vec<&'static str>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run new command
///
/// 1. Generate map and starting units
/// 2. Write the save file
/// 3. Report starting positions
pub fn run(args: NewArgs, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let game = generate_game(config, seed)?;
    save_game(&args.output, &game)?;

    tracing::info!("Wrote new game to {}", args.output.display());

    report_game(&game, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn report_game(game: &GameState, json: bool) -> Result<()> {
    let summary = summarize(game);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let bounds = game.map().bounds();
    println!("Map {}x{} ({} tiles)", bounds.width, bounds.height, game.map().len());
    for civ in &summary {
        match civ.start {
            Some(start) => println!("  {:<12} {} at {}", civ.civilization, civ.units.join(", "), start),
            None => println!("  {:<12} no starting position", civ.civilization),
        }
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn summarize(game: &GameState) -> Vec<StartSummary> {
    game.civilizations()
        .iter()
        .map(|civ| StartSummary {
            civilization: civ.name.clone(),
            start: civ.units().first().map(|u| u.position()),
            units: civ.units().iter().map(|u| u.name()).collect(),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
