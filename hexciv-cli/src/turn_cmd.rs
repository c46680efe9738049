//! Turn command - advance a saved game
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: advance_turns(), report_turns()

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hexciv_core::{Civilization, GameConfig, GameState, TurnHooks, TurnOutcome, TurnReport};

use crate::game_io::{load_game, save_game};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct TurnArgs {
    /// Save file to advance (rewritten in place)
    #[arg(long, value_name = "FILE")]
    pub save: PathBuf,

    /// Number of turns to advance
    #[arg(long, default_value = "1")]
    pub count: u32,

    /// Output reports as JSON
    #[arg(long)]
    pub json: bool,
}

/// Logs each culture advancement as it happens
struct AdvancementLog;

impl TurnHooks for AdvancementLog {
    fn on_advancement(&mut self, civ: &Civilization) {
        tracing::info!(
            "{} may adopt a new policy ({} taken, next at {} culture)",
            civ.name,
            civ.policies(),
            civ.culture_required()
        );
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run turn command
///
/// 1. Load the save
/// 2. Advance the requested turns
/// 3. Write the save back and report
pub fn run(args: TurnArgs, config: GameConfig) -> Result<()> {
    let mut game = load_game(&args.save, config)?;

    let reports = advance_turns(&mut game, args.count);
    save_game(&args.save, &game)?;

    report_turns(&game, &reports, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn advance_turns(game: &mut GameState, count: u32) -> Vec<TurnReport> {
    let mut hooks = AdvancementLog;
    (0..count)
        .filter_map(|_| match game.advance_turn(&mut hooks) {
            TurnOutcome::Advanced(report) => Some(report),
            TurnOutcome::Ignored => None,
        })
        .collect()
}

fn report_turns(game: &GameState, reports: &[TurnReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    for report in reports {
        println!(
            "Turn {}: {} units, {} advancements",
            report.turn,
            report.units_processed,
            report.advancements.len()
        );
    }
    for civ in game.civilizations() {
        if let Some(hud) = game.hud(civ.id) {
            println!(
                "  {:<12} science +{}  gold {} (+{})  culture {}/{} (+{})",
                hud.name,
                hud.science_per_turn,
                hud.gold_total,
                hud.gold_per_turn,
                hud.culture_total,
                hud.culture_required,
                hud.culture_per_turn
            );
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
