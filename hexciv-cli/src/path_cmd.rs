//! Path command - plan a unit's path in a saved game

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hexciv_core::{GameConfig, HexCoordinate, PathHex, UnitId};

use crate::game_io::load_game;

#[derive(Args)]
pub struct PathArgs {
    /// Save file to read
    #[arg(long, value_name = "FILE")]
    pub save: PathBuf,

    /// Unit id
    #[arg(long)]
    pub unit: u32,

    /// Goal q
    #[arg(long, allow_hyphen_values = true)]
    pub q: i32,

    /// Goal r
    #[arg(long, allow_hyphen_values = true)]
    pub r: i32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PathArgs, config: GameConfig) -> Result<()> {
    let game = load_game(&args.save, config)?;
    let goal = HexCoordinate::new(args.q, args.r);
    let path = game.find_path(UnitId(args.unit), goal)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        print!("{}", format_path(&path));
    }
    Ok(())
}

fn format_path(path: &[PathHex]) -> String {
    let mut out = String::new();
    for (i, step) in path.iter().enumerate() {
        let note = if step.can_switch && !step.passable {
            " (embarked)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:>3}  {:<14} {:<10} cost {:>2}  total {:>3}{}\n",
            i,
            step.coord.to_string(),
            step.landscape.name(),
            step.cost,
            step.total_cost,
            note
        ));
    }
    out
}
