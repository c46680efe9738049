//! Inspect command - show one tile of a saved game

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hexciv_core::{GameConfig, HexCoordinate, HexInspection};

use crate::game_io::load_game;

#[derive(Args)]
pub struct InspectArgs {
    /// Save file to read
    #[arg(long, value_name = "FILE")]
    pub save: PathBuf,

    #[arg(long, allow_hyphen_values = true)]
    pub q: i32,

    #[arg(long, allow_hyphen_values = true)]
    pub r: i32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InspectArgs, config: GameConfig) -> Result<()> {
    let game = load_game(&args.save, config)?;
    let coord = HexCoordinate::new(args.q, args.r);

    let Some(info) = game.inspect(coord) else {
        anyhow::bail!("No tile at {}", coord);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", format_inspection(&info));
    }
    Ok(())
}

/// Text block matching the in-game inspect overlay
fn format_inspection(info: &HexInspection) -> String {
    let mut out = format!("Hex {}\n", info.coord);
    out.push_str(&format!("  Landscape:   {}\n", info.landscape));
    if let Some(improvement) = info.improvement {
        out.push_str(&format!("  Improvement: {}\n", improvement));
    }
    if !info.features.is_empty() {
        out.push_str(&format!("  Features:    {}\n", info.features.join(", ")));
    }
    out.push_str(&format!(
        "  Yields:      food {}, production {}, science {}, gold {}\n",
        info.yields.food, info.yields.production, info.yields.science, info.yields.gold
    ));
    for unit in &info.units {
        out.push_str(&format!(
            "  {} {} (strength {}, movement {}/{})\n",
            unit.owner, unit.name, unit.strength, unit.movement_potential, unit.total_movement
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexciv_core::{Feature, GameState, HexMap, Landscape, Tile, UnitKind};

    #[test]
    fn test_format_inspection() {
        let mut map = HexMap::new();
        map.set_hex(Tile::new(HexCoordinate::ORIGIN, Landscape::Plains).with_feature(Feature::Forest));
        let mut game = GameState::new(GameConfig::default(), map);
        let civ = game.add_civilization("Greek");
        game.spawn_unit(civ, UnitKind::Scout, HexCoordinate::ORIGIN).unwrap();

        let text = format_inspection(&game.inspect(HexCoordinate::ORIGIN).unwrap());
        assert!(text.contains("Landscape:   Plains"));
        assert!(text.contains("Features:    Forest"));
        assert!(text.contains("food 1, production 2"));
        assert!(text.contains("Greeks Scout (strength 5, movement 3/3)"));
        assert!(!text.contains("Improvement"));
    }
}
