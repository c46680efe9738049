//! Config and save-file plumbing shared by the commands

use std::path::Path;

use anyhow::{Context, Result};

use hexciv_core::{new_game, GameConfig, GameState, SaveGame};

/// Config from `path`, or defaults
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            let config = GameConfig::load(path)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}

/// Restore a game from a save file
pub fn load_game(path: &Path, config: GameConfig) -> Result<GameState> {
    let save = SaveGame::load(path)?;
    GameState::from_save(config, save)
        .with_context(|| format!("Invalid save: {}", path.display()))
}

/// Write a game to a save file
pub fn save_game(path: &Path, game: &GameState) -> Result<()> {
    game.to_save().save(path)
}

/// Fresh game from `seed`, or from a random seed that is logged so the map
/// can be reproduced
pub fn generate_game(config: GameConfig, seed: Option<u64>) -> Result<GameState> {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!("Generating map with seed {}", seed);
    let game = new_game(config, seed)?;
    Ok(game)
}
