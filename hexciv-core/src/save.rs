//! Save files

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::civ::Civilization;
use crate::map::HexMap;

/// Everything that persists between sessions. Selection state does not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    pub map: HexMap,
    pub civilizations: Vec<Civilization>,
    pub turn: u32,
    #[serde(default)]
    pub next_unit_id: u32,
}

impl SaveGame {
    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read save: {}", path.display()))?;
        let save: SaveGame = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse save: {}", path.display()))?;
        Ok(save)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write save: {}", path.display()))?;
        tracing::info!("Saved turn {} to {}", self.turn, path.display());
        Ok(())
    }
}
