//! Game configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::layout::{Layout, OrientationKind, Point};
use crate::map::MapBounds;
use crate::terrain::Yields;
use crate::turn::TurnCounting;

/// Game configuration. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Hex radius in pixels
    pub hex_radius: f64,
    pub orientation: OrientationKind,
    /// Map width in hexes
    pub map_width: u32,
    /// Map height in hexes
    pub map_height: u32,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Half-width of the grid sweep window, in hexes
    pub sweep_bound: i32,
    pub base_culture_required: i32,
    /// Income every civilization gets before worked tiles
    pub base_yields: Yields,
    pub embark_cost: u32,
    pub turn_counting: TurnCounting,
    pub civilizations: Vec<CivSetup>,
}

/// A civilization to create: a bare name, or a name with its plural
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CivSetup {
    Name(String),
    Named { name: String, plural: String },
}

impl CivSetup {
    pub fn name(&self) -> &str {
        match self {
            CivSetup::Name(name) | CivSetup::Named { name, .. } => name,
        }
    }

    pub fn plural(&self) -> Option<&str> {
        match self {
            CivSetup::Name(_) => None,
            CivSetup::Named { plural, .. } => Some(plural.as_str()),
        }
    }
}

impl From<&str> for CivSetup {
    fn from(name: &str) -> Self {
        CivSetup::Name(name.to_string())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hex_radius: 32.0,
            orientation: OrientationKind::Pointy,
            map_width: 40,
            map_height: 24,
            screen_width: 1280,
            screen_height: 720,
            sweep_bound: 8,
            base_culture_required: 100,
            base_yields: Yields::new(0, 0, 1, 2, 2),
            embark_cost: 1,
            turn_counting: TurnCounting::PerTurn,
            civilizations: vec!["Roman".into(), "Greek".into()],
        }
    }
}

impl GameConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        if config.hex_radius <= 0.0 {
            anyhow::bail!("hex_radius must be positive, got {}", config.hex_radius);
        }
        Ok(config)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Layout with size and origin both at the hex radius
    pub fn layout(&self) -> Layout {
        let r = self.hex_radius;
        Layout::new(self.orientation.orientation(), Point::new(r, r), Point::new(r, r))
    }

    pub fn bounds(&self) -> MapBounds {
        MapBounds::new(self.map_width, self.map_height)
    }

    pub fn adjusted_width(&self) -> i32 {
        self.bounds().adjusted_width(self.screen_width, self.hex_radius)
    }

    pub fn adjusted_height(&self) -> i32 {
        self.bounds().adjusted_height(self.screen_height, self.hex_radius)
    }
}
