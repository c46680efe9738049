//! A single map tile

use serde::{Deserialize, Serialize};

use crate::coord::HexCoordinate;
use crate::terrain::{Feature, Improvement, Landscape, Surface, YieldType, Yields};

/// Map tile. Occupying units are not stored here: `Unit::position` is
/// authoritative and `GameState::units_on` gives the per-tile view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub coord: HexCoordinate,
    pub landscape: Landscape,
    #[serde(default)]
    pub improvement: Option<Improvement>,
    #[serde(default)]
    features: Vec<Feature>,
}

impl Tile {
    pub fn new(coord: HexCoordinate, landscape: Landscape) -> Self {
        Self {
            coord,
            landscape,
            improvement: None,
            features: Vec::new(),
        }
    }

    /// Builder-style feature append (setup only)
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.add_feature(feature);
        self
    }

    /// Append a feature; duplicates are ignored
    pub fn add_feature(&mut self, feature: Feature) {
        if !self.features.contains(&feature) {
            self.features.push(feature);
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn surface(&self) -> Surface {
        self.landscape.info().surface
    }

    pub fn is_water(&self) -> bool {
        self.surface() == Surface::Water
    }

    /// Cost to enter this tile, or None when the landscape blocks all movement
    pub fn movement_cost(&self) -> Option<u32> {
        let base = self.landscape.info().movement_cost?;
        let extra: u32 = self.features.iter().map(|f| f.info().extra_movement).sum();
        Some(base + extra)
    }

    /// Landscape + features + improvement
    pub fn yields(&self) -> Yields {
        let mut total = self.landscape.info().yields;
        for feature in &self.features {
            total += feature.info().yields;
        }
        if let Some(improvement) = self.improvement {
            total += improvement.info().yields;
        }
        total
    }

    pub fn yield_total(&self, yield_type: YieldType) -> i32 {
        self.yields().get(yield_type)
    }
}
