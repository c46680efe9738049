//! Landscape, feature and improvement definitions

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Yield kinds a tile or civilization produces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YieldType {
    Food,
    Production,
    Science,
    Gold,
    Culture,
}

impl YieldType {
    pub const ALL: [YieldType; 5] = [
        YieldType::Food,
        YieldType::Production,
        YieldType::Science,
        YieldType::Gold,
        YieldType::Culture,
    ];
}

/// One amount per yield type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yields {
    pub food: i32,
    pub production: i32,
    pub science: i32,
    pub gold: i32,
    pub culture: i32,
}

impl Yields {
    pub const ZERO: Yields = Yields::new(0, 0, 0, 0, 0);

    pub const fn new(food: i32, production: i32, science: i32, gold: i32, culture: i32) -> Self {
        Self {
            food,
            production,
            science,
            gold,
            culture,
        }
    }

    pub fn get(&self, yield_type: YieldType) -> i32 {
        match yield_type {
            YieldType::Food => self.food,
            YieldType::Production => self.production,
            YieldType::Science => self.science,
            YieldType::Gold => self.gold,
            YieldType::Culture => self.culture,
        }
    }

    pub fn get_mut(&mut self, yield_type: YieldType) -> &mut i32 {
        match yield_type {
            YieldType::Food => &mut self.food,
            YieldType::Production => &mut self.production,
            YieldType::Science => &mut self.science,
            YieldType::Gold => &mut self.gold,
            YieldType::Culture => &mut self.culture,
        }
    }
}

impl Add for Yields {
    type Output = Yields;

    fn add(self, other: Yields) -> Yields {
        Yields {
            food: self.food + other.food,
            production: self.production + other.production,
            science: self.science + other.science,
            gold: self.gold + other.gold,
            culture: self.culture + other.culture,
        }
    }
}

impl AddAssign for Yields {
    fn add_assign(&mut self, other: Yields) {
        *self = *self + other;
    }
}

/// Which movement domain a tile belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Land,
    Water,
}

/// Base terrain of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landscape {
    Grassland = 0,
    Plains = 1,
    Desert = 2,
    Tundra = 3,
    Snow = 4,
    Hills = 5,
    Mountains = 6,
    Coast = 7,
    Ocean = 8,
}

/// Landscape definition
#[derive(Clone, Debug)]
pub struct LandscapeType {
    pub name: &'static str,
    pub surface: Surface,
    /// None = impassable to every unit
    pub movement_cost: Option<u32>,
    pub yields: Yields,
    pub colour: [u8; 3],
}

impl LandscapeType {
    const fn new(
        name: &'static str,
        surface: Surface,
        movement_cost: Option<u32>,
        yields: Yields,
        colour: [u8; 3],
    ) -> Self {
        Self {
            name,
            surface,
            movement_cost,
            yields,
            colour,
        }
    }
}

/// Indexed by `Landscape as usize`
pub static LANDSCAPE_TYPES: [LandscapeType; 9] = [
    LandscapeType::new("Grassland", Surface::Land, Some(1), Yields::new(2, 0, 0, 0, 0), [86, 160, 52]),
    LandscapeType::new("Plains", Surface::Land, Some(1), Yields::new(1, 1, 0, 0, 0), [170, 170, 80]),
    LandscapeType::new("Desert", Surface::Land, Some(1), Yields::ZERO, [230, 210, 140]),
    LandscapeType::new("Tundra", Surface::Land, Some(1), Yields::new(1, 0, 0, 0, 0), [140, 150, 130]),
    LandscapeType::new("Snow", Surface::Land, Some(1), Yields::ZERO, [240, 240, 250]),
    LandscapeType::new("Hills", Surface::Land, Some(2), Yields::new(0, 2, 0, 0, 0), [130, 110, 60]),
    LandscapeType::new("Mountains", Surface::Land, None, Yields::ZERO, [100, 90, 90]),
    LandscapeType::new("Coast", Surface::Water, Some(1), Yields::new(1, 0, 0, 1, 0), [70, 130, 200]),
    LandscapeType::new("Ocean", Surface::Water, Some(1), Yields::new(1, 0, 0, 0, 0), [30, 60, 150]),
];

impl Landscape {
    pub const ALL: [Landscape; 9] = [
        Landscape::Grassland,
        Landscape::Plains,
        Landscape::Desert,
        Landscape::Tundra,
        Landscape::Snow,
        Landscape::Hills,
        Landscape::Mountains,
        Landscape::Coast,
        Landscape::Ocean,
    ];

    pub fn info(self) -> &'static LandscapeType {
        &LANDSCAPE_TYPES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn is_water(self) -> bool {
        self.info().surface == Surface::Water
    }

    /// Look up by display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Landscape> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(name))
    }
}

/// Natural feature layered on a landscape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Forest = 0,
    Jungle = 1,
    Marsh = 2,
    Oasis = 3,
    River = 4,
    Floodplains = 5,
}

#[derive(Clone, Debug)]
pub struct FeatureType {
    pub name: &'static str,
    pub extra_movement: u32,
    pub yields: Yields,
}

pub static FEATURE_TYPES: [FeatureType; 6] = [
    FeatureType { name: "Forest", extra_movement: 1, yields: Yields::new(0, 1, 0, 0, 0) },
    FeatureType { name: "Jungle", extra_movement: 1, yields: Yields::new(1, 0, 0, 0, 0) },
    FeatureType { name: "Marsh", extra_movement: 1, yields: Yields::ZERO },
    FeatureType { name: "Oasis", extra_movement: 0, yields: Yields::new(3, 0, 0, 1, 0) },
    FeatureType { name: "River", extra_movement: 0, yields: Yields::new(0, 0, 0, 1, 0) },
    FeatureType { name: "Floodplains", extra_movement: 0, yields: Yields::new(2, 0, 0, 0, 0) },
];

impl Feature {
    pub fn info(self) -> &'static FeatureType {
        &FEATURE_TYPES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}

/// Worker-built tile improvement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Improvement {
    Farm = 0,
    Mine = 1,
    TradingPost = 2,
    Camp = 3,
    FishingBoats = 4,
}

#[derive(Clone, Debug)]
pub struct ImprovementType {
    pub name: &'static str,
    pub yields: Yields,
}

pub static IMPROVEMENT_TYPES: [ImprovementType; 5] = [
    ImprovementType { name: "Farm", yields: Yields::new(1, 0, 0, 0, 0) },
    ImprovementType { name: "Mine", yields: Yields::new(0, 1, 0, 0, 0) },
    ImprovementType { name: "Trading Post", yields: Yields::new(0, 0, 0, 1, 0) },
    ImprovementType { name: "Camp", yields: Yields::new(0, 0, 0, 1, 0) },
    ImprovementType { name: "Fishing Boats", yields: Yields::new(1, 0, 0, 0, 0) },
];

impl Improvement {
    pub fn info(self) -> &'static ImprovementType {
        &IMPROVEMENT_TYPES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }
}
