//! Random map generation and starting positions

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;

use crate::config::GameConfig;
use crate::coord::HexCoordinate;
use crate::error::CoreError;
use crate::map::{HexMap, MapBounds};
use crate::state::GameState;
use crate::terrain::{Feature, Landscape};
use crate::tile::Tile;
use crate::unit::UnitKind;

/// Minimum hex distance between two civilizations' starts, when the map allows
const START_SPACING: i32 = 6;

/// Axial coordinate of an odd-row-offset grid cell
pub fn offset_to_hex(col: i32, row: i32) -> HexCoordinate {
    HexCoordinate::new(col - (row - (row & 1)) / 2, row)
}

/// Fill a `width` x `height` rectangle (odd-r offset) with land masses,
/// coasts and features.
pub fn generate<R: Rng>(rng: &mut R, width: u32, height: u32) -> HexMap {
    let (w, h) = (width as i32, height as i32);
    let mut map = HexMap::with_bounds(MapBounds::new(width, height));

    // Level 1: land mask grown from random seeds
    let cells: Vec<(i32, i32)> = (0..h).flat_map(|row| (0..w).map(move |col| (col, row))).collect();
    let mut land = FxHashSet::default();
    let seeds = ((width * height) / 80).max(2);
    if w > 2 && h > 2 {
        for _ in 0..seeds {
            let center = offset_to_hex(rng.gen_range(1..w - 1), rng.gen_range(1..h - 1));
            let radius = rng.gen_range(2..=5);
            for coord in center.spiral(radius) {
                land.insert(coord);
            }
        }
    }

    // Level 2: landscapes by latitude, edges stay ocean
    for &(col, row) in &cells {
        let coord = offset_to_hex(col, row);
        let edge = col == 0 || row == 0 || col == w - 1 || row == h - 1;
        let landscape = if edge || !land.contains(&coord) {
            Landscape::Ocean
        } else {
            land_landscape(rng, row, h)
        };
        map.set_hex(Tile::new(coord, landscape));
    }

    // Level 3: shallow water next to land
    let coast: Vec<HexCoordinate> = map
        .tiles()
        .into_iter()
        .filter(|t| t.landscape == Landscape::Ocean)
        .filter(|t| {
            map.neighbors(t.coord)
                .into_iter()
                .any(|n| map.get_hex(n).is_some_and(|n| !n.is_water()))
        })
        .map(|t| t.coord)
        .collect();
    for coord in coast {
        map.set_hex(Tile::new(coord, Landscape::Coast));
    }

    // Level 4: features
    for &(col, row) in &cells {
        let coord = offset_to_hex(col, row);
        let Some(tile) = map.get_hex_mut(coord) else {
            continue;
        };
        if let Some(feature) = roll_feature(rng, tile.landscape) {
            tile.add_feature(feature);
        }
    }

    let land_count = map.tiles().iter().filter(|t| !t.is_water()).count();
    tracing::info!(
        "Generated {}x{} map: {} land, {} water",
        width,
        height,
        land_count,
        map.len() - land_count
    );
    map
}

fn land_landscape<R: Rng>(rng: &mut R, row: i32, height: i32) -> Landscape {
    let polar = (height / 10).max(1);
    if row <= polar || row >= height - 1 - polar {
        return if rng.gen_bool(0.5) {
            Landscape::Snow
        } else {
            Landscape::Tundra
        };
    }
    match rng.gen_range(0..100) {
        0..=34 => Landscape::Grassland,
        35..=64 => Landscape::Plains,
        65..=74 => Landscape::Desert,
        75..=89 => Landscape::Hills,
        _ => Landscape::Mountains,
    }
}

fn roll_feature<R: Rng>(rng: &mut R, landscape: Landscape) -> Option<Feature> {
    let roll = rng.gen_range(0..100);
    match landscape {
        Landscape::Grassland => match roll {
            0..=14 => Some(Feature::Forest),
            15..=22 => Some(Feature::Jungle),
            23..=27 => Some(Feature::Marsh),
            28..=35 => Some(Feature::River),
            _ => None,
        },
        Landscape::Plains | Landscape::Tundra => match roll {
            0..=19 => Some(Feature::Forest),
            20..=27 => Some(Feature::River),
            _ => None,
        },
        Landscape::Hills => (roll < 20).then_some(Feature::Forest),
        Landscape::Desert => match roll {
            0..=7 => Some(Feature::Oasis),
            8..=15 => Some(Feature::Floodplains),
            _ => None,
        },
        _ => None,
    }
}

/// Generate a map from `config` and `seed`, add the configured
/// civilizations and give each a Settler and a Warrior on open land.
pub fn new_game(config: GameConfig, seed: u64) -> Result<GameState, CoreError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let map = generate(&mut rng, config.map_width, config.map_height);
    let setups = config.civilizations.clone();
    let mut state = GameState::new(config, map);

    let mut candidates: Vec<HexCoordinate> = state
        .map()
        .tiles()
        .into_iter()
        .filter(|t| !t.is_water() && t.movement_cost().is_some())
        .map(|t| t.coord)
        .collect();
    candidates.shuffle(&mut rng);

    let mut starts: Vec<HexCoordinate> = Vec::new();
    for setup in &setups {
        let name = setup.name();
        let civ = match setup.plural() {
            Some(plural) => state.add_named_civilization(name, plural),
            None => state.add_civilization(name),
        };
        let start = candidates
            .iter()
            .copied()
            .find(|c| !starts.contains(c) && starts.iter().all(|s| s.distance(*c) >= START_SPACING))
            .or_else(|| candidates.iter().copied().find(|c| !starts.contains(c)));
        let Some(start) = start else {
            tracing::warn!("No open land left for {}", name);
            continue;
        };
        starts.push(start);
        state.spawn_unit(civ, UnitKind::Settler, start)?;
        state.spawn_unit(civ, UnitKind::Warrior, start)?;
        tracing::debug!("{} starts at {}", name, start);
    }

    Ok(state)
}
