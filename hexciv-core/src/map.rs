//! The hex map: coordinate -> tile

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::coord::HexCoordinate;
use crate::tile::Tile;

/// Sparse hex map. A coordinate with no entry is off-map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "MapRecord", into = "MapRecord")]
pub struct HexMap {
    tiles: FxHashMap<HexCoordinate, Tile>,
    bounds: MapBounds,
}

/// Map dimensions in hexes, used for viewport scroll limits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapBounds {
    pub width: u32,
    pub height: u32,
}

impl MapBounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// How far a pointy-top map of this width overflows the screen horizontally
    pub fn adjusted_width(&self, screen_width: u32, hex_radius: f64) -> i32 {
        (3f64.sqrt() * hex_radius * self.width as f64 - screen_width as f64) as i32
    }

    /// How far the map overflows the screen vertically
    pub fn adjusted_height(&self, screen_height: u32, hex_radius: f64) -> i32 {
        (self.height as f64 * hex_radius * 3.0 / 2.0 - screen_height as f64 + hex_radius) as i32
    }
}

/// Persisted form: bounds plus tiles in coordinate order
#[derive(Serialize, Deserialize)]
struct MapRecord {
    #[serde(default)]
    bounds: MapBounds,
    tiles: Vec<Tile>,
}

impl From<MapRecord> for HexMap {
    fn from(record: MapRecord) -> Self {
        let mut map = HexMap::with_bounds(record.bounds);
        for tile in record.tiles {
            map.set_hex(tile);
        }
        map
    }
}

impl From<HexMap> for MapRecord {
    fn from(map: HexMap) -> Self {
        let mut tiles: Vec<Tile> = map.tiles.into_values().collect();
        tiles.sort_by_key(|t| t.coord);
        MapRecord {
            bounds: map.bounds,
            tiles,
        }
    }
}

impl HexMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(bounds: MapBounds) -> Self {
        Self {
            tiles: FxHashMap::default(),
            bounds,
        }
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    /// Tile at a coordinate; None when off-map
    pub fn get_hex(&self, coord: HexCoordinate) -> Option<&Tile> {
        self.tiles.get(&coord)
    }

    pub fn get_hex_mut(&mut self, coord: HexCoordinate) -> Option<&mut Tile> {
        self.tiles.get_mut(&coord)
    }

    /// Insert or replace the tile at `tile.coord`
    pub fn set_hex(&mut self, tile: Tile) -> Option<Tile> {
        self.tiles.insert(tile.coord, tile)
    }

    pub fn contains(&self, coord: HexCoordinate) -> bool {
        self.tiles.contains_key(&coord)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// On-map neighbors, in direction order
    pub fn neighbors(&self, coord: HexCoordinate) -> Vec<HexCoordinate> {
        coord
            .neighbors()
            .into_iter()
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// All tiles in coordinate order
    pub fn tiles(&self) -> Vec<&Tile> {
        let mut tiles: Vec<&Tile> = self.tiles.values().collect();
        tiles.sort_by_key(|t| t.coord);
        tiles
    }

    /// Existing tiles within `bound` of `center` on every cube axis,
    /// dq-major then dr. This is the per-frame grid sweep.
    pub fn sweep(&self, center: HexCoordinate, bound: i32) -> Vec<&Tile> {
        let mut out = Vec::new();
        for dq in -bound..=bound {
            let dr_min = (-bound).max(-dq - bound);
            let dr_max = bound.min(-dq + bound);
            for dr in dr_min..=dr_max {
                let coord = center + HexCoordinate::new(dq, dr);
                if let Some(tile) = self.tiles.get(&coord) {
                    out.push(tile);
                }
            }
        }
        out
    }
}
