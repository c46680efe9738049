//! HEXCIV Core - Hex-grid strategy game engine
//!
//! This crate provides the core game logic for HEXCIV:
//! - Hex geometry (cube coordinates, pixel layout)
//! - Terrain, features and yields
//! - Units, civilizations and turn advancement
//! - Weighted pathfinding with domain switching
//! - Selection state, save files and map generation

pub mod coord;
pub mod error;
pub mod layout;
pub mod terrain;
pub mod tile;
pub mod map;
pub mod unit;
pub mod civ;
pub mod pathfinder;
pub mod turn;
pub mod focus;
pub mod config;
pub mod state;
pub mod save;
pub mod mapgen;

// Re-exports for convenient access
pub use coord::{HexCoordinate, DIRECTIONS};
pub use error::CoreError;
pub use layout::{FractionalHex, Layout, Orientation, OrientationKind, Point, FLAT_TOP, POINTY_TOP};
pub use terrain::{Feature, Improvement, Landscape, Surface, YieldType, Yields};
pub use tile::Tile;
pub use map::{HexMap, MapBounds};
pub use unit::{MovementDomain, Unit, UnitClass, UnitId, UnitKind, UNIT_TYPES};
pub use civ::{CivId, Civilization};
pub use pathfinder::{find_path, PathHex, PathRequest};
pub use turn::{TurnCounting, TurnEngine, TurnPhase};
pub use focus::FocusState;
pub use config::{CivSetup, GameConfig};
pub use state::{CivSummary, GameState, HexInspection, NoHooks, TurnHooks, TurnOutcome, TurnReport, UnitSummary};
pub use save::SaveGame;
pub use mapgen::new_game;
