//! Core error type

use crate::coord::HexCoordinate;
use crate::unit::{UnitClass, UnitId};
use crate::civ::CivId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid cube coordinate ({q}, {r}, {s}): q + r + s must be 0")]
    InvalidCoordinate { q: i32, r: i32, s: i32 },

    #[error("no tile at {0}")]
    OffMap(HexCoordinate),

    #[error("no path from {from} to {to}")]
    NoPathFound { from: HexCoordinate, to: HexCoordinate },

    #[error("unknown unit {0}")]
    UnknownUnit(UnitId),

    #[error("unknown civilization {0}")]
    UnknownCivilization(CivId),

    #[error("tile {coord} already holds a {class:?} unit")]
    TileOccupied { coord: HexCoordinate, class: UnitClass },

    #[error("no unit selected")]
    NoUnitSelected,

    #[error("invalid save: {0}")]
    InvalidSave(String),
}
