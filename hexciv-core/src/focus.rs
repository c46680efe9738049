//! Selection and active-path state

use serde::Serialize;

use crate::coord::HexCoordinate;
use crate::pathfinder::PathHex;
use crate::unit::UnitId;

/// What the player has selected. Clearing the path always clears the
/// selection with it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FocusState {
    focus_hex: Option<HexCoordinate>,
    current_unit: Option<UnitId>,
    path: Option<Vec<PathHex>>,
}

impl FocusState {
    pub fn focus_hex(&self) -> Option<HexCoordinate> {
        self.focus_hex
    }

    pub fn current_unit(&self) -> Option<UnitId> {
        self.current_unit
    }

    pub fn path(&self) -> Option<&[PathHex]> {
        self.path.as_deref()
    }

    pub fn is_focused(&self) -> bool {
        self.focus_hex.is_some()
    }

    pub(crate) fn focus(&mut self, hex: HexCoordinate, unit: UnitId) {
        self.focus_hex = Some(hex);
        self.current_unit = Some(unit);
    }

    /// Set or clear the active path. `None` also drops the focus hex and
    /// current unit.
    pub fn set_path(&mut self, path: Option<Vec<PathHex>>) {
        if path.is_none() {
            self.reset();
        }
        self.path = path;
    }

    pub(crate) fn path_mut(&mut self) -> Option<&mut Vec<PathHex>> {
        self.path.as_mut()
    }

    pub(crate) fn move_focus(&mut self, hex: HexCoordinate) {
        if self.focus_hex.is_some() {
            self.focus_hex = Some(hex);
        }
    }

    pub fn reset(&mut self) {
        self.focus_hex = None;
        self.current_unit = None;
        self.path = None;
    }
}
