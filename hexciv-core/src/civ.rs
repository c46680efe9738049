//! Civilizations: unit rosters and yield accounting

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::terrain::{YieldType, Yields};
use crate::unit::{Unit, UnitId};

/// Civilization handle (index into `GameState::civilizations`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CivId(pub u8);

impl fmt::Display for CivId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "civ{}", self.0)
    }
}

/// A civilization
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Civilization {
    pub id: CivId,
    pub name: String,
    pub plural_name: String,
    pub colour: [u8; 3],
    /// Spawn order
    units: Vec<Unit>,
    /// Per-turn income
    per_turn: Yields,
    /// Cumulative totals
    totals: Yields,
    culture_required: i32,
    /// Advancements taken so far
    policies: u32,
}

impl Civilization {
    pub fn new(id: CivId, name: &str, culture_required: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            plural_name: plural_of(name),
            colour: default_colour(id),
            units: Vec::new(),
            per_turn: Yields::ZERO,
            totals: Yields::ZERO,
            culture_required,
            policies: 0,
        }
    }

    /// Replace the derived plural name
    pub fn with_plural(mut self, plural: &str) -> Self {
        self.plural_name = plural.to_string();
        self
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    pub(crate) fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }

    pub(crate) fn push_unit(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    /// Base income, before worked tiles
    pub fn yields_per_turn(&self) -> Yields {
        self.per_turn
    }

    pub fn set_yields_per_turn(&mut self, per_turn: Yields) {
        self.per_turn = per_turn;
    }

    pub fn set_yield_per_turn(&mut self, yield_type: YieldType, amount: i32) {
        *self.per_turn.get_mut(yield_type) = amount;
    }

    pub fn totals(&self) -> Yields {
        self.totals
    }

    pub fn set_totals(&mut self, totals: Yields) {
        self.totals = totals;
    }

    pub fn culture_required(&self) -> i32 {
        self.culture_required
    }

    pub fn policies(&self) -> u32 {
        self.policies
    }

    /// Accumulate one turn of income: the base income plus `worked`, what
    /// the civilization's tiles produced this turn. Returns true when the
    /// culture total reached the threshold and an advancement was taken; the
    /// threshold then grows by half and the total is kept.
    pub fn next_turn(&mut self, worked: Yields) -> bool {
        self.totals += self.per_turn + worked;

        if self.totals.culture >= self.culture_required {
            self.policies += 1;
            self.culture_required += self.culture_required / 2;
            return true;
        }
        false
    }
}

/// English plural for a people's name; irregular ones go through `with_plural`
fn plural_of(name: &str) -> String {
    if name.ends_with('s') || name.ends_with('x') || name.ends_with("sh") || name.ends_with("ch") {
        format!("{}es", name)
    } else {
        format!("{}s", name)
    }
}

fn default_colour(id: CivId) -> [u8; 3] {
    const PALETTE: [[u8; 3]; 6] = [
        [200, 40, 40],
        [40, 80, 200],
        [230, 200, 40],
        [140, 60, 180],
        [40, 170, 90],
        [230, 120, 30],
    ];
    PALETTE[id.0 as usize % PALETTE.len()]
}
