//! Unit kinds and unit state

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::civ::CivId;
use crate::coord::HexCoordinate;

/// Health restored at turn end to a unit that did not move
pub const HEAL_PER_TURN: u32 = 10;

/// Full health for every unit
pub const MAX_HEALTH: u32 = 100;

/// Stable unit handle, assigned at spawn and never reused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which tiles a unit may enter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementDomain {
    Land,
    Sea,
    /// Land natively; may embark onto water at extra cost
    Amphibious,
}

/// One military and one civilian unit may share a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    Military,
    Civilian,
}

/// Unit kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Settler = 0,
    Worker = 1,
    Warrior = 2,
    Scout = 3,
    Galley = 4,
    Marine = 5,
}

/// Unit kind definition
#[derive(Clone, Debug)]
pub struct UnitType {
    pub name: &'static str,
    pub class: UnitClass,
    pub domain: MovementDomain,
    pub movement: u32,
    pub strength: u32,
    pub cost: u32,
}

impl UnitType {
    const fn new(
        name: &'static str,
        class: UnitClass,
        domain: MovementDomain,
        movement: u32,
        strength: u32,
        cost: u32,
    ) -> Self {
        Self {
            name,
            class,
            domain,
            movement,
            strength,
            cost,
        }
    }
}

/// Indexed by `UnitKind as usize`
pub static UNIT_TYPES: [UnitType; 6] = [
    UnitType::new("Settler", UnitClass::Civilian, MovementDomain::Land, 2, 0, 106),
    UnitType::new("Worker", UnitClass::Civilian, MovementDomain::Land, 2, 0, 70),
    UnitType::new("Warrior", UnitClass::Military, MovementDomain::Land, 2, 8, 40),
    UnitType::new("Scout", UnitClass::Military, MovementDomain::Land, 3, 5, 30),
    UnitType::new("Galley", UnitClass::Military, MovementDomain::Sea, 3, 10, 65),
    UnitType::new("Marine", UnitClass::Military, MovementDomain::Amphibious, 2, 12, 90),
];

/// What a unit does when its turn ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEndEffect {
    /// Heal if the unit stayed put
    Heal(u32),
    None,
}

impl UnitKind {
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Settler,
        UnitKind::Worker,
        UnitKind::Warrior,
        UnitKind::Scout,
        UnitKind::Galley,
        UnitKind::Marine,
    ];

    pub fn info(self) -> &'static UnitType {
        &UNIT_TYPES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn movement_domain(self) -> MovementDomain {
        self.info().domain
    }

    pub fn class(self) -> UnitClass {
        self.info().class
    }

    pub fn on_turn_end(self) -> TurnEndEffect {
        match self.class() {
            UnitClass::Military => TurnEndEffect::Heal(HEAL_PER_TURN),
            UnitClass::Civilian => TurnEndEffect::None,
        }
    }

    pub fn from_name(name: &str) -> Option<UnitKind> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

/// A unit on the map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub owner: CivId,
    position: HexCoordinate,
    pub strength: u32,
    movement_potential: u32,
    total_movement: u32,
    health: u32,
}

impl Unit {
    pub fn new(id: UnitId, kind: UnitKind, owner: CivId, position: HexCoordinate) -> Self {
        let info = kind.info();
        Self {
            id,
            kind,
            owner,
            position,
            strength: info.strength,
            movement_potential: info.movement,
            total_movement: info.movement,
            health: MAX_HEALTH,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn position(&self) -> HexCoordinate {
        self.position
    }

    pub fn owner(&self) -> CivId {
        self.owner
    }

    pub fn class(&self) -> UnitClass {
        self.kind.class()
    }

    pub fn movement_potential(&self) -> u32 {
        self.movement_potential
    }

    pub fn total_movement(&self) -> u32 {
        self.total_movement
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn set_health(&mut self, health: u32) {
        self.health = health.min(MAX_HEALTH);
    }

    pub fn has_moved(&self) -> bool {
        self.movement_potential < self.total_movement
    }

    /// Spend `cost` movement to step onto `to`. A unit that has not moved
    /// this turn may always take one step, spending everything it has.
    /// Otherwise returns false (and does nothing) when the remaining
    /// potential does not cover the cost.
    pub(crate) fn step_to(&mut self, to: HexCoordinate, cost: u32) -> bool {
        if cost > self.movement_potential {
            if self.has_moved() || self.movement_potential == 0 {
                return false;
            }
            self.movement_potential = 0;
        } else {
            self.movement_potential -= cost;
        }
        self.position = to;
        true
    }

    /// End-of-turn effects, then restore the movement budget
    pub fn next_turn(&mut self) {
        match self.kind.on_turn_end() {
            TurnEndEffect::Heal(amount) if !self.has_moved() => {
                self.health = (self.health + amount).min(MAX_HEALTH);
            }
            _ => {}
        }
        self.movement_potential = self.total_movement;
    }
}
