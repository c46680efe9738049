//! Game state: the context handed to renderers and input handlers

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::civ::{CivId, Civilization};
use crate::config::GameConfig;
use crate::coord::HexCoordinate;
use crate::error::CoreError;
use crate::focus::FocusState;
use crate::layout::{Layout, Point};
use crate::map::HexMap;
use crate::pathfinder::{find_path, PathHex, PathRequest};
use crate::save::SaveGame;
use crate::terrain::Yields;
use crate::tile::Tile;
use crate::turn::TurnEngine;
use crate::unit::{Unit, UnitClass, UnitId, UnitKind};

// ============================================================================
// TURN HOOKS
// ============================================================================

/// Collaborator notified during turn advancement
pub trait TurnHooks {
    /// A civilization's culture crossed its threshold
    fn on_advancement(&mut self, _civ: &Civilization) {}
}

/// Hooks that do nothing
pub struct NoHooks;

impl TurnHooks for NoHooks {}

/// Result of one `advance_turn` call
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    Advanced(TurnReport),
    /// A turn was already being advanced
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub turn: u32,
    pub units_processed: usize,
    pub advancements: Vec<CivId>,
}

// ============================================================================
// READ-ONLY VIEWS
// ============================================================================

/// Everything an inspect overlay shows for one tile
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HexInspection {
    pub coord: HexCoordinate,
    pub landscape: &'static str,
    pub improvement: Option<&'static str>,
    pub features: Vec<&'static str>,
    pub yields: Yields,
    pub units: Vec<UnitSummary>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnitSummary {
    pub id: UnitId,
    pub owner: String,
    pub name: &'static str,
    pub strength: u32,
    pub movement_potential: u32,
    pub total_movement: u32,
    pub health: u32,
}

/// Top-bar numbers for one civilization
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CivSummary {
    pub civ: CivId,
    pub name: String,
    pub science_per_turn: i32,
    pub gold_total: i32,
    pub gold_per_turn: i32,
    pub culture_total: i32,
    pub culture_required: i32,
    pub culture_per_turn: i32,
    pub policies: u32,
    pub turn: u32,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Owns the map, civilizations, turn engine and selection.
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    layout: Layout,
    map: HexMap,
    civilizations: Vec<Civilization>,
    turns: TurnEngine,
    focus: FocusState,
    next_unit_id: u32,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Empty game on `map`, turn 0
    pub fn new(config: GameConfig, map: HexMap) -> Self {
        Self {
            layout: config.layout(),
            turns: TurnEngine::new(config.turn_counting),
            config,
            map,
            civilizations: Vec::new(),
            focus: FocusState::default(),
            next_unit_id: 1,
        }
    }

    /// Restore a saved game. Fails if any unit stands off-map, or the save
    /// breaks an invariant the game relies on.
    pub fn from_save(config: GameConfig, save: SaveGame) -> Result<Self, CoreError> {
        for unit in save.civilizations.iter().flat_map(|c| c.units()) {
            if !save.map.contains(unit.position()) {
                return Err(CoreError::OffMap(unit.position()));
            }
        }
        validate_save(&save)?;
        let next_unit_id = save
            .civilizations
            .iter()
            .flat_map(|c| c.units())
            .map(|u| u.id.0 + 1)
            .max()
            .unwrap_or(1)
            .max(save.next_unit_id);

        Ok(Self {
            layout: config.layout(),
            turns: TurnEngine::starting_at(save.turn, config.turn_counting),
            config,
            map: save.map,
            civilizations: save.civilizations,
            focus: FocusState::default(),
            next_unit_id,
        })
    }

    /// Snapshot of everything that must persist
    pub fn to_save(&self) -> SaveGame {
        SaveGame {
            map: self.map.clone(),
            civilizations: self.civilizations.clone(),
            turn: self.turns.turn(),
            next_unit_id: self.next_unit_id,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn map(&self) -> &HexMap {
        &self.map
    }

    /// Map setup (tiles only; unit positions must stay on-map)
    pub fn map_mut(&mut self) -> &mut HexMap {
        &mut self.map
    }

    pub fn civilizations(&self) -> &[Civilization] {
        &self.civilizations
    }

    pub fn civilization(&self, id: CivId) -> Option<&Civilization> {
        self.civilizations.get(id.0 as usize)
    }

    pub fn civilization_mut(&mut self, id: CivId) -> Option<&mut Civilization> {
        self.civilizations.get_mut(id.0 as usize)
    }

    pub fn turn(&self) -> u32 {
        self.turns.turn()
    }

    pub fn turn_engine(&self) -> &TurnEngine {
        &self.turns
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// Every unit, civilization order then spawn order
    pub fn units(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.civilizations.iter().flat_map(|c| c.units().iter())
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units().find(|u| u.id == id)
    }

    fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.civilizations.iter_mut().find_map(|c| c.unit_mut(id))
    }

    /// Units standing on a tile, military first
    pub fn units_on(&self, coord: HexCoordinate) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = self.units().filter(|u| u.position() == coord).collect();
        units.sort_by_key(|u| u.class() != UnitClass::Military);
        units
    }

    /// True when the tile exists and has no unit of `class`
    pub fn can_place(&self, coord: HexCoordinate, class: UnitClass) -> bool {
        self.map.contains(coord) && self.units_on(coord).iter().all(|u| u.class() != class)
    }

    /// Another civilization's military holds the tile
    pub fn is_blocked_for(&self, owner: CivId, coord: HexCoordinate) -> bool {
        self.units_on(coord)
            .iter()
            .any(|u| u.owner != owner && u.class() == UnitClass::Military)
    }

    // ========================================================================
    // SETUP
    // ========================================================================

    /// Add a civilization with the configured base income
    pub fn add_civilization(&mut self, name: &str) -> CivId {
        let id = CivId(self.civilizations.len() as u8);
        let mut civ = Civilization::new(id, name, self.config.base_culture_required);
        civ.set_yields_per_turn(self.config.base_yields);
        self.civilizations.push(civ);
        id
    }

    /// Same as `add_civilization`, with an explicit plural name
    pub fn add_named_civilization(&mut self, name: &str, plural: &str) -> CivId {
        let id = self.add_civilization(name);
        self.civilizations[id.0 as usize].plural_name = plural.to_string();
        id
    }

    /// Place a new unit. The tile must exist and have room for the unit's class.
    pub fn spawn_unit(&mut self, owner: CivId, kind: UnitKind, coord: HexCoordinate) -> Result<UnitId, CoreError> {
        if !self.map.contains(coord) {
            return Err(CoreError::OffMap(coord));
        }
        if self.civilization(owner).is_none() {
            return Err(CoreError::UnknownCivilization(owner));
        }
        if !self.can_place(coord, kind.class()) {
            return Err(CoreError::TileOccupied {
                coord,
                class: kind.class(),
            });
        }

        let id = UnitId(self.next_unit_id);
        self.next_unit_id += 1;
        let civ = self
            .civilization_mut(owner)
            .ok_or(CoreError::UnknownCivilization(owner))?;
        civ.push_unit(Unit::new(id, kind, owner, coord));
        tracing::debug!("Spawned {} {} for {} at {}", kind.name(), id, owner, coord);
        Ok(id)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_hex(&self, coord: HexCoordinate) -> Option<&Tile> {
        self.map.get_hex(coord)
    }

    /// Tiles in the sweep window around the hex under `center`
    pub fn visible_tiles(&self, center: Point) -> Vec<&Tile> {
        let center = self.layout.pixel_to_hex(center);
        self.map.sweep(center, self.config.sweep_bound)
    }

    pub fn inspect(&self, coord: HexCoordinate) -> Option<HexInspection> {
        let tile = self.map.get_hex(coord)?;
        let units = self
            .units_on(coord)
            .into_iter()
            .map(|u| UnitSummary {
                id: u.id,
                owner: self
                    .civilization(u.owner)
                    .map(|c| c.plural_name.clone())
                    .unwrap_or_default(),
                name: u.name(),
                strength: u.strength,
                movement_potential: u.movement_potential(),
                total_movement: u.total_movement(),
                health: u.health(),
            })
            .collect();

        Some(HexInspection {
            coord,
            landscape: tile.landscape.name(),
            improvement: tile.improvement.map(|i| i.name()),
            features: tile.features().iter().map(|f| f.name()).collect(),
            yields: tile.yields(),
            units,
        })
    }

    /// What a civilization will earn next turn: base income plus the
    /// yields of the tiles its units stand on
    pub fn income(&self, id: CivId) -> Option<Yields> {
        let civ = self.civilization(id)?;
        Some(civ.yields_per_turn() + worked_yields(&self.map, civ))
    }

    pub fn hud(&self, id: CivId) -> Option<CivSummary> {
        let civ = self.civilization(id)?;
        let per_turn = self.income(id)?;
        let totals = civ.totals();
        Some(CivSummary {
            civ: id,
            name: civ.name.clone(),
            science_per_turn: per_turn.science,
            gold_total: totals.gold,
            gold_per_turn: per_turn.gold,
            culture_total: totals.culture,
            culture_required: civ.culture_required(),
            culture_per_turn: per_turn.culture,
            policies: civ.policies(),
            turn: self.turns.turn(),
        })
    }

    /// Path for a unit to `goal`
    pub fn find_path(&self, unit_id: UnitId, goal: HexCoordinate) -> Result<Vec<PathHex>, CoreError> {
        let unit = self.unit(unit_id).ok_or(CoreError::UnknownUnit(unit_id))?;
        let request = PathRequest {
            from: unit.position(),
            to: goal,
            domain: unit.kind.movement_domain(),
            embark_cost: self.config.embark_cost,
        };
        let owner = unit.owner;
        find_path(&self.map, &request, |coord| self.is_blocked_for(owner, coord))
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Focus the tile under a map-space pixel (screen position minus scroll).
    /// Only acts when nothing is focused and the tile holds a unit.
    pub fn set_focus_hex(&mut self, pixel: Point) -> Option<HexCoordinate> {
        if self.focus.is_focused() {
            return None;
        }
        let coord = self.layout.pixel_to_hex(pixel);
        self.map.get_hex(coord)?;
        let unit = self.units_on(coord).first().map(|u| u.id)?;
        self.focus.focus(coord, unit);
        tracing::debug!("Focused {} with unit {}", coord, unit);
        Some(coord)
    }

    /// Set the active path; `None` also clears the focus hex and unit
    pub fn set_focused_unit_path(&mut self, path: Option<Vec<PathHex>>) {
        self.focus.set_path(path);
    }

    /// Compute and store a path for the focused unit. On failure the path
    /// and selection are cleared and the error returned.
    pub fn plan_path(&mut self, goal: HexCoordinate) -> Result<&[PathHex], CoreError> {
        let unit = self.focus.current_unit().ok_or(CoreError::NoUnitSelected)?;
        match self.find_path(unit, goal) {
            Ok(path) => {
                self.focus.set_path(Some(path));
                Ok(self.focus.path().unwrap_or_default())
            }
            Err(e) => {
                self.set_focused_unit_path(None);
                Err(e)
            }
        }
    }

    /// Move the focused unit along the active path as far as its movement
    /// allows. Reaching the goal clears the path (and with it the selection).
    pub fn follow_path(&mut self) -> Result<HexCoordinate, CoreError> {
        let unit_id = self.focus.current_unit().ok_or(CoreError::NoUnitSelected)?;
        let steps: Vec<PathHex> = match self.focus.path() {
            Some(path) => path.iter().skip(1).cloned().collect(),
            None => {
                return self
                    .unit(unit_id)
                    .map(|u| u.position())
                    .ok_or(CoreError::UnknownUnit(unit_id));
            }
        };

        let mut taken = 0;
        for step in &steps {
            if !self.can_enter(unit_id, step.coord) {
                break;
            }
            let unit = self.unit_mut(unit_id).ok_or(CoreError::UnknownUnit(unit_id))?;
            if !unit.step_to(step.coord, step.cost) {
                break;
            }
            taken += 1;
        }

        let position = self
            .unit(unit_id)
            .map(|u| u.position())
            .ok_or(CoreError::UnknownUnit(unit_id))?;
        tracing::debug!("Unit {} moved {} steps to {}", unit_id, taken, position);

        if taken == steps.len() {
            self.set_focused_unit_path(None);
        } else if let Some(path) = self.focus.path_mut() {
            path.drain(..taken);
            self.focus.move_focus(position);
        }
        Ok(position)
    }

    fn can_enter(&self, unit_id: UnitId, coord: HexCoordinate) -> bool {
        let Some(unit) = self.unit(unit_id) else {
            return false;
        };
        self.units_on(coord)
            .iter()
            .all(|other| other.owner == unit.owner && other.class() != unit.class())
    }

    // ========================================================================
    // TURNS
    // ========================================================================

    /// Run one turn for every civilization: each unit's `next_turn`, then the
    /// civilization's yield accrual (base income plus worked tiles). A call
    /// made while a turn is already being advanced is ignored.
    pub fn advance_turn(&mut self, hooks: &mut dyn TurnHooks) -> TurnOutcome {
        let map = &self.map;
        let civilizations = &mut self.civilizations;
        let mut processed = 0;
        let mut advancements = Vec::new();

        let result = self.turns.advance(|| {
            for civ in civilizations.iter_mut() {
                for unit in civ.units_mut() {
                    unit.next_turn();
                    processed += 1;
                }
                let worked = worked_yields(map, civ);
                if civ.next_turn(worked) {
                    tracing::info!(
                        "{} reached {} culture, advancement {}",
                        civ.name,
                        civ.totals().culture,
                        civ.policies()
                    );
                    hooks.on_advancement(civ);
                    advancements.push(civ.id);
                }
            }
            processed
        });

        match result {
            Some(turn) => {
                tracing::info!("Turn {} ({} units)", turn, processed);
                TurnOutcome::Advanced(TurnReport {
                    turn,
                    units_processed: processed,
                    advancements,
                })
            }
            None => TurnOutcome::Ignored,
        }
    }
}

/// Civilization ids match their index, units belong to the civilization
/// holding them, ids are unique, a tile holds at most one unit per class,
/// and no unit has more movement left than it gets per turn.
fn validate_save(save: &SaveGame) -> Result<(), CoreError> {
    let mut ids = FxHashSet::default();
    let mut occupied = FxHashSet::default();
    for (index, civ) in save.civilizations.iter().enumerate() {
        if civ.id.0 as usize != index {
            return Err(CoreError::InvalidSave(format!(
                "civilization {} stored at index {}",
                civ.id, index
            )));
        }
        for unit in civ.units() {
            if unit.owner != civ.id {
                return Err(CoreError::InvalidSave(format!(
                    "unit {} owned by {} but held by {}",
                    unit.id, unit.owner, civ.id
                )));
            }
            if !ids.insert(unit.id) {
                return Err(CoreError::InvalidSave(format!("duplicate unit {}", unit.id)));
            }
            if !occupied.insert((unit.position(), unit.class())) {
                return Err(CoreError::TileOccupied {
                    coord: unit.position(),
                    class: unit.class(),
                });
            }
            if unit.movement_potential() > unit.total_movement() {
                return Err(CoreError::InvalidSave(format!(
                    "unit {} has {} movement left of {}",
                    unit.id,
                    unit.movement_potential(),
                    unit.total_movement()
                )));
            }
        }
    }
    Ok(())
}

/// Yields of the distinct tiles a civilization's units occupy
fn worked_yields(map: &HexMap, civ: &Civilization) -> Yields {
    let mut tiles: Vec<HexCoordinate> = civ.units().iter().map(|u| u.position()).collect();
    tiles.sort();
    tiles.dedup();
    tiles
        .into_iter()
        .filter_map(|coord| map.get_hex(coord))
        .fold(Yields::ZERO, |total, tile| total + tile.yields())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{Feature, Improvement, Landscape, YieldType};
    use crate::turn::TurnCounting;

    fn grid_map() -> HexMap {
        let mut map = HexMap::new();
        for q in -2..=2 {
            for r in -2..=2 {
                map.set_hex(Tile::new(HexCoordinate::new(q, r), Landscape::Grassland));
            }
        }
        map
    }

    fn two_civ_game() -> (GameState, CivId, CivId) {
        let mut game = GameState::new(GameConfig::default(), grid_map());
        let a = game.add_civilization("Roman");
        let b = game.add_civilization("Greek");
        (game, a, b)
    }

    #[derive(Default)]
    struct CountingHooks {
        advancements: Vec<String>,
    }

    impl TurnHooks for CountingHooks {
        fn on_advancement(&mut self, civ: &Civilization) {
            self.advancements.push(civ.name.clone());
        }
    }

    #[test]
    fn test_spawn_rules() {
        let (mut game, a, b) = two_civ_game();
        let origin = HexCoordinate::ORIGIN;

        game.spawn_unit(a, UnitKind::Warrior, origin).unwrap();
        game.spawn_unit(a, UnitKind::Settler, origin).unwrap();
        let err = game.spawn_unit(b, UnitKind::Scout, origin).unwrap_err();
        assert!(matches!(err, CoreError::TileOccupied { class: UnitClass::Military, .. }));

        let off = HexCoordinate::new(9, 9);
        assert_eq!(game.spawn_unit(a, UnitKind::Warrior, off), Err(CoreError::OffMap(off)));
        assert_eq!(
            game.spawn_unit(CivId(7), UnitKind::Warrior, HexCoordinate::new(1, 0)),
            Err(CoreError::UnknownCivilization(CivId(7)))
        );

        let on_tile = game.units_on(origin);
        assert_eq!(on_tile.len(), 2);
        assert_eq!(on_tile[0].kind, UnitKind::Warrior);
        assert!(game.units().all(|u| game.get_hex(u.position()).is_some()));
    }

    #[test]
    fn test_focus_requires_unit_and_no_existing_focus() {
        let (mut game, a, _) = two_civ_game();
        let here = HexCoordinate::new(1, 0);
        let id = game.spawn_unit(a, UnitKind::Warrior, here).unwrap();

        let empty = game.layout().hex_to_pixel(HexCoordinate::ORIGIN);
        assert_eq!(game.set_focus_hex(empty), None);

        let pixel = game.layout().hex_to_pixel(here);
        assert_eq!(game.set_focus_hex(pixel), Some(here));
        assert_eq!(game.focus().current_unit(), Some(id));

        // already focused: ignored
        assert_eq!(game.set_focus_hex(pixel), None);

        // off-map click
        game.set_focused_unit_path(None);
        assert_eq!(game.set_focus_hex(Point::new(-5000.0, -5000.0)), None);
    }

    #[test]
    fn test_unreachable_goal_clears_focus() {
        let (mut game, a, _) = two_civ_game();
        for r in -2..=2 {
            game.map_mut()
                .set_hex(Tile::new(HexCoordinate::new(0, r), Landscape::Mountains));
        }
        let start = HexCoordinate::new(-1, 0);
        game.spawn_unit(a, UnitKind::Warrior, start).unwrap();
        game.set_focus_hex(game.layout().hex_to_pixel(start)).unwrap();

        let err = game.plan_path(HexCoordinate::new(1, 0)).unwrap_err();
        assert!(matches!(err, CoreError::NoPathFound { .. }));
        assert_eq!(game.focus().focus_hex(), None);
        assert_eq!(game.focus().current_unit(), None);
        assert!(game.focus().path().is_none());
    }

    #[test]
    fn test_enemy_military_blocks_path() {
        let (mut game, a, b) = two_civ_game();
        let id = game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::ORIGIN).unwrap();
        game.spawn_unit(b, UnitKind::Warrior, HexCoordinate::new(1, 0)).unwrap();
        // an enemy civilian does not block
        game.spawn_unit(b, UnitKind::Worker, HexCoordinate::new(1, -1)).unwrap();

        let path = game.find_path(id, HexCoordinate::new(2, 0)).unwrap();
        assert!(path.iter().all(|p| p.coord != HexCoordinate::new(1, 0)));
        assert!(game.is_blocked_for(a, HexCoordinate::new(1, 0)));
        assert!(!game.is_blocked_for(b, HexCoordinate::new(1, 0)));
        assert!(!game.is_blocked_for(a, HexCoordinate::new(1, -1)));
    }

    #[test]
    fn test_follow_path_spends_movement_across_turns() {
        let (mut game, a, _) = two_civ_game();
        let start = HexCoordinate::new(-2, 0);
        let goal = HexCoordinate::new(2, 0);
        let id = game.spawn_unit(a, UnitKind::Warrior, start).unwrap();
        game.set_focus_hex(game.layout().hex_to_pixel(start)).unwrap();
        game.plan_path(goal).unwrap();

        // Warrior has 2 movement; path has 4 steps of cost 1
        let pos = game.follow_path().unwrap();
        assert_eq!(pos.distance(start), 2);
        assert_eq!(game.focus().path().unwrap()[0].coord, pos);
        assert_eq!(game.focus().focus_hex(), Some(pos));

        // out of movement: no progress
        assert_eq!(game.follow_path().unwrap(), pos);

        game.advance_turn(&mut NoHooks);
        assert_eq!(game.follow_path().unwrap(), goal);
        assert_eq!(game.unit(id).unwrap().position(), goal);
        assert!(game.focus().path().is_none());
        assert!(game.focus().current_unit().is_none());
    }

    #[test]
    fn test_follow_path_enters_tile_costlier_than_total_movement() {
        let (mut game, a, _) = two_civ_game();
        let hill = HexCoordinate::new(1, 0);
        game.map_mut()
            .set_hex(Tile::new(hill, Landscape::Hills).with_feature(Feature::Forest));
        let id = game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::ORIGIN).unwrap();
        game.set_focus_hex(game.layout().hex_to_pixel(HexCoordinate::ORIGIN)).unwrap();

        let path = game.plan_path(hill).unwrap();
        assert_eq!(path[1].cost, 3);

        assert_eq!(game.follow_path().unwrap(), hill);
        let unit = game.unit(id).unwrap();
        assert_eq!(unit.position(), hill);
        assert_eq!(unit.movement_potential(), 0);
        assert!(game.focus().path().is_none());
    }

    #[test]
    fn test_follow_path_without_selection() {
        let (mut game, _, _) = two_civ_game();
        assert_eq!(game.follow_path(), Err(CoreError::NoUnitSelected));
        assert!(matches!(
            game.plan_path(HexCoordinate::ORIGIN),
            Err(CoreError::NoUnitSelected)
        ));
    }

    #[test]
    fn test_advance_turn_counts_once_per_call() {
        let (mut game, a, b) = two_civ_game();
        game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::ORIGIN).unwrap();
        game.spawn_unit(a, UnitKind::Settler, HexCoordinate::ORIGIN).unwrap();
        game.spawn_unit(b, UnitKind::Warrior, HexCoordinate::new(2, 0)).unwrap();

        let outcome = game.advance_turn(&mut NoHooks);
        match outcome {
            TurnOutcome::Advanced(report) => {
                assert_eq!(report.turn, 1);
                assert_eq!(report.units_processed, 3);
            }
            TurnOutcome::Ignored => panic!("turn should advance"),
        }
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_advance_turn_legacy_per_unit_counter() {
        let config = GameConfig {
            turn_counting: TurnCounting::PerUnit,
            ..GameConfig::default()
        };
        let mut game = GameState::new(config, grid_map());
        let a = game.add_civilization("Roman");
        game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::ORIGIN).unwrap();
        game.spawn_unit(a, UnitKind::Settler, HexCoordinate::ORIGIN).unwrap();
        game.advance_turn(&mut NoHooks);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn test_culture_hook_fires_once() {
        let (mut game, a, _) = two_civ_game();
        {
            let civ = game.civilization_mut(a).unwrap();
            civ.set_totals(Yields { culture: 95, ..Yields::ZERO });
            civ.set_yield_per_turn(YieldType::Culture, 10);
        }
        let mut hooks = CountingHooks::default();
        game.advance_turn(&mut hooks);

        assert_eq!(game.civilization(a).unwrap().totals().culture, 105);
        assert_eq!(hooks.advancements, vec!["Roman".to_string()]);

        game.advance_turn(&mut hooks);
        assert_eq!(hooks.advancements.len(), 1);
    }

    #[test]
    fn test_inspect_and_hud() {
        let (mut game, a, _) = two_civ_game();
        let coord = HexCoordinate::new(1, -1);
        {
            let tile = game.map_mut().get_hex_mut(coord).unwrap();
            tile.add_feature(Feature::River);
            tile.improvement = Some(Improvement::Farm);
        }
        game.spawn_unit(a, UnitKind::Settler, coord).unwrap();
        game.spawn_unit(a, UnitKind::Warrior, coord).unwrap();
        game.civilization_mut(a)
            .unwrap()
            .set_yields_per_turn(Yields::new(0, 0, 4, 3, 2));
        game.advance_turn(&mut NoHooks);

        let info = game.inspect(coord).unwrap();
        assert_eq!(info.landscape, "Grassland");
        assert_eq!(info.improvement, Some("Farm"));
        assert_eq!(info.features, vec!["River"]);
        assert_eq!(info.yields.food, 3);
        assert_eq!(info.units.len(), 2);
        assert_eq!(info.units[0].name, "Warrior");
        assert_eq!(info.units[0].owner, "Romans");
        assert_eq!(info.units[1].movement_potential, 2);

        assert!(game.inspect(HexCoordinate::new(8, 8)).is_none());

        // base gold 3 plus the river tile's 1
        let hud = game.hud(a).unwrap();
        assert_eq!(hud.science_per_turn, 4);
        assert_eq!(hud.gold_per_turn, 4);
        assert_eq!(hud.gold_total, 4);
        assert_eq!(hud.culture_required, 100);
        assert_eq!(hud.turn, 1);
        assert!(game.hud(CivId(5)).is_none());
    }

    #[test]
    fn test_visible_tiles_from_pixel() {
        let (game, _, _) = two_civ_game();
        let center = game.layout().hex_to_pixel(HexCoordinate::ORIGIN);
        let tiles = game.visible_tiles(center);
        assert_eq!(tiles.len(), game.map().len());
    }

    #[test]
    fn test_save_round_trip_preserves_state() {
        let (mut game, a, b) = two_civ_game();
        game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::ORIGIN).unwrap();
        game.spawn_unit(b, UnitKind::Galley, HexCoordinate::new(2, 2)).unwrap();
        game.advance_turn(&mut NoHooks);

        let save = game.to_save();
        let json = serde_json::to_string(&save).unwrap();
        let back: SaveGame = serde_json::from_str(&json).unwrap();
        assert_eq!(back, save);

        let mut restored = GameState::from_save(GameConfig::default(), back).unwrap();
        assert_eq!(restored.turn(), 1);
        assert_eq!(restored.civilizations(), game.civilizations());
        let new_id = restored
            .spawn_unit(a, UnitKind::Scout, HexCoordinate::new(1, 0))
            .unwrap();
        assert!(game.unit(new_id).is_none());
    }

    #[test]
    fn test_from_save_rejects_off_map_units() {
        let (mut game, a, _) = two_civ_game();
        game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::new(2, 2)).unwrap();
        let mut save = game.to_save();
        save.map = HexMap::new();
        assert_eq!(
            GameState::from_save(GameConfig::default(), save).unwrap_err(),
            CoreError::OffMap(HexCoordinate::new(2, 2))
        );
    }

    fn assert_invalid_save(save: SaveGame) {
        let err = GameState::from_save(GameConfig::default(), save).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSave(_)), "{err:?}");
    }

    #[test]
    fn test_from_save_rejects_misnumbered_civilization() {
        let (game, _, _) = two_civ_game();
        let mut save = game.to_save();
        save.civilizations.swap(0, 1);
        assert_invalid_save(save);
    }

    #[test]
    fn test_from_save_rejects_unit_held_by_wrong_civilization() {
        let (mut game, a, b) = two_civ_game();
        let id = game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::ORIGIN).unwrap();
        let mut save = game.to_save();
        save.civilizations[0].unit_mut(id).unwrap().owner = b;
        assert_invalid_save(save);
    }

    #[test]
    fn test_from_save_rejects_stacked_units() {
        let (mut game, a, b) = two_civ_game();
        game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::ORIGIN).unwrap();
        let id = game.spawn_unit(b, UnitKind::Warrior, HexCoordinate::new(1, 0)).unwrap();
        let mut save = game.to_save();
        assert!(save.civilizations[1]
            .unit_mut(id)
            .unwrap()
            .step_to(HexCoordinate::ORIGIN, 0));
        assert_eq!(
            GameState::from_save(GameConfig::default(), save).unwrap_err(),
            CoreError::TileOccupied {
                coord: HexCoordinate::ORIGIN,
                class: UnitClass::Military
            }
        );
    }

    #[test]
    fn test_from_save_rejects_duplicate_unit_ids() {
        let (mut game, a, _) = two_civ_game();
        game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::ORIGIN).unwrap();
        let mut save = game.to_save();
        let mut copy = save.civilizations[0].units()[0].clone();
        assert!(copy.step_to(HexCoordinate::new(1, 0), 0));
        save.civilizations[0].push_unit(copy);
        assert_invalid_save(save);
    }

    #[test]
    fn test_from_save_rejects_excess_movement() {
        let (mut game, a, _) = two_civ_game();
        game.spawn_unit(a, UnitKind::Warrior, HexCoordinate::ORIGIN).unwrap();
        let mut value = serde_json::to_value(game.to_save()).unwrap();
        value["civilizations"][0]["units"][0]["movement_potential"] = 9.into();
        let save: SaveGame = serde_json::from_value(value).unwrap();
        assert_invalid_save(save);
    }

    #[test]
    fn test_units_earn_their_tiles_yields() {
        let (mut game, a, _) = two_civ_game();
        let coord = HexCoordinate::new(1, 0);
        game.map_mut().get_hex_mut(coord).unwrap().add_feature(Feature::River);
        game.spawn_unit(a, UnitKind::Settler, coord).unwrap();
        game.spawn_unit(a, UnitKind::Warrior, coord).unwrap();
        game.spawn_unit(a, UnitKind::Scout, HexCoordinate::ORIGIN).unwrap();

        // base (0,0,1,2,2), river grassland (2,0,0,1,0) counted once, grassland (2,0,0,0,0)
        assert_eq!(game.income(a), Some(Yields::new(4, 0, 1, 3, 2)));
        game.advance_turn(&mut NoHooks);
        game.advance_turn(&mut NoHooks);
        assert_eq!(game.civilization(a).unwrap().totals(), Yields::new(8, 0, 2, 6, 4));
    }

    #[test]
    fn test_named_civilization_keeps_plural() {
        let (mut game, _, _) = two_civ_game();
        let id = game.add_named_civilization("Swiss", "Swiss");
        let civ = game.civilization(id).unwrap();
        assert_eq!(civ.plural_name, "Swiss");
        assert_eq!(civ.yields_per_turn(), game.config().base_yields);
    }
}
