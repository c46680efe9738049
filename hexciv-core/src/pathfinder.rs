//! Weighted shortest-path search over the hex map
//!
//! A* with hex distance as the heuristic. Every step costs at least one
//! movement point, so the heuristic never overestimates and the first time
//! the goal is popped its cost is optimal. Ties on estimated cost go to the
//! node pushed first, and neighbors are pushed in direction order, so the
//! same map always yields the same path.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::coord::HexCoordinate;
use crate::error::CoreError;
use crate::map::HexMap;
use crate::terrain::{Landscape, Surface};
use crate::tile::Tile;
use crate::unit::MovementDomain;

/// A tile as seen by one path search
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathHex {
    pub coord: HexCoordinate,
    pub landscape: Landscape,
    /// Enterable in the mover's own domain
    pub passable: bool,
    /// Enterable only by switching domain (embarking/disembarking)
    pub can_switch: bool,
    /// Cost paid to enter this tile (0 for the start)
    pub cost: u32,
    /// Cost from the start up to and including this tile
    pub total_cost: u32,
}

/// Path search parameters
#[derive(Clone, Copy, Debug)]
pub struct PathRequest {
    pub from: HexCoordinate,
    pub to: HexCoordinate,
    pub domain: MovementDomain,
    /// Extra cost for crossing between land and water
    pub embark_cost: u32,
}

/// How a tile looks to a mover
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Access {
    passable: bool,
    can_switch: bool,
}

impl Access {
    const BLOCKED: Access = Access {
        passable: false,
        can_switch: false,
    };

    fn enterable(self) -> bool {
        self.passable || self.can_switch
    }
}

fn access(tile: &Tile, domain: MovementDomain, occupied_by_enemy: bool) -> Access {
    if occupied_by_enemy || tile.movement_cost().is_none() {
        return Access::BLOCKED;
    }
    match (domain, tile.surface()) {
        (MovementDomain::Land, Surface::Land)
        | (MovementDomain::Amphibious, Surface::Land)
        | (MovementDomain::Sea, Surface::Water) => Access {
            passable: true,
            can_switch: false,
        },
        (MovementDomain::Amphibious, Surface::Water) => Access {
            passable: false,
            can_switch: true,
        },
        _ => Access::BLOCKED,
    }
}

/// Find the cheapest path from `request.from` to `request.to`, both inclusive.
///
/// `is_blocked` reports tiles held by another civilization's military.
pub fn find_path<F>(map: &HexMap, request: &PathRequest, is_blocked: F) -> Result<Vec<PathHex>, CoreError>
where
    F: Fn(HexCoordinate) -> bool,
{
    let no_path = CoreError::NoPathFound {
        from: request.from,
        to: request.to,
    };

    let start_tile = map.get_hex(request.from).ok_or_else(|| no_path.clone())?;
    let goal_tile = map.get_hex(request.to).ok_or_else(|| no_path.clone())?;
    if request.from != request.to && !access(goal_tile, request.domain, is_blocked(request.to)).enterable() {
        tracing::debug!("goal {} not enterable", request.to);
        return Err(no_path);
    }

    let mut best: FxHashMap<HexCoordinate, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<HexCoordinate, HexCoordinate> = FxHashMap::default();
    let mut open: BinaryHeap<Reverse<(u32, u64, u32, HexCoordinate)>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    best.insert(request.from, 0);
    open.push(Reverse((
        request.from.distance(request.to) as u32,
        seq,
        0,
        request.from,
    )));

    while let Some(Reverse((_, _, cost, current))) = open.pop() {
        if current == request.to {
            let path = reconstruct(map, request, &came_from, &is_blocked, start_tile);
            tracing::debug!(
                "path {} -> {}: {} tiles, cost {}",
                request.from,
                request.to,
                path.len(),
                cost
            );
            return Ok(path);
        }
        if best.get(&current).is_some_and(|&b| cost > b) {
            continue;
        }
        let Some(current_tile) = map.get_hex(current) else {
            continue;
        };

        for next in map.neighbors(current) {
            let Some(tile) = map.get_hex(next) else {
                continue;
            };
            if !access(tile, request.domain, is_blocked(next)).enterable() {
                continue;
            }
            let new_cost = cost + step_cost(current_tile, tile, request.embark_cost);
            if best.get(&next).map_or(true, |&b| new_cost < b) {
                best.insert(next, new_cost);
                came_from.insert(next, current);
                seq += 1;
                let estimate = new_cost + next.distance(request.to) as u32;
                open.push(Reverse((estimate, seq, new_cost, next)));
            }
        }
    }

    tracing::debug!("no path {} -> {}", request.from, request.to);
    Err(no_path)
}

fn step_cost(from: &Tile, to: &Tile, embark_cost: u32) -> u32 {
    // access() already rejected tiles with no movement cost
    let base = to.movement_cost().unwrap_or(0);
    if from.surface() != to.surface() {
        base + embark_cost
    } else {
        base
    }
}

fn reconstruct<F>(
    map: &HexMap,
    request: &PathRequest,
    came_from: &FxHashMap<HexCoordinate, HexCoordinate>,
    is_blocked: &F,
    start_tile: &Tile,
) -> Vec<PathHex>
where
    F: Fn(HexCoordinate) -> bool,
{
    let mut coords = vec![request.to];
    let mut cursor = request.to;
    while let Some(&prev) = came_from.get(&cursor) {
        coords.push(prev);
        cursor = prev;
    }
    coords.reverse();

    let mut path = Vec::with_capacity(coords.len());
    let mut total = 0;
    let mut prev_tile = start_tile;
    for (i, coord) in coords.into_iter().enumerate() {
        let Some(tile) = map.get_hex(coord) else {
            continue;
        };
        let cost = if i == 0 {
            0
        } else {
            step_cost(prev_tile, tile, request.embark_cost)
        };
        total += cost;
        let access = if i == 0 {
            access(tile, request.domain, false)
        } else {
            access(tile, request.domain, is_blocked(coord))
        };
        path.push(PathHex {
            coord,
            landscape: tile.landscape,
            passable: access.passable,
            can_switch: access.can_switch,
            cost,
            total_cost: total,
        });
        prev_tile = tile;
    }
    path
}
