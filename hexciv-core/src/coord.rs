//! Hex grid coordinates (cube form)

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Cube hex coordinate. `q + r + s == 0` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CubeRecord")]
pub struct HexCoordinate {
    q: i32,
    r: i32,
    s: i32,
}

/// Unvalidated wire form of a coordinate
#[derive(Deserialize)]
struct CubeRecord {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<CubeRecord> for HexCoordinate {
    type Error = CoreError;

    fn try_from(record: CubeRecord) -> Result<Self, Self::Error> {
        HexCoordinate::from_cube(record.q, record.r, record.s)
    }
}

/// Direction offsets in cube coordinates (dq, dr, ds)
/// Index: 0=E, 1=NE, 2=NW, 3=W, 4=SW, 5=SE
pub const DIRECTIONS: [(i32, i32, i32); 6] = [
    (1, 0, -1),  // E
    (1, -1, 0),  // NE
    (0, -1, 1),  // NW
    (-1, 0, 1),  // W
    (-1, 1, 0),  // SW
    (0, 1, -1),  // SE
];

impl HexCoordinate {
    pub const ORIGIN: HexCoordinate = HexCoordinate { q: 0, r: 0, s: 0 };

    /// Build from axial (q, r); s is derived.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Build from a full cube triple, rejecting triples off the q+r+s=0 plane.
    pub fn from_cube(q: i32, r: i32, s: i32) -> Result<Self, CoreError> {
        if q as i64 + r as i64 + s as i64 != 0 {
            return Err(CoreError::InvalidCoordinate { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        self.s
    }

    /// Distance between two hexes
    pub fn distance(&self, other: HexCoordinate) -> i32 {
        let d = *self - other;
        (d.q.abs() + d.r.abs() + d.s.abs()) / 2
    }

    /// Get neighbor in direction (0-5, wraps)
    pub fn neighbor(&self, direction: usize) -> HexCoordinate {
        let (dq, dr, _) = DIRECTIONS[direction % 6];
        HexCoordinate::new(self.q + dq, self.r + dr)
    }

    /// The six adjacent coordinates, in `DIRECTIONS` order
    pub fn neighbors(&self) -> [HexCoordinate; 6] {
        std::array::from_fn(|dir| self.neighbor(dir))
    }

    /// All coordinates at exactly `radius`, walking the ring from the SW corner.
    /// Radius 0 yields only the centre.
    pub fn ring(&self, radius: u32) -> Vec<HexCoordinate> {
        if radius == 0 {
            return vec![*self];
        }
        let radius = radius as i32;
        let mut out = Vec::with_capacity(6 * radius as usize);
        let mut current = *self + direction(4) * radius;
        for side in 0..6 {
            for _ in 0..radius {
                out.push(current);
                current = current.neighbor(side);
            }
        }
        out
    }

    /// Centre, then rings 1..=radius
    pub fn spiral(&self, radius: u32) -> Vec<HexCoordinate> {
        (0..=radius).flat_map(|k| self.ring(k)).collect()
    }
}

/// Unit offset for a direction index
fn direction(dir: usize) -> HexCoordinate {
    let (dq, dr, _) = DIRECTIONS[dir % 6];
    HexCoordinate::new(dq, dr)
}

impl Add for HexCoordinate {
    type Output = HexCoordinate;

    fn add(self, other: HexCoordinate) -> HexCoordinate {
        HexCoordinate::new(self.q + other.q, self.r + other.r)
    }
}

impl Sub for HexCoordinate {
    type Output = HexCoordinate;

    fn sub(self, other: HexCoordinate) -> HexCoordinate {
        HexCoordinate::new(self.q - other.q, self.r - other.r)
    }
}

impl Mul<i32> for HexCoordinate {
    type Output = HexCoordinate;

    fn mul(self, k: i32) -> HexCoordinate {
        HexCoordinate::new(self.q * k, self.r * k)
    }
}

impl fmt::Display for HexCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}
