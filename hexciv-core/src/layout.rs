//! Hex <-> pixel projection
//!
//! Pointy-top and flat-top orientations, fractional hex rounding, and the
//! polygon outline a renderer fills for each tile.

use std::f64::consts::PI;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::coord::HexCoordinate;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A point in pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Orientation matrix: forward (f), inverse (b), and the corner start angle
/// in sixths of a turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub f: [f64; 4],
    pub b: [f64; 4],
    pub start_angle: f64,
}

pub const POINTY_TOP: Orientation = Orientation {
    f: [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
    b: [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
    start_angle: 0.5,
};

pub const FLAT_TOP: Orientation = Orientation {
    f: [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
    b: [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
    start_angle: 0.0,
};

/// Named orientation, as it appears in configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationKind {
    #[default]
    Pointy,
    Flat,
}

impl OrientationKind {
    pub fn orientation(self) -> Orientation {
        match self {
            OrientationKind::Pointy => POINTY_TOP,
            OrientationKind::Flat => FLAT_TOP,
        }
    }
}

/// Hex coordinate with fractional components, as produced by the inverse
/// projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    pub fn new(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Nearest integer hex. Rounds each component, then rebuilds the one
    /// with the largest rounding error from the other two.
    pub fn round(&self) -> HexCoordinate {
        let q = self.q.round();
        let r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        let (q, r) = if q_diff > r_diff && q_diff > s_diff {
            (-r - s, r)
        } else if r_diff > s_diff {
            (q, -q - s)
        } else {
            (q, r)
        };

        HexCoordinate::new(q as i32, r as i32)
    }
}

/// Geometry for one orientation, hex size and origin. Immutable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    size: Point,
    origin: Point,
}

impl Layout {
    pub const fn new(orientation: Orientation, size: Point, origin: Point) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    /// Pointy-top layout with square size and origin both at `radius`
    pub fn pointy(radius: f64) -> Self {
        Self::new(
            POINTY_TOP,
            Point::new(radius, radius),
            Point::new(radius, radius),
        )
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Centre of a hex in pixel space (exact)
    pub fn hex_to_pixel(&self, hex: HexCoordinate) -> Point {
        let m = &self.orientation;
        let q = hex.q() as f64;
        let r = hex.r() as f64;
        let x = (m.f[0] * q + m.f[1] * r) * self.size.x;
        let y = (m.f[2] * q + m.f[3] * r) * self.size.y;
        Point::new(x + self.origin.x, y + self.origin.y)
    }

    /// Fractional hex under a pixel, before rounding
    pub fn pixel_to_fractional(&self, p: Point) -> FractionalHex {
        let m = &self.orientation;
        let px = (p.x - self.origin.x) / self.size.x;
        let py = (p.y - self.origin.y) / self.size.y;
        FractionalHex::new(m.b[0] * px + m.b[1] * py, m.b[2] * px + m.b[3] * py)
    }

    /// Hex containing a pixel
    pub fn pixel_to_hex(&self, p: Point) -> HexCoordinate {
        self.pixel_to_fractional(p).round()
    }

    fn corner_offset(&self, corner: usize) -> Point {
        let angle = 2.0 * PI * (self.orientation.start_angle + corner as f64) / 6.0;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// The six outline vertices of a hex, in drawing order
    pub fn polygon_corners(&self, hex: HexCoordinate) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        std::array::from_fn(|corner| center + self.corner_offset(corner))
    }
}
