//! Map geometry endpoint
//!
//! Everything a renderer needs to draw the grid: per-tile colour, pixel
//! centre and outline, plus the scroll limits.

use crate::state::ServerState;
use axum::{
    extract::{Query, State},
    Json,
};
use hexciv_core::{HexCoordinate, MapBounds, OrientationKind, Point, Tile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
pub struct TileView {
    pub coord: HexCoordinate,
    pub landscape: &'static str,
    pub colour: [u8; 3],
    pub features: Vec<&'static str>,
    pub improvement: Option<&'static str>,
    pub center: Point,
    pub corners: [Point; 6],
}

#[derive(Serialize)]
pub struct MapResponse {
    pub hex_radius: f64,
    pub orientation: OrientationKind,
    pub bounds: MapBounds,
    pub adjusted_width: i32,
    pub adjusted_height: i32,
    pub tiles: Vec<TileView>,
}

/// Optional sweep centre in map pixels
#[derive(Deserialize)]
pub struct MapQuery {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
}

/// Get map tiles. With `cx`/`cy` only the sweep window around that pixel is
/// returned.
pub async fn get_map(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<MapQuery>,
) -> Json<MapResponse> {
    let game = state.game();
    let layout = game.layout();

    let tiles: Vec<&Tile> = match (query.cx, query.cy) {
        (Some(x), Some(y)) => game.visible_tiles(Point::new(x, y)),
        _ => game.map().tiles(),
    };

    let tiles = tiles
        .into_iter()
        .map(|tile| TileView {
            coord: tile.coord,
            landscape: tile.landscape.name(),
            colour: tile.landscape.info().colour,
            features: tile.features().iter().map(|f| f.name()).collect(),
            improvement: tile.improvement.map(|i| i.name()),
            center: layout.hex_to_pixel(tile.coord),
            corners: layout.polygon_corners(tile.coord),
        })
        .collect();

    let config = game.config();
    Json(MapResponse {
        hex_radius: config.hex_radius,
        orientation: config.orientation,
        bounds: game.map().bounds(),
        adjusted_width: config.adjusted_width(),
        adjusted_height: config.adjusted_height(),
        tiles,
    })
}
