//! Tile inspection endpoint

use crate::state::ServerState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use hexciv_core::{HexCoordinate, HexInspection};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct HexQuery {
    pub q: i32,
    pub r: i32,
}

/// Inspect one tile
pub async fn inspect_hex(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<HexQuery>,
) -> Result<Json<HexInspection>, (StatusCode, Json<Value>)> {
    let coord = HexCoordinate::new(query.q, query.r);
    let game = state.game();
    game.inspect(coord).map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no tile at {}", coord) })),
        )
    })
}
