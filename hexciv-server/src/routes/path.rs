//! Path endpoints

use super::error_body;
use crate::state::ServerState;
use axum::{extract::State, Json};
use hexciv_core::HexCoordinate;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PathRequest {
    pub q: i32,
    pub r: i32,
}

/// Plan a path for the focused unit
pub async fn plan_path(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<PathRequest>,
) -> Json<Value> {
    let mut game = state.game();
    let goal = HexCoordinate::new(req.q, req.r);

    match game.plan_path(goal) {
        Ok(path) => Json(json!({
            "success": true,
            "path": path,
        })),
        Err(e) => Json(error_body(&e)),
    }
}

/// Drop the active path and selection
pub async fn clear_path(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let mut game = state.game();
    game.set_focused_unit_path(None);
    Json(json!({ "success": true }))
}

/// Move the focused unit along its path
pub async fn follow_path(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let mut game = state.game();
    match game.follow_path() {
        Ok(position) => Json(json!({
            "success": true,
            "position": position,
            "path": game.focus().path(),
        })),
        Err(e) => Json(error_body(&e)),
    }
}
