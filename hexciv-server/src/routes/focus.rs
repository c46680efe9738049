//! Selection endpoints

use crate::state::ServerState;
use axum::{extract::State, Json};
use hexciv_core::{FocusState, Point};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Current focus hex, unit and active path
pub async fn get_focus(State(state): State<Arc<ServerState>>) -> Json<FocusState> {
    let game = state.game();
    Json(game.focus().clone())
}

/// Click position in map pixels (screen position minus scroll)
#[derive(Deserialize)]
pub struct FocusRequest {
    pub x: f64,
    pub y: f64,
}

/// Focus the tile under a click
pub async fn set_focus(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<FocusRequest>,
) -> Json<Value> {
    let mut game = state.game();
    let focused = game.set_focus_hex(Point::new(req.x, req.y));

    Json(json!({
        "success": focused.is_some(),
        "focus_hex": focused,
        "current_unit": game.focus().current_unit(),
    }))
}
