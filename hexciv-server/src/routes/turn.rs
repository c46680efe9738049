//! Turn endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use hexciv_core::{NoHooks, TurnOutcome};
use std::sync::Arc;

/// Advance one turn
pub async fn advance_turn(State(state): State<Arc<ServerState>>) -> Json<TurnOutcome> {
    let mut game = state.game();
    Json(game.advance_turn(&mut NoHooks))
}
