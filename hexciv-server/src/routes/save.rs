//! Save snapshot endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use hexciv_core::SaveGame;
use std::sync::Arc;

/// Full game snapshot in save-file form
pub async fn get_save(State(state): State<Arc<ServerState>>) -> Json<SaveGame> {
    let game = state.game();
    Json(game.to_save())
}
