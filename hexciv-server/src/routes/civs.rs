//! Civilization endpoint: HUD numbers and unit rosters

use crate::state::ServerState;
use axum::{extract::State, Json};
use hexciv_core::{CivSummary, Unit};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct CivView {
    #[serde(flatten)]
    pub hud: CivSummary,
    pub plural_name: String,
    pub colour: [u8; 3],
    pub units: Vec<Unit>,
}

/// List all civilizations
pub async fn get_civs(State(state): State<Arc<ServerState>>) -> Json<Vec<CivView>> {
    let game = state.game();
    let civs = game
        .civilizations()
        .iter()
        .filter_map(|civ| {
            game.hud(civ.id).map(|hud| CivView {
                hud,
                plural_name: civ.plural_name.clone(),
                colour: civ.colour,
                units: civ.units().to_vec(),
            })
        })
        .collect();
    Json(civs)
}
