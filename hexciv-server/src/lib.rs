//! HEXCIV Server - HTTP API for the renderer
//!
//! This crate provides the web backend:
//! - Read-only map, civilization and tile queries
//! - Selection, path and turn commands
//! - Static file serving for the renderer

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use hexciv_core::GameState;

pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            static_dir: "hexciv/renderer".to_string(),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Read-only views
        .route("/api/map", get(routes::map::get_map))
        .route("/api/civs", get(routes::civs::get_civs))
        .route("/api/hex", get(routes::hex::inspect_hex))
        .route("/api/save", get(routes::save::get_save))
        // Selection
        .route(
            "/api/focus",
            get(routes::focus::get_focus).post(routes::focus::set_focus),
        )
        // Paths
        .route("/api/path", post(routes::path::plan_path))
        .route("/api/path/clear", post(routes::path::clear_path))
        .route("/api/path/follow", post(routes::path::follow_path))
        // Turns
        .route("/api/turn", post(routes::turn::advance_turn))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig, game: GameState) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(game));
    let router = create_router(&config, state);

    tracing::info!("HEXCIV Server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
