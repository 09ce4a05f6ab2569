pub mod api;
pub mod config;
pub mod detector;
pub mod error;
pub mod games_holder;
pub mod health;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use gamemaster_core::detector::DefuseDetector;

use config::ServerConfig;
use state::AppState;

/// Build the axum router and application state from a config and a
/// detector implementation.
pub fn build_app(config: ServerConfig, detector: Arc<dyn DefuseDetector>) -> (Router, AppState) {
    let timeout = Duration::from_secs(config.limits.request_timeout_secs);
    let state = AppState::new(config, detector);

    let app = Router::new()
        .route("/games", post(api::start_game).get(api::get_games))
        .route("/games/current", get(api::get_current_game))
        .route("/games/{game_id}", get(api::get_game).post(api::join_game))
        .route("/games/{game_id}/{player_id}", delete(api::leave_game))
        .route("/games/{game_id}/players", get(api::list_players))
        .route("/games/{game_id}/defuse", post(api::defuse_bomb))
        .route("/games/{game_id}/bombs", get(api::list_bombs))
        .route("/games/{game_id}/bombs/{bomb_id}", get(api::get_bomb))
        .route("/games/{game_id}/defuses", get(api::get_defuses))
        .route("/bombs", post(api::add_bomb))
        .route("/healthz", get(health::health_check))
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    (app, state)
}
