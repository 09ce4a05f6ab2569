use axum::Json;
use axum::extract::State;
use serde::Serialize;

use gamemaster_core::game::GameId;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub games: GamesInfo,
    pub bombs: BombsInfo,
    pub defuse_attempts: usize,
}

#[derive(Serialize)]
pub struct GamesInfo {
    pub total: usize,
    pub current_game_id: GameId,
    pub players: usize,
}

#[derive(Serialize)]
pub struct BombsInfo {
    pub active: usize,
    pub defused: usize,
}

/// Structured health check endpoint. Returns server status and store
/// counts as JSON.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (stats, current_game_id) = {
        let games = state.games.read().await;
        (games.stats(), games.current_game_id())
    };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        games: GamesInfo {
            total: stats.games,
            current_game_id,
            players: stats.players,
        },
        bombs: BombsInfo {
            active: stats.active_bombs,
            defused: stats.defused_bombs,
        },
        defuse_attempts: stats.defuse_attempts,
    })
}
