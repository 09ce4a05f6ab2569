use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use gamemaster_core::bomb::BombId;
use gamemaster_core::game::GameId;
use gamemaster_core::player::PlayerId;
use gamemaster_core::resource::{
    BombView, BombsInGame, CurrentGame, DefuseView, DefusesInGame, GameDetail, GamesCollection,
    PlayerView, StartedGame,
};

use crate::error::AppError;
use crate::games_holder::DefuseError;
use crate::state::AppState;

/// Request body for starting a game.
#[derive(Debug, Deserialize)]
pub struct StartGameBody {
    pub name: String,
}

/// Request body for joining a game.
#[derive(Debug, Deserialize)]
pub struct JoinGameBody {
    pub name: String,
}

/// Request body for a defuse attempt.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefuseBody {
    pub player_id: PlayerId,
}

/// Request body for the detector reporting a planted bomb.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBombBody {
    pub bomb_id: BombId,
    pub explosion_at: String,
}

/// Reject names above the configured length to prevent abuse. Emptiness
/// is fine; the store accepts any stored name.
fn validate_name(name: &str, max_len: usize) -> Result<(), AppError> {
    if name.len() > max_len {
        return Err(AppError::BadRequest(format!(
            "name exceeds {max_len} chars"
        )));
    }
    Ok(())
}

/// POST /games — start a new game and make it current.
pub async fn start_game(
    State(state): State<AppState>,
    Json(body): Json<StartGameBody>,
) -> Result<(StatusCode, Json<StartedGame>), AppError> {
    validate_name(&body.name, state.config.limits.max_name_len)?;
    let mut games = state.games.write().await;
    Ok((StatusCode::CREATED, Json(games.start_game(&body.name))))
}

/// GET /games — every game ever started, in creation order.
pub async fn get_games(State(state): State<AppState>) -> Json<GamesCollection> {
    let games = state.games.read().await;
    Json(games.games_collection())
}

/// GET /games/current — the current-game pointer (0 before any game).
pub async fn get_current_game(State(state): State<AppState>) -> Json<CurrentGame> {
    let games = state.games.read().await;
    Json(CurrentGame {
        game_id: games.current_game_id(),
    })
}

/// GET /games/{game_id} — one game with roster and legal actions.
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Result<Json<GameDetail>, AppError> {
    let games = state.games.read().await;
    games
        .game_information(game_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Game {game_id} not found")))
}

/// POST /games/{game_id} — register a player in the game.
pub async fn join_game(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Json(body): Json<JoinGameBody>,
) -> Result<(StatusCode, Json<PlayerView>), AppError> {
    validate_name(&body.name, state.config.limits.max_name_len)?;
    let mut games = state.games.write().await;
    games
        .join_game(game_id, &body.name)
        .map(|player| (StatusCode::CREATED, Json(player)))
        .ok_or_else(|| AppError::NotFound(format!("Game {game_id} not found")))
}

/// DELETE /games/{game_id}/{player_id} — leave a game. Idempotent.
pub async fn leave_game(
    State(state): State<AppState>,
    Path((game_id, player_id)): Path<(GameId, PlayerId)>,
) -> StatusCode {
    let mut games = state.games.write().await;
    games.leave_game(game_id, player_id);
    StatusCode::NO_CONTENT
}

/// GET /games/{game_id}/players — the roster in join order.
pub async fn list_players(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Json<Vec<PlayerView>> {
    let games = state.games.read().await;
    Json(games.list_players(game_id))
}

/// POST /games/{game_id}/defuse — attempt to defuse the game's oldest
/// active bomb.
pub async fn defuse_bomb(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
    Json(body): Json<DefuseBody>,
) -> Result<(StatusCode, Json<DefuseView>), AppError> {
    let mut games = state.games.write().await;
    match games.defuse_bomb(game_id, body.player_id) {
        Ok(attempt) => Ok((StatusCode::CREATED, Json(attempt))),
        Err(DefuseError::PlayerNotInGame) => Err(AppError::NotFound(format!(
            "Player {} is not in game {game_id}",
            body.player_id
        ))),
        Err(DefuseError::NoActiveBomb) => Err(AppError::Conflict(format!(
            "Game {game_id} has no active bomb"
        ))),
    }
}

/// GET /games/{game_id}/bombs — active/defused bomb partitions.
pub async fn list_bombs(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Json<BombsInGame> {
    let games = state.games.read().await;
    Json(games.list_all_bombs(game_id))
}

/// GET /games/{game_id}/bombs/{bomb_id} — one bomb.
pub async fn get_bomb(
    State(state): State<AppState>,
    Path((game_id, bomb_id)): Path<(GameId, BombId)>,
) -> Result<Json<BombView>, AppError> {
    let games = state.games.read().await;
    games
        .bomb_information(game_id, bomb_id)
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!("Bomb {bomb_id} not found in game {game_id}"))
        })
}

/// GET /games/{game_id}/defuses — the game's defuse attempt log.
pub async fn get_defuses(
    State(state): State<AppState>,
    Path(game_id): Path<GameId>,
) -> Json<DefusesInGame> {
    let games = state.games.read().await;
    Json(games.get_defuses(game_id))
}

/// POST /bombs — the detector reports a planted bomb, tagged with the
/// current game.
pub async fn add_bomb(State(state): State<AppState>, Json(body): Json<AddBombBody>) -> StatusCode {
    let mut games = state.games.write().await;
    games.add_bomb(body.bomb_id, body.explosion_at);
    StatusCode::NO_CONTENT
}
