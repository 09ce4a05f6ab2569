//! Resource views returned to clients.
//!
//! Every view carries an [`Actions`](crate::action::Actions) map describing
//! the operations currently legal against it. Wire fields are camelCase.

use serde::{Deserialize, Serialize};

use crate::action::Actions;
use crate::bomb::BombId;
use crate::defuse::DefuseId;
use crate::game::GameId;
use crate::player::PlayerId;

/// Representation of a freshly started game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartedGame {
    pub game_id: GameId,
    pub name: String,
    pub actions: Actions,
}

/// Lightweight (ID, name) entry in the games collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: GameId,
    pub name: String,
}

/// Every game ever started, in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesCollection {
    pub games: Vec<GameSummary>,
    pub actions: Actions,
}

/// Full view of one game, roster included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub game_id: GameId,
    pub name: String,
    pub players: Vec<PlayerView>,
    pub actions: Actions,
}

/// A roster entry with the actions scoped to that player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub actions: Actions,
}

/// The current-game pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGame {
    pub game_id: GameId,
}

/// View of one bomb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BombView {
    pub id: BombId,
    pub game_id: GameId,
    pub explosion_at: String,
    pub defused: bool,
}

/// A game's bombs, partitioned by defused state. Insertion order is
/// preserved within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BombsInGame {
    pub active: Vec<BombView>,
    pub defused: Vec<BombView>,
}

/// View of one recorded defuse attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefuseView {
    pub id: DefuseId,
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub bomb_id: BombId,
    pub defused: bool,
    pub explosion_at: String,
    pub actions: Actions,
}

/// Every defuse attempt recorded against a game, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefusesInGame {
    pub defuses: Vec<DefuseView>,
}
