use crate::player::{Player, PlayerId};

/// Unique identifier for a game. The highest ID ever issued is the
/// "current" game.
pub type GameId = u64;

/// A single play session: ID, name, and the join-ordered roster.
///
/// Games are never deleted; finished games stay queryable.
#[derive(Debug, Clone)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub players: Vec<Player>,
}

impl Game {
    pub fn new(id: GameId, name: String) -> Self {
        Self {
            id,
            name,
            players: Vec::new(),
        }
    }

    /// Whether the given player is on this game's roster.
    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// Remove a player from the roster. Returns whether a player was removed.
    pub fn remove_player(&mut self, player_id: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != player_id);
        self.players.len() != before
    }
}
