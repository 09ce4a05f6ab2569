use std::sync::Arc;

use gamemaster_core::action::{Action, Actions, ParamKind};
use gamemaster_core::bomb::{Bomb, BombId};
use gamemaster_core::defuse::{DefuseAttempt, DefuseId};
use gamemaster_core::detector::DefuseDetector;
use gamemaster_core::game::{Game, GameId};
use gamemaster_core::player::{Player, PlayerId};
use gamemaster_core::resource::{
    BombView, BombsInGame, DefuseView, DefusesInGame, GameDetail, GameSummary, GamesCollection,
    PlayerView, StartedGame,
};

/// Why a defuse call recorded nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefuseError {
    /// The player is not on the game's roster (or no such game exists).
    PlayerNotInGame,
    /// The game has no bomb left to defuse.
    NoActiveBomb,
}

/// Aggregate counts over the whole store.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HolderStats {
    pub games: usize,
    pub players: usize,
    pub active_bombs: usize,
    pub defused_bombs: usize,
    pub defuse_attempts: usize,
}

/// Holds the current game and the history of games, bombs, and defuse
/// attempts.
///
/// All mutable game state lives here; handlers reach it through one
/// `Arc<RwLock<GamesHolder>>` (see [`crate::state`]), which preserves the
/// single-writer discipline the game rules assume. Detector calls happen
/// while that exclusive window is held.
///
/// Lookups are linear scans over insertion-ordered `Vec`s: collections and
/// defuse logs must come back in original order, and the store is small.
pub struct GamesHolder {
    current_game_id: GameId,
    next_player_id: PlayerId,
    next_defuse_id: DefuseId,
    games: Vec<Game>,
    bombs: Vec<Bomb>,
    defuse_attempts: Vec<DefuseAttempt>,
    detector: Arc<dyn DefuseDetector>,
}

impl GamesHolder {
    pub fn new(detector: Arc<dyn DefuseDetector>) -> Self {
        Self {
            current_game_id: 0,
            next_player_id: 0,
            next_defuse_id: 0,
            games: Vec::new(),
            bombs: Vec::new(),
            defuse_attempts: Vec::new(),
            detector,
        }
    }

    /// Start a new game and advance the current-game pointer to it.
    ///
    /// Game IDs are 1-based and strictly increasing. The name is stored
    /// as given; an empty name is accepted.
    pub fn start_game(&mut self, name: &str) -> StartedGame {
        self.current_game_id += 1;
        let game = Game::new(self.current_game_id, name.to_string());
        let game_url = format!("/games/{}", game.id);

        let view = StartedGame {
            game_id: game.id,
            name: game.name.clone(),
            actions: Actions {
                registration: Some(
                    Action::post(game_url.as_str()).with_param("name", ParamKind::String),
                ),
                information: Some(Action::get(game_url.as_str())),
                ..Actions::default()
            },
        };

        tracing::info!(game_id = game.id, "Game started");
        self.games.push(game);
        view
    }

    /// Look up one game. `None` when no game has that ID.
    ///
    /// The view always carries a `defuse` action; `leaveGame` is attached
    /// only while the roster is non-empty and targets the first player to
    /// join, mirroring the wire contract's single-player leave shortcut.
    pub fn game_information(&self, game_id: GameId) -> Option<GameDetail> {
        let game = self.games.iter().find(|g| g.id == game_id)?;
        Some(GameDetail {
            game_id: game.id,
            name: game.name.clone(),
            players: game
                .players
                .iter()
                .map(|p| player_view(game.id, p))
                .collect(),
            actions: game_actions(game),
        })
    }

    /// Summaries of every game ever started, in creation order, plus a
    /// pointer at the current game.
    pub fn games_collection(&self) -> GamesCollection {
        GamesCollection {
            games: self
                .games
                .iter()
                .map(|g| GameSummary {
                    game_id: g.id,
                    name: g.name.clone(),
                })
                .collect(),
            actions: Actions {
                current_game: Some(Action::get(format!("/games/{}", self.current_game_id))),
                ..Actions::default()
            },
        }
    }

    /// Register a player in a game.
    ///
    /// `None` when the game does not exist; the global player counter is
    /// only consumed on success, so a failed join leaves no trace.
    pub fn join_game(&mut self, game_id: GameId, player_name: &str) -> Option<PlayerView> {
        let game = self.games.iter_mut().find(|g| g.id == game_id)?;
        self.next_player_id += 1;

        let player = Player {
            id: self.next_player_id,
            name: player_name.to_string(),
        };
        let view = player_view(game_id, &player);

        tracing::info!(game_id, player_id = player.id, "Player joined");
        game.players.push(player);
        Some(view)
    }

    /// Remove a player from a game's roster.
    ///
    /// Idempotent: an absent game or player ID is a no-op. Returns whether
    /// a player was actually removed.
    pub fn leave_game(&mut self, game_id: GameId, player_id: PlayerId) -> bool {
        let Some(game) = self.games.iter_mut().find(|g| g.id == game_id) else {
            return false;
        };
        let removed = game.remove_player(player_id);
        if removed {
            tracing::info!(game_id, player_id, "Player left");
        }
        removed
    }

    /// The roster of a game in join order; empty when no game matches.
    pub fn list_players(&self, game_id: GameId) -> Vec<PlayerView> {
        self.games
            .iter()
            .find(|g| g.id == game_id)
            .map(|g| g.players.iter().map(|p| player_view(g.id, p)).collect())
            .unwrap_or_default()
    }

    /// The most recently started game's ID; 0 before any game exists.
    pub fn current_game_id(&self) -> GameId {
        self.current_game_id
    }

    /// Register a bomb reported by the detector.
    ///
    /// The bomb is tagged with the *current* game, even when no game has
    /// started yet (game ID 0). Bomb IDs come from the detector and are
    /// not checked for uniqueness: duplicates create distinct records and
    /// later lookups resolve to the first match.
    pub fn add_bomb(&mut self, bomb_id: BombId, explosion_at: String) {
        tracing::info!(bomb_id, game_id = self.current_game_id, "Bomb added");
        self.bombs
            .push(Bomb::new(bomb_id, self.current_game_id, explosion_at));
    }

    /// A game's bombs partitioned into active and defused, insertion order
    /// preserved within each bucket.
    pub fn list_all_bombs(&self, game_id: GameId) -> BombsInGame {
        let mut bombs = BombsInGame::default();
        for bomb in self.bombs.iter().filter(|b| b.game_id == game_id) {
            if bomb.defused {
                bombs.defused.push(bomb_view(bomb));
            } else {
                bombs.active.push(bomb_view(bomb));
            }
        }
        bombs
    }

    /// First bomb matching both IDs, or `None`.
    pub fn bomb_information(&self, game_id: GameId, bomb_id: BombId) -> Option<BombView> {
        self.bombs
            .iter()
            .find(|b| b.game_id == game_id && b.id == bomb_id)
            .map(bomb_view)
    }

    /// Attempt to defuse the game's oldest still-active bomb.
    ///
    /// The player must be on the game's roster and the game must have an
    /// active bomb; otherwise nothing is recorded and no counter advances.
    /// The detector decides whether the physical defuse succeeds, but an
    /// attempt record is appended either way, capturing the bomb's defused
    /// flag and explosion time at this moment.
    pub fn defuse_bomb(
        &mut self,
        game_id: GameId,
        player_id: PlayerId,
    ) -> Result<DefuseView, DefuseError> {
        let on_roster = self
            .games
            .iter()
            .find(|g| g.id == game_id)
            .is_some_and(|g| g.has_player(player_id));
        if !on_roster {
            return Err(DefuseError::PlayerNotInGame);
        }

        let bomb = self
            .bombs
            .iter_mut()
            .find(|b| b.game_id == game_id && !b.defused)
            .ok_or(DefuseError::NoActiveBomb)?;

        if self.detector.can_defuse_bomb(bomb.id) {
            self.detector.defuse_bomb(bomb.id);
            bomb.defused = true;
            tracing::info!(game_id, player_id, bomb_id = bomb.id, "Bomb defused");
        } else {
            tracing::info!(
                game_id,
                player_id,
                bomb_id = bomb.id,
                "Defuse attempt failed"
            );
        }

        self.next_defuse_id += 1;
        let attempt = DefuseAttempt {
            id: self.next_defuse_id,
            game_id,
            player_id,
            bomb_id: bomb.id,
            defused: bomb.defused,
            explosion_at: bomb.explosion_at.clone(),
        };
        let view = defuse_view(&attempt);
        self.defuse_attempts.push(attempt);
        Ok(view)
    }

    /// Every recorded attempt for a game, oldest first.
    pub fn get_defuses(&self, game_id: GameId) -> DefusesInGame {
        DefusesInGame {
            defuses: self
                .defuse_attempts
                .iter()
                .filter(|a| a.game_id == game_id)
                .map(defuse_view)
                .collect(),
        }
    }

    /// Aggregate counts for the health endpoint.
    pub fn stats(&self) -> HolderStats {
        HolderStats {
            games: self.games.len(),
            players: self.games.iter().map(|g| g.players.len()).sum(),
            active_bombs: self.bombs.iter().filter(|b| !b.defused).count(),
            defused_bombs: self.bombs.iter().filter(|b| b.defused).count(),
            defuse_attempts: self.defuse_attempts.len(),
        }
    }
}

/// Actions legal against a game: `defuse` always, `leaveGame` only while
/// someone is on the roster.
fn game_actions(game: &Game) -> Actions {
    Actions {
        defuse: Some(
            Action::post(format!("/games/{}/defuse", game.id))
                .with_param("playerId", ParamKind::Number),
        ),
        leave_game: game
            .players
            .first()
            .map(|p| Action::delete(format!("/games/{}/{}", game.id, p.id))),
        ..Actions::default()
    }
}

fn player_view(game_id: GameId, player: &Player) -> PlayerView {
    PlayerView {
        id: player.id,
        name: player.name.clone(),
        actions: Actions {
            defuse: Some(
                Action::post(format!("/games/{game_id}/defuse"))
                    .with_param("playerId", ParamKind::Number),
            ),
            leave_game: Some(Action::delete(format!("/games/{game_id}/{}", player.id))),
            ..Actions::default()
        },
    }
}

fn bomb_view(bomb: &Bomb) -> BombView {
    BombView {
        id: bomb.id,
        game_id: bomb.game_id,
        explosion_at: bomb.explosion_at.clone(),
        defused: bomb.defused,
    }
}

fn defuse_view(attempt: &DefuseAttempt) -> DefuseView {
    DefuseView {
        id: attempt.id,
        game_id: attempt.game_id,
        player_id: attempt.player_id,
        bomb_id: attempt.bomb_id,
        defused: attempt.defused,
        explosion_at: attempt.explosion_at.clone(),
        actions: Actions {
            information: Some(Action::get(format!(
                "/games/{}/bombs/{}",
                attempt.game_id, attempt.bomb_id
            ))),
            ..Actions::default()
        },
    }
}
