use crate::bomb::BombId;
use crate::game::GameId;
use crate::player::PlayerId;

/// Unique identifier for a defuse attempt, from a global counter.
pub type DefuseId = u64;

/// Immutable audit record of one attempt by a player to disable a bomb.
///
/// An attempt is appended whether or not the defuse succeeded and is never
/// edited or removed afterwards. `defused` and `explosion_at` capture the
/// bomb's state at the moment of the attempt.
#[derive(Debug, Clone)]
pub struct DefuseAttempt {
    pub id: DefuseId,
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub bomb_id: BombId,
    pub defused: bool,
    pub explosion_at: String,
}
