use crate::game::GameId;

/// Identifier of a physical bomb, supplied by the detector rather than
/// allocated here. Duplicates are accepted; lookups take the first match.
pub type BombId = u64;

/// A physical bomb tracked by the vision rig, scoped to the game that was
/// current when it was reported.
#[derive(Debug, Clone)]
pub struct Bomb {
    pub id: BombId,
    pub game_id: GameId,
    /// Scheduled explosion time, as reported by the detector.
    pub explosion_at: String,
    /// Flips to true on a successful defuse and never reverts.
    pub defused: bool,
}

impl Bomb {
    pub fn new(id: BombId, game_id: GameId, explosion_at: String) -> Self {
        Self {
            id,
            game_id,
            explosion_at,
            defused: false,
        }
    }
}
