/// Unique identifier for a player. IDs come from one global counter, so a
/// player ID is unique across every game ever started, not per game.
pub type PlayerId = u64;

/// A registered player. Owned by at most one game's roster at a time;
/// once removed, the ID is never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}
