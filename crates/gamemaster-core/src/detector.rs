use crate::bomb::BombId;

/// Interface to the physical bomb-defuse detector (the color-tracking rig).
///
/// The store calls both methods synchronously while holding its exclusive
/// access window for the operation, so implementations should answer
/// promptly and must be safe to share across request handlers.
pub trait DefuseDetector: Send + Sync {
    /// Whether the rig currently reports this bomb as defusable.
    fn can_defuse_bomb(&self, bomb_id: BombId) -> bool;

    /// Commit the physical defuse: mark the rig's state for this bomb
    /// resolved.
    fn defuse_bomb(&self, bomb_id: BombId);
}
