use gamemaster_core::bomb::BombId;
use gamemaster_core::detector::DefuseDetector;

/// Stand-in for the color-tracking rig: reports every bomb as defusable
/// and only logs the defuse command.
///
/// The real detector runs outside this process and is wired in through
/// the `DefuseDetector` trait at startup.
pub struct AllowAllDetector;

impl DefuseDetector for AllowAllDetector {
    fn can_defuse_bomb(&self, _bomb_id: BombId) -> bool {
        true
    }

    fn defuse_bomb(&self, bomb_id: BombId) {
        tracing::info!(bomb_id, "Detector commanded to defuse bomb");
    }
}
