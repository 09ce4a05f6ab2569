pub mod action;
pub mod bomb;
pub mod defuse;
pub mod detector;
pub mod game;
pub mod player;
pub mod resource;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use crate::bomb::BombId;
    use crate::detector::DefuseDetector;

    /// Detector stand-in with a scripted set of defusable bomb IDs.
    /// Every `defuse_bomb` command is recorded for assertion.
    pub struct ScriptedDetector {
        defusable: Mutex<HashSet<BombId>>,
        commands: Mutex<Vec<BombId>>,
    }

    impl ScriptedDetector {
        /// A detector that reports only the given bombs as defusable.
        pub fn allowing(ids: impl IntoIterator<Item = BombId>) -> Self {
            Self {
                defusable: Mutex::new(ids.into_iter().collect()),
                commands: Mutex::new(Vec::new()),
            }
        }

        /// A detector that reports no bomb as defusable.
        pub fn denying_all() -> Self {
            Self::allowing([])
        }

        /// Mark a bomb defusable mid-test.
        pub fn allow(&self, bomb_id: BombId) {
            self.defusable.lock().unwrap().insert(bomb_id);
        }

        /// Bomb IDs the store has commanded this detector to defuse, in order.
        pub fn commanded(&self) -> Vec<BombId> {
            self.commands.lock().unwrap().clone()
        }
    }

    impl DefuseDetector for ScriptedDetector {
        fn can_defuse_bomb(&self, bomb_id: BombId) -> bool {
            self.defusable.lock().unwrap().contains(&bomb_id)
        }

        fn defuse_bomb(&self, bomb_id: BombId) {
            self.commands.lock().unwrap().push(bomb_id);
        }
    }
}
