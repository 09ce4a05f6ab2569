use std::sync::Arc;
use tokio::sync::RwLock;

use gamemaster_core::detector::DefuseDetector;

use crate::config::ServerConfig;
use crate::games_holder::GamesHolder;

/// One lock guards every read and write of game state, preserving the
/// single-writer discipline the game rules assume.
pub type SharedGamesHolder = Arc<RwLock<GamesHolder>>;

#[derive(Clone)]
pub struct AppState {
    pub games: SharedGamesHolder,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, detector: Arc<dyn DefuseDetector>) -> Self {
        Self {
            games: Arc::new(RwLock::new(GamesHolder::new(detector))),
            config: Arc::new(config),
        }
    }
}
