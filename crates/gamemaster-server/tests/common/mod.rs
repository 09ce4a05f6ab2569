use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use gamemaster_core::detector::DefuseDetector;

use gamemaster_server::build_app;
use gamemaster_server::config::ServerConfig;
use gamemaster_server::detector::AllowAllDetector;

pub struct TestServer {
    pub addr: SocketAddr,
    _server: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server whose detector reports every bomb defusable.
    pub async fn new() -> Self {
        Self::with_detector(Arc::new(AllowAllDetector)).await
    }

    /// Start a test server with a scripted detector.
    pub async fn with_detector(detector: Arc<dyn DefuseDetector>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(ServerConfig::default(), detector);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _server: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start a game over HTTP, returning the response JSON.
pub async fn start_game(client: &reqwest::Client, base: &str, name: &str) -> serde_json::Value {
    let resp = client
        .post(format!("{base}/games"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

/// Join a game over HTTP, returning the player JSON.
pub async fn join_game(
    client: &reqwest::Client,
    base: &str,
    game_id: u64,
    name: &str,
) -> serde_json::Value {
    let resp = client
        .post(format!("{base}/games/{game_id}"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

/// Report a planted bomb over HTTP.
pub async fn add_bomb(client: &reqwest::Client, base: &str, bomb_id: u64, explosion_at: &str) {
    let resp = client
        .post(format!("{base}/bombs"))
        .json(&serde_json::json!({ "bombId": bomb_id, "explosionAt": explosion_at }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
}
