use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gamemaster_server::build_app;
use gamemaster_server::config::ServerConfig;
use gamemaster_server::detector::AllowAllDetector;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::load();
    config.validate();

    let listen_addr = config.listen_addr.clone();
    let (app, _state) = build_app(config, Arc::new(AllowAllDetector));

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {listen_addr}: {e}"));

    tracing::info!("Gamemaster server listening on {listen_addr}");

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
