use serde::Deserialize;

/// Top-level server configuration, loaded from `gamemaster.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub limits: LimitsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            limits: LimitsConfig::default(),
        }
    }
}

/// Transport-boundary limits. The game rules themselves know nothing of
/// these; they only harden the HTTP surface.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Maximum accepted length for game and player names.
    pub max_name_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            max_name_len: 256,
        }
    }
}

impl ServerConfig {
    /// Validate configuration, exiting on values the server cannot run with.
    pub fn validate(&self) {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            tracing::error!(
                addr = %self.listen_addr,
                "listen_addr is not a valid socket address"
            );
            std::process::exit(1);
        }
        if self.limits.request_timeout_secs == 0 {
            tracing::error!("limits.request_timeout_secs must be > 0");
            std::process::exit(1);
        }
        if self.limits.max_name_len == 0 {
            tracing::error!("limits.max_name_len must be > 0");
            std::process::exit(1);
        }
    }

    /// Load config from `gamemaster.toml` if it exists, then apply env var
    /// overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("gamemaster.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from gamemaster.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse gamemaster.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No gamemaster.toml found, using defaults");
                ServerConfig::default()
            },
        };

        if let Ok(addr) = std::env::var("GAMEMASTER_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(val) = std::env::var("GAMEMASTER_REQUEST_TIMEOUT_SECS")
            && let Ok(n) = val.parse::<u64>()
        {
            config.limits.request_timeout_secs = n;
        }
        if let Ok(val) = std::env::var("GAMEMASTER_MAX_NAME_LEN")
            && let Ok(n) = val.parse::<usize>()
        {
            config.limits.max_name_len = n;
        }

        config
    }
}
