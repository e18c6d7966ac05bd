//! Runtime configuration for the player.
//!
//! The earlier front-end iterations hard-coded three different deployments
//! (mock-only, remote host, relative `/api` proxy). Those collapse into one
//! configuration struct read from the environment at startup.

/// Player configuration, assembled once in `main` and shared via context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Base URL for the REST endpoints (`/historias`, `/login`, ...).
    pub http_base_url: String,
    /// WebSocket endpoint for the game session channel.
    pub ws_url: String,
    /// Serve a static mock catalog when the backend is unreachable.
    pub offline_fallback: bool,
}

impl PlayerConfig {
    pub const DEFAULT_HTTP_URL: &'static str = "http://localhost:8000/api";
    pub const DEFAULT_WS_URL: &'static str = "ws://localhost:8000/ws";

    /// Read configuration from `DETETIVE_*` environment variables, falling
    /// back to the local development defaults.
    pub fn from_env() -> Self {
        let http_base_url = std::env::var("DETETIVE_HTTP_URL")
            .unwrap_or_else(|_| Self::DEFAULT_HTTP_URL.to_string());
        let ws_url = std::env::var("DETETIVE_WS_URL")
            .unwrap_or_else(|_| Self::DEFAULT_WS_URL.to_string());
        let offline_fallback = std::env::var("DETETIVE_OFFLINE_FALLBACK")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            http_base_url,
            ws_url,
            offline_fallback,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            http_base_url: Self::DEFAULT_HTTP_URL.to_string(),
            ws_url: Self::DEFAULT_WS_URL.to_string(),
            offline_fallback: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parsing_accepts_common_truthy_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn default_points_at_local_backend() {
        let config = PlayerConfig::default();
        assert_eq!(config.http_base_url, PlayerConfig::DEFAULT_HTTP_URL);
        assert_eq!(config.ws_url, PlayerConfig::DEFAULT_WS_URL);
        assert!(!config.offline_fallback);
    }
}
