//! Cross-frontend client configuration.
use std::env;

/// Configuration shared by every frontend.
///
/// Environment variables:
/// - `GAME_API_URL` - base URL of the game server
///   (default: `http://localhost:5000`)
/// - `NOTICE_LOG_LIMIT` - how many recent notices screens show (default: 8)
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub notice_log_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            notice_log_limit: 8,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("GAME_API_URL") {
            if !url.trim().is_empty() {
                config.api_base_url = url;
            }
        }

        if let Some(limit) = read_env::<usize>("NOTICE_LOG_LIMIT") {
            config.notice_log_limit = limit.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
