//! CLI-specific configuration for the terminal UI.
use std::env;
use std::path::PathBuf;

use stonehaven_frontend_core::ClientConfig;

/// Terminal interface settings, layered on top of the cross-frontend
/// [`ClientConfig`].
///
/// Environment variables:
/// - `CLI_LOG_DIR` - directory for the rolling log file (default: `logs`)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub log_dir: PathBuf,
    /// Notice lines shown in the bottom log panel.
    pub notice_log_limit: usize,
}

impl CliConfig {
    pub fn from_env(client: &ClientConfig) -> Self {
        let log_dir = env::var("CLI_LOG_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            log_dir,
            notice_log_limit: client.notice_log_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_limit_follows_client_config() {
        let mut client = ClientConfig::default();
        client.notice_log_limit = 12;
        let config = CliConfig::from_env(&client);
        assert_eq!(config.notice_log_limit, 12);
    }
}
