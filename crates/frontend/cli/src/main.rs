//! Terminal client entry point.
use anyhow::Result;

use stonehaven_frontend_cli::{CliApp, CliConfig, logging};
use stonehaven_frontend_core::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let client_config = ClientConfig::from_env();
    let cli_config = CliConfig::from_env(&client_config);

    let _log_guard = logging::init(&cli_config.log_dir);

    CliApp::new(&client_config, cli_config).run().await
}
