//! Glue tying the API client, store channels, and terminal UI together.
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use stonehaven_api::{GameApi, HttpApi};
use stonehaven_frontend_core::{ClientConfig, Dispatcher};

use crate::config::CliConfig;
use crate::event::{EventLoop, Services};
use crate::presentation::terminal::TerminalGuard;

pub struct CliApp<A: GameApi + 'static> {
    event_loop: EventLoop<A>,
}

impl CliApp<HttpApi> {
    /// Wire up the default stack: HTTP transport against the configured
    /// server base URL.
    pub fn new(client_config: &ClientConfig, cli_config: CliConfig) -> Self {
        let api = Arc::new(HttpApi::new(&client_config.api_base_url));
        Self::with_api(api, cli_config)
    }
}

impl<A: GameApi + 'static> CliApp<A> {
    /// Build the app around any [`GameApi`], which is what tests use.
    pub fn with_api(api: Arc<A>, cli_config: CliConfig) -> Self {
        let (dispatcher, rx_store) = Dispatcher::channel();
        let (tx_ui, rx_ui) = mpsc::unbounded_channel();
        let services = Services::new(api, dispatcher, tx_ui);

        Self {
            event_loop: EventLoop::new(services, rx_store, rx_ui, cli_config),
        }
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("terminal client starting");

        let (guard, mut terminal) = TerminalGuard::enter()?;
        let result = self.event_loop.run(&mut terminal).await;
        drop(guard);

        tracing::info!("terminal client exiting");
        result
    }
}
