//! Glue code tying the event source and the terminal UI together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use camtel_api::EventSource;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig};

/// Terminal dashboard implementing [`Frontend`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, source: Arc<dyn EventSource>) -> Result<()> {
        tracing::info!("CLI dashboard starting...");

        let event_loop = EventLoop::new(
            source,
            self.frontend_config.clone(),
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI dashboard exiting");

        Ok(())
    }
}
