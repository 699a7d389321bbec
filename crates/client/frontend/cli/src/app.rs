//! Glue code tying the match session and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, MatchSession, message::MessageLog};
use scoring_core::MatchState;

/// Terminal scoreboard.
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
    async fn run(&mut self, session: MatchSession) -> Result<MatchSession> {
        tracing::info!(
            correction = ?session.config().correction,
            orientation = ?self.cli_config.ui.orientation,
            "CLI scoreboard starting"
        );

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push_text("Scoreboard ready. Press : for commands, q to quit.");

        let consumer = CliEventConsumer::new(messages);
        let event_loop = EventLoop::new(session, consumer, self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let (session, _consumer) = event_loop.run(&mut terminal).await?;

        terminal::restore()?;

        log_final_state(session.state(), session.sequence());
        tracing::info!("CLI scoreboard exiting");

        Ok(session)
    }
}

fn log_final_state(state: &MatchState, actions: u64) {
    match serde_json::to_string(state) {
        Ok(json) => tracing::info!(actions, state = %json, "final match state"),
        Err(error) => tracing::warn!(%error, "failed to serialize final match state"),
    }
}
