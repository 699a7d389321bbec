//! Event loop orchestrating user input, session dispatch and rendering.

use anyhow::Result;
use tokio::time::{self, Duration};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::{EventConsumer, MatchSession};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the session while the terminal UI runs.
///
/// This is the main orchestrator that:
/// - Owns the MatchSession (single writer of the match state)
/// - Turns key presses into actions and dispatches them
/// - Feeds every dispatch to the consumer and redraws on change
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) session: MatchSession,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(session: MatchSession, consumer: C, cli_config: CliConfig) -> Self {
        Self {
            session,
            input: InputHandler::new(),
            consumer,
            app_state: AppState::new(),
            cli_config,
        }
    }

    /// Runs until the operator quits, then returns the session and consumer.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<(MatchSession, C)> {
        self.render(terminal)?;

        let mut ticker = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if self.handle_input_tick(terminal)? {
                break;
            }
        }

        Ok((self.session, self.consumer))
    }
}
