//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::{EventConsumer, ScoreboardView};

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Render the current match state.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let view = ScoreboardView::from_state(self.session.state());

        let ctx = ui::RenderContext {
            view: &view,
            messages: self.consumer.message_log(),
            app_state: &self.app_state,
            ui_config: &self.cli_config.ui,
        };

        ui::render_scoreboard(terminal, &ctx)
    }
}
