//! Session dispatch and prompt submission.

use client_frontend_core::EventConsumer;
use scoring_core::{Action, ScoreboardError};

use super::super::EventLoop;
use crate::state::PromptKind;

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Dispatches an action and lets the consumer record it.
    pub(in crate::event) fn dispatch(&mut self, action: Action) {
        let event = self.session.dispatch(action);
        let impact = self.consumer.on_event(&event, self.session.state());

        if !impact.requires_redraw {
            tracing::debug!(sequence = event.sequence, action = %event.action, "no change");
        }
    }

    /// Closes the prompt and acts on what was typed.
    ///
    /// Command lines that fail to parse are reported in the message log and
    /// leave the match untouched.
    pub(in crate::event) fn submit_prompt(&mut self) {
        let Some(prompt) = self.app_state.take_prompt() else {
            return;
        };

        match prompt.kind {
            PromptKind::Name(side) => self.dispatch(Action::set_name(side, prompt.buffer)),
            PromptKind::Command => match prompt.buffer.parse::<Action>() {
                Ok(action) => self.dispatch(action),
                Err(error) => {
                    tracing::warn!(
                        code = error.error_code(),
                        severity = error.severity().as_str(),
                        input = %prompt.buffer,
                        "rejected command: {}",
                        error
                    );
                    self.consumer
                        .message_log_mut()
                        .push_warning(error.to_string());
                }
            },
        }
    }
}
