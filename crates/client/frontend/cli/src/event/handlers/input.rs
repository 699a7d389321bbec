//! Input handling (keyboard polling and key dispatch).

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui, state::PromptKind};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for keyboard input and handle UI interactions.
    ///
    /// Returns `true` when the operator asked to quit.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        let action = self
            .input
            .handle_key(key, &self.app_state.mode, self.session.state());
        let quit = self.apply_key_action(action);
        self.render(terminal)?;
        Ok(quit)
    }

    /// Applies a decoded key to the session or the prompt line.
    pub(in crate::event) fn apply_key_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                return true;
            }
            KeyAction::Dispatch(action) => self.dispatch(action),
            KeyAction::OpenPrompt(kind) => {
                let initial = match kind {
                    PromptKind::Name(side) => self.session.state().player(side).name.clone(),
                    PromptKind::Command => String::new(),
                };
                self.app_state.open_prompt(kind, initial);
            }
            KeyAction::PromptInput(ch) => self.app_state.push_char(ch),
            KeyAction::PromptBackspace => self.app_state.pop_char(),
            KeyAction::PromptSubmit => self.submit_prompt(),
            KeyAction::PromptCancel => self.app_state.exit_to_normal(),
            KeyAction::None => {}
        }
        false
    }
}
