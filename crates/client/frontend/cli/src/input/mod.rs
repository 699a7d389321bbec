//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scoring_core::{Action, MatchState, Side};

use crate::state::{AppMode, PromptKind};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Dispatch the decoded action to the session.
    Dispatch(Action),
    /// Open the prompt line.
    OpenPrompt(PromptKind),
    PromptInput(char),
    PromptBackspace,
    PromptSubmit,
    PromptCancel,
    /// No meaningful command was produced.
    None,
}

/// Key bindings shown in the control bar, in display order.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("a/l", "point"),
    ("A/L", "-2 pts"),
    ("s/k", "game"),
    ("S/K", "-2 games"),
    ("1/2", "serve"),
    ("c", "ends"),
    ("r", "reset pts"),
    ("R", "reset all"),
    ("n/m", "names"),
    (":", "command"),
    ("q", "quit"),
];

/// Translates `KeyEvent`s into scoreboard commands.
///
/// Letters on the left of the keyboard drive side A, the mirrored letters on
/// the right drive side B; shifted letters are the corrections.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// `state` is consulted for the serve toggles, which flip the current
    /// switch position.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode, state: &MatchState) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            AppMode::Normal => self.handle_normal(key, state),
            AppMode::Prompt(_) => self.handle_prompt(key),
        }
    }

    fn handle_normal(&self, key: KeyEvent, state: &MatchState) -> KeyAction {
        let KeyCode::Char(ch) = key.code else {
            return match key.code {
                KeyCode::Esc => KeyAction::Quit,
                _ => KeyAction::None,
            };
        };

        match ch {
            'q' => KeyAction::Quit,
            'a' => KeyAction::Dispatch(Action::award_point(Side::A)),
            'l' => KeyAction::Dispatch(Action::award_point(Side::B)),
            'A' => KeyAction::Dispatch(Action::correct_point(Side::A)),
            'L' => KeyAction::Dispatch(Action::correct_point(Side::B)),
            's' => KeyAction::Dispatch(Action::award_game(Side::A)),
            'k' => KeyAction::Dispatch(Action::award_game(Side::B)),
            'S' => KeyAction::Dispatch(Action::correct_game(Side::A)),
            'K' => KeyAction::Dispatch(Action::correct_game(Side::B)),
            '1' => toggle_service(state, Side::A),
            '2' => toggle_service(state, Side::B),
            'c' => KeyAction::Dispatch(Action::change_ends()),
            'r' => KeyAction::Dispatch(Action::reset_points()),
            'R' => KeyAction::Dispatch(Action::reset_all()),
            'n' => KeyAction::OpenPrompt(PromptKind::Name(Side::A)),
            'm' => KeyAction::OpenPrompt(PromptKind::Name(Side::B)),
            ':' => KeyAction::OpenPrompt(PromptKind::Command),
            _ => KeyAction::None,
        }
    }

    fn handle_prompt(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => KeyAction::PromptInput(ch),
            KeyCode::Backspace => KeyAction::PromptBackspace,
            KeyCode::Enter => KeyAction::PromptSubmit,
            KeyCode::Esc => KeyAction::PromptCancel,
            _ => KeyAction::None,
        }
    }
}

fn toggle_service(state: &MatchState, side: Side) -> KeyAction {
    let serving = state.server() == Some(side);
    KeyAction::Dispatch(Action::set_service(side, !serving))
}
