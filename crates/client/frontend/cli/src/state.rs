//! Application state for mode management and the input prompt.

use scoring_core::Side;

/// What the prompt line is collecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// Name label for one side.
    Name(Side),
    /// A textual command such as `point a` or `serve b off`.
    Command,
}

impl PromptKind {
    pub fn title(self) -> String {
        match self {
            PromptKind::Name(side) => format!("Name for side {side}"),
            PromptKind::Command => String::from("Command"),
        }
    }
}

/// Line editor state while the prompt is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub buffer: String,
}

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Single-key scoring.
    #[default]
    Normal,
    /// Keys are typed into the prompt line.
    Prompt(PromptState),
}

/// Mutable application state tracking the current mode.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the prompt, pre-filled with `initial`.
    pub fn open_prompt(&mut self, kind: PromptKind, initial: impl Into<String>) {
        self.mode = AppMode::Prompt(PromptState {
            kind,
            buffer: initial.into(),
        });
    }

    pub fn push_char(&mut self, ch: char) {
        if let AppMode::Prompt(prompt) = &mut self.mode {
            prompt.buffer.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if let AppMode::Prompt(prompt) = &mut self.mode {
            prompt.buffer.pop();
        }
    }

    /// Closes the prompt and returns what was typed.
    pub fn take_prompt(&mut self) -> Option<PromptState> {
        match std::mem::take(&mut self.mode) {
            AppMode::Prompt(prompt) => Some(prompt),
            AppMode::Normal => None,
        }
    }

    /// Exits to Normal mode, discarding any prompt input.
    pub fn exit_to_normal(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Returns true if currently in a modal mode requiring text input.
    pub fn is_modal(&self) -> bool {
        !matches!(self.mode, AppMode::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_normal() {
        let state = AppState::new();
        assert_eq!(state.mode, AppMode::Normal);
        assert!(!state.is_modal());
    }

    #[test]
    fn prompt_edits_buffer() {
        let mut state = AppState::new();
        state.open_prompt(PromptKind::Name(Side::A), "Wal");
        state.push_char('d');
        state.push_char('x');
        state.pop_char();

        let prompt = state.take_prompt().expect("prompt open");
        assert_eq!(prompt.kind, PromptKind::Name(Side::A));
        assert_eq!(prompt.buffer, "Wald");
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn editing_outside_prompt_is_ignored() {
        let mut state = AppState::new();
        state.push_char('x');
        state.pop_char();

        assert_eq!(state.take_prompt(), None);
    }

    #[test]
    fn exit_discards_input() {
        let mut state = AppState::new();
        state.open_prompt(PromptKind::Command, "");
        state.push_char('p');
        state.exit_to_normal();

        assert!(!state.is_modal());
        assert_eq!(state.take_prompt(), None);
    }
}
