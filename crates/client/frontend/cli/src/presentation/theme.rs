//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{PresentationMapper, message::MessageLevel, view_model::PlayerPanel};
use ratatui::style::{Color, Modifier, Style};
use scoring_core::GameStatus;

/// Ratatui-specific theme implementing PresentationMapper.
///
/// This provides consistent color schemes and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    /// Create a new RatatuiTheme instance.
    pub fn new() -> Self {
        Self
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn name_style(&self, panel: &PlayerPanel) -> Self::Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if panel.has_name {
            style.fg(Color::Cyan)
        } else {
            style.fg(Color::Gray).add_modifier(Modifier::ITALIC)
        }
    }

    fn points_style(&self, panel: &PlayerPanel, status: GameStatus) -> Self::Style {
        let base = Style::default().add_modifier(Modifier::BOLD);
        match status {
            GameStatus::Won(side) if side == panel.side => base.fg(Color::LightGreen),
            GameStatus::Won(_) => base.fg(Color::DarkGray),
            GameStatus::Deuce => base.fg(Color::LightMagenta),
            GameStatus::InPlay if panel.points < 0 => base.fg(Color::LightRed),
            GameStatus::InPlay => base.fg(Color::White),
        }
    }

    fn games_style(&self, _panel: &PlayerPanel) -> Self::Style {
        Style::default().fg(Color::LightBlue)
    }

    fn serve_style(&self, serving: bool) -> Self::Style {
        if serving {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn level_style(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Highlight => Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::ScoreboardView;
    use scoring_core::{MatchState, Side};

    #[test]
    fn winner_is_highlighted_and_loser_dimmed() {
        let mut state = MatchState::new();
        state.player_a.points = 11;
        state.player_b.points = 4;
        let view = ScoreboardView::from_state(&state);
        let theme = RatatuiTheme::new();

        assert_eq!(
            theme.points_style(view.panel(Side::A), view.status).fg,
            Some(Color::LightGreen)
        );
        assert_eq!(
            theme.points_style(view.panel(Side::B), view.status).fg,
            Some(Color::DarkGray)
        );
    }

    #[test]
    fn negative_points_are_flagged() {
        let mut state = MatchState::new();
        state.player_a.points = -2;
        let view = ScoreboardView::from_state(&state);

        assert_eq!(
            RatatuiTheme::new()
                .points_style(view.panel(Side::A), view.status)
                .fg,
            Some(Color::LightRed)
        );
    }
}
