//! Header widget displaying the game status and input mode.

use client_frontend_core::{LayoutKind, ScoreboardView};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use scoring_core::GameStatus;

use crate::state::{AppMode, AppState};

/// Render the header panel with games, game status and current mode.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &ScoreboardView,
    app_state: &AppState,
    layout: LayoutKind,
) {
    let mode_text = match &app_state.mode {
        AppMode::Normal => String::new(),
        AppMode::Prompt(prompt) => format!(" [{}]", prompt.kind.title().to_uppercase()),
    };

    let status_color = match view.status {
        GameStatus::InPlay => Color::White,
        GameStatus::Deuce => Color::LightMagenta,
        GameStatus::Won(_) => Color::LightGreen,
    };

    let text = vec![Line::from(vec![
        Span::raw("Games: "),
        Span::styled(
            format!("{}-{}", view.player_a.games, view.player_b.games),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw(" | "),
        Span::styled(
            view.status_line(),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            mode_text,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let title = format!("Table Tennis ({layout})");
    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(paragraph, area);
}
