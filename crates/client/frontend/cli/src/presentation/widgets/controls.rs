//! Key hint bar.

use client_frontend_core::LayoutKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::input::KEY_HINTS;

/// Rows reserved for the hint bar; portrait terminals are narrow and wrap.
pub fn height(layout: LayoutKind) -> u16 {
    match layout {
        LayoutKind::Landscape => 3,
        LayoutKind::Portrait => 5,
    }
}

pub fn render(frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let spans: Vec<Span> = KEY_HINTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, key_style),
                Span::raw(format!(" {label}  ")),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(paragraph, area);
}
