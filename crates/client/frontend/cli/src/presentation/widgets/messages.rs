//! Message log panel.

use client_frontend_core::{MessageEntry, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render recent messages, oldest at the top.
///
/// `entries` comes from `MessageLog::recent`, i.e. newest first.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    entries: &[MessageEntry],
    theme: &T,
) {
    let lines: Vec<Line> = entries
        .iter()
        .rev()
        .map(|entry| {
            let stamp = entry
                .sequence
                .map(|sequence| format!("[{sequence}] "))
                .unwrap_or_default();
            Line::from(vec![
                Span::raw(stamp),
                Span::styled(entry.text.clone(), theme.message_style(entry)),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}
