//! One-line text prompt for names and commands.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::PromptState;

pub fn render(frame: &mut Frame, area: Rect, prompt: &PromptState) {
    let line = Line::from(vec![
        Span::raw(prompt.buffer.as_str()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);

    let title = format!("{} (Enter to apply, Esc to cancel)", prompt.kind.title());
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title),
    );

    frame.render_widget(paragraph, area);
}
