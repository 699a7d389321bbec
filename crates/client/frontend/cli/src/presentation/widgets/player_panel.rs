//! One side of the table: name, serve marker, points and games.

use client_frontend_core::{PlayerPanel, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use scoring_core::GameStatus;

use super::digits::{GLYPH_HEIGHT, big_number};

/// Lines around the point counter: serve marker, two spacers, games.
const FIXED_LINES: u16 = 4;

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    panel: &PlayerPanel,
    status: GameStatus,
    theme: &T,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.serve_style(panel.serving))
        .title(Line::from(vec![
            Span::raw(format!(" Side {}: ", panel.side)),
            Span::styled(panel.display_name.clone(), theme.name_style(panel)),
            Span::raw(" "),
        ]));

    let inner_height = area.height.saturating_sub(2);
    let points_style = theme.points_style(panel, status);

    let serve_marker = if panel.serving { "● SERVING" } else { "" };
    let mut lines = vec![
        Line::from(Span::styled(serve_marker, theme.serve_style(panel.serving))),
        Line::default(),
    ];

    if inner_height >= GLYPH_HEIGHT as u16 + FIXED_LINES {
        lines.extend(
            big_number(panel.points)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, points_style))),
        );
    } else {
        lines.push(Line::from(Span::styled(
            panel.points.to_string(),
            points_style,
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw("Games "),
        Span::styled(panel.games.to_string(), theme.games_style(panel)),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
