//! Scoreboard rendering.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::{AppMode, AppState},
};
use client_frontend_core::{LayoutKind, ScoreboardView, message::MessageLog, select_layout};
use scoring_core::Side;

const HEADER_HEIGHT: u16 = 3;
const PROMPT_HEIGHT: u16 = 3;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view: &'a ScoreboardView,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub ui_config: &'a UiConfig,
}

/// Render the scoreboard into the terminal.
pub fn render_scoreboard(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Draws one frame. The orientation, and therefore the panel arrangement, is
/// re-evaluated on every frame.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme::new();
    let area = frame.area();
    let layout = select_layout(ctx.ui_config.orientation_for(area.width, area.height));

    let prompt_height = if ctx.app_state.is_modal() {
        PROMPT_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),                      // Header
            Constraint::Min(0),                                     // Board
            Constraint::Length(widgets::controls::height(layout)),  // Key hints
            Constraint::Length(ctx.ui_config.message_panel_height), // Messages
            Constraint::Length(prompt_height),                      // Prompt
        ])
        .split(area);

    widgets::header::render(frame, chunks[0], ctx.view, ctx.app_state, layout);

    for (side, panel_area) in board_areas(chunks[1], layout) {
        widgets::player_panel::render(
            frame,
            panel_area,
            ctx.view.panel(side),
            ctx.view.status,
            &theme,
        );
    }

    widgets::controls::render(frame, chunks[2]);

    let recent_messages: Vec<_> = ctx
        .messages
        .recent(ctx.ui_config.message_panel_height.saturating_sub(2) as usize)
        .cloned()
        .collect();
    widgets::messages::render(frame, chunks[3], &recent_messages, &theme);

    if let AppMode::Prompt(prompt) = &ctx.app_state.mode {
        widgets::prompt::render(frame, chunks[4], prompt);
    }
}

/// Splits the board area into side A and side B panels.
fn board_areas(area: Rect, layout: LayoutKind) -> [(Side, Rect); 2] {
    let direction = match layout {
        LayoutKind::Landscape => Direction::Horizontal,
        LayoutKind::Portrait => Direction::Vertical,
    };

    let halves = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    [(Side::A, halves[0]), (Side::B, halves[1])]
}
