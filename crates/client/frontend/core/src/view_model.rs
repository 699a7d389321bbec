//! View-model snapshots derived from [`scoring_core::MatchState`].
use scoring_core::{GameStatus, MatchState, PlayerState, Side};

use crate::message::{MessageEntry, MessageLevel};

/// Presentation-ready data for one side of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerPanel {
    pub side: Side,
    /// Name label, or a `Player A` / `Player B` placeholder when empty.
    pub display_name: String,
    pub has_name: bool,
    pub points: i32,
    pub games: i32,
    pub serving: bool,
}

impl PlayerPanel {
    fn from_state(state: &MatchState, side: Side) -> Self {
        let player = state.player(side);
        Self {
            side,
            display_name: display_name(player, side),
            has_name: !player.name.trim().is_empty(),
            points: player.points,
            games: player.games,
            serving: state.server() == Some(side),
        }
    }
}

/// High-level snapshot of the board used by presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreboardView {
    pub player_a: PlayerPanel,
    pub player_b: PlayerPanel,
    pub status: GameStatus,
}

impl ScoreboardView {
    pub fn from_state(state: &MatchState) -> Self {
        Self {
            player_a: PlayerPanel::from_state(state, Side::A),
            player_b: PlayerPanel::from_state(state, Side::B),
            status: state.game_status(),
        }
    }

    pub fn panel(&self, side: Side) -> &PlayerPanel {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    /// One-line status such as `Deuce` or `Ma Long wins the game`.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InPlay => String::from("In play"),
            GameStatus::Deuce => String::from("Deuce"),
            GameStatus::Won(side) => format!("{} wins the game", self.panel(side).display_name),
        }
    }
}

/// Label shown for a side, falling back to a placeholder for blank names.
pub fn display_name(player: &PlayerState, side: Side) -> String {
    let trimmed = player.name.trim();
    if trimmed.is_empty() {
        format!("Player {side}")
    } else {
        trimmed.to_string()
    }
}

/// Maps view-model data onto a framework-specific style type.
///
/// The terminal client implements this over `ratatui::style::Style`; other
/// frontends supply their own `Style`.
pub trait PresentationMapper {
    type Style;

    fn name_style(&self, panel: &PlayerPanel) -> Self::Style;

    fn points_style(&self, panel: &PlayerPanel, status: GameStatus) -> Self::Style;

    fn games_style(&self, panel: &PlayerPanel) -> Self::Style;

    fn serve_style(&self, serving: bool) -> Self::Style;

    fn message_style(&self, entry: &MessageEntry) -> Self::Style {
        self.level_style(entry.level)
    }

    fn level_style(&self, level: MessageLevel) -> Self::Style;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_fall_back_to_placeholders() {
        let mut state = MatchState::new();
        state.player_b.name = "   ".into();

        let view = ScoreboardView::from_state(&state);

        assert_eq!(view.player_a.display_name, "Player A");
        assert_eq!(view.player_b.display_name, "Player B");
        assert!(!view.player_a.has_name);
    }

    #[test]
    fn panels_mirror_state() {
        let mut state = MatchState::with_names("Ma", "Fan");
        state.player_a.points = 11;
        state.player_b.points = 8;
        state.player_b.games = 2;
        state.set_service(Side::B, true);

        let view = ScoreboardView::from_state(&state);

        assert_eq!(view.player_a.display_name, "Ma");
        assert_eq!(view.player_a.points, 11);
        assert_eq!(view.player_b.games, 2);
        assert!(view.player_b.serving);
        assert!(!view.player_a.serving);
        assert_eq!(view.status, GameStatus::Won(Side::A));
        assert_eq!(view.status_line(), "Ma wins the game");
    }

    #[test]
    fn deuce_is_reported() {
        let mut state = MatchState::new();
        state.player_a.points = 10;
        state.player_b.points = 10;

        assert_eq!(ScoreboardView::from_state(&state).status_line(), "Deuce");
    }
}
