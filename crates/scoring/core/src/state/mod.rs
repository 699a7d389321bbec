//! Authoritative match state representation.
//!
//! Frontends read this state freely but mutate scores exclusively through the
//! engine. Name labels and serve toggles are the only fields a frontend writes
//! directly, mirroring a text field and a switch bound to the scoreboard.
pub mod delta;
pub mod types;

pub use delta::{MatchDelta, PlayerFields};
pub use types::{PlayerState, Side};

use crate::rules::GameStatus;

/// Canonical snapshot of a two-player match.
///
/// Serve possession is stored as a single `Option<Side>`, so "both sides
/// serving" cannot be represented. The per-side booleans a scoreboard shows
/// are derived from it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub player_a: PlayerState,
    pub player_b: PlayerState,
    server: Option<Side>,
}

impl MatchState {
    /// Creates a match with empty names, zero counters and no server.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh match with the given name labels.
    pub fn with_names(name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        Self {
            player_a: PlayerState::new(name_a),
            player_b: PlayerState::new(name_b),
            server: None,
        }
    }

    pub fn player(&self, side: Side) -> &PlayerState {
        match side {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    pub(crate) fn player_mut(&mut self, side: Side) -> &mut PlayerState {
        match side {
            Side::A => &mut self.player_a,
            Side::B => &mut self.player_b,
        }
    }

    /// Replaces a name label. No validation is applied.
    pub fn set_name(&mut self, side: Side, name: impl Into<String>) {
        self.player_mut(side).name = name.into();
    }

    /// Side currently holding the serve, if one has been assigned.
    #[inline]
    pub fn server(&self) -> Option<Side> {
        self.server
    }

    #[inline]
    pub fn service_a(&self) -> bool {
        self.server == Some(Side::A)
    }

    #[inline]
    pub fn service_b(&self) -> bool {
        self.server == Some(Side::B)
    }

    /// Writes one side's serve toggle.
    ///
    /// Switching a side on takes the serve away from the other side. Switching
    /// a side off clears the serve only if that side held it.
    pub fn set_service(&mut self, side: Side, serving: bool) {
        if serving {
            self.server = Some(side);
        } else if self.server == Some(side) {
            self.server = None;
        }
    }

    /// Assigns the serve outright (`None` clears it).
    pub fn set_server(&mut self, server: Option<Side>) {
        self.server = server;
    }

    /// Summary of the current game derived from the point counters.
    pub fn game_status(&self) -> GameStatus {
        GameStatus::from_points(self.player_a.points, self.player_b.points)
    }

    pub(crate) fn clear_points(&mut self) {
        self.player_a.points = 0;
        self.player_b.points = 0;
        self.server = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_has_defaults() {
        let state = MatchState::new();
        assert_eq!(state.player_a, PlayerState::default());
        assert_eq!(state.player_b, PlayerState::default());
        assert!(!state.service_a());
        assert!(!state.service_b());
        assert_eq!(state.server(), None);
    }

    #[test]
    fn toggling_one_side_on_moves_the_serve() {
        let mut state = MatchState::new();
        state.set_service(Side::A, true);
        assert!(state.service_a());

        state.set_service(Side::B, true);
        assert!(state.service_b());
        assert!(!state.service_a());
    }

    #[test]
    fn toggling_off_only_clears_own_serve() {
        let mut state = MatchState::new();
        state.set_service(Side::B, true);

        state.set_service(Side::A, false);
        assert_eq!(state.server(), Some(Side::B));

        state.set_service(Side::B, false);
        assert_eq!(state.server(), None);
    }

    #[test]
    fn names_accept_any_text() {
        let mut state = MatchState::with_names("X", "Y");
        state.set_name(Side::A, "");
        state.set_name(Side::B, "  Ma Long  ");
        assert_eq!(state.player(Side::A).name, "");
        assert_eq!(state.player(Side::B).name, "  Ma Long  ");
    }
}
