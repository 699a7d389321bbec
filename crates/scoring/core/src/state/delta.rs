//! Bitmask-based change tracking between two match states.

use bitflags::bitflags;

use super::{MatchState, PlayerState, Side};
use crate::action::Action;

bitflags! {
    /// Tracks which fields of a [`PlayerState`] changed during a transition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct PlayerFields: u8 {
        const NAME   = 1 << 0;
        const POINTS = 1 << 1;
        const GAMES  = 1 << 2;
    }
}

impl PlayerFields {
    fn from_states(before: &PlayerState, after: &PlayerState) -> Self {
        let mut fields = Self::empty();
        fields.set(Self::NAME, before.name != after.name);
        fields.set(Self::POINTS, before.points != after.points);
        fields.set(Self::GAMES, before.games != after.games);
        fields
    }
}

/// Minimal description of an executed action's impact on the match.
///
/// Only records *which* fields changed; the values live in the state itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchDelta {
    /// The action that caused this transition.
    pub action: Action,
    pub player_a: PlayerFields,
    pub player_b: PlayerFields,
    /// True when serve possession moved (including being cleared).
    pub service: bool,
}

impl MatchDelta {
    /// Creates a delta by comparing two match states field by field.
    pub fn from_states(action: Action, before: &MatchState, after: &MatchState) -> Self {
        Self {
            action,
            player_a: PlayerFields::from_states(&before.player_a, &after.player_a),
            player_b: PlayerFields::from_states(&before.player_b, &after.player_b),
            service: before.server() != after.server(),
        }
    }

    pub fn player(&self, side: Side) -> PlayerFields {
        match side {
            Side::A => self.player_a,
            Side::B => self.player_b,
        }
    }

    /// Returns true if no state changes occurred (no-op action).
    pub fn is_empty(&self) -> bool {
        self.player_a.is_empty() && self.player_b.is_empty() && !self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_states_produce_empty_delta() {
        let state = MatchState::with_names("X", "Y");
        let delta = MatchDelta::from_states(Action::reset_points(), &state, &state);
        assert!(delta.is_empty());
    }

    #[test]
    fn swapped_ends_mark_names_and_games() {
        let mut before = MatchState::with_names("X", "Y");
        before.player_a.games = 2;
        let mut after = before.clone();
        after.player_a.name = "Y".into();
        after.player_b.name = "X".into();
        after.player_a.games = 0;
        after.player_b.games = 2;

        let delta = MatchDelta::from_states(Action::change_ends(), &before, &after);
        assert_eq!(delta.player_a, PlayerFields::NAME | PlayerFields::GAMES);
        assert_eq!(
            delta.player(Side::B),
            PlayerFields::NAME | PlayerFields::GAMES
        );
        assert!(!delta.service);
    }

    #[test]
    fn service_change_is_tracked() {
        let before = MatchState::new();
        let mut after = before.clone();
        after.set_server(Some(Side::B));

        let delta = MatchDelta::from_states(Action::set_service(Side::B, true), &before, &after);
        assert!(delta.service);
        assert!(!delta.is_empty());
    }
}
