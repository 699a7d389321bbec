//! Match-wide control transitions bound to the scoreboard buttons.

use crate::action::ActionTransition;
use crate::config::ScoringConfig;
use crate::state::MatchState;

/// Players swap ends between games.
///
/// Names and game tallies travel with the player, so both are swapped; the
/// new game starts at 0-0 with no server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeEndsAction;

impl ActionTransition for ChangeEndsAction {
    type Result = ();

    fn apply(&self, state: &mut MatchState, _config: &ScoringConfig) {
        std::mem::swap(&mut state.player_a.name, &mut state.player_b.name);
        std::mem::swap(&mut state.player_a.games, &mut state.player_b.games);
        state.clear_points();
    }
}

/// Starts a new game without swapping ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetPointsAction;

impl ActionTransition for ResetPointsAction {
    type Result = ();

    fn apply(&self, state: &mut MatchState, _config: &ScoringConfig) {
        state.clear_points();
    }
}

/// Returns the match to its initial state, names included.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetAllAction;

impl ActionTransition for ResetAllAction {
    type Result = ();

    fn apply(&self, state: &mut MatchState, _config: &ScoringConfig) {
        *state = MatchState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Side;

    #[test]
    fn reset_points_keeps_names_and_games() {
        let mut state = MatchState::with_names("X", "Y");
        state.player_a.points = 7;
        state.player_b.points = 4;
        state.player_b.games = 2;
        state.set_server(Some(Side::B));

        ResetPointsAction.apply(&mut state, &ScoringConfig::default());

        assert_eq!(state.player_a.points, 0);
        assert_eq!(state.player_b.points, 0);
        assert_eq!(state.player_b.games, 2);
        assert_eq!(state.player_a.name, "X");
        assert_eq!(state.server(), None);
    }

    #[test]
    fn change_ends_twice_restores_identities() {
        let mut state = MatchState::with_names("X", "Y");
        state.player_a.games = 1;

        ChangeEndsAction.apply(&mut state, &ScoringConfig::default());
        ChangeEndsAction.apply(&mut state, &ScoringConfig::default());

        assert_eq!(state.player_a.name, "X");
        assert_eq!(state.player_a.games, 1);
        assert_eq!(state.player_b.games, 0);
    }
}
