//! Action execution pipeline.
//!
//! The [`MatchEngine`] is the authoritative reducer for [`MatchState`]. Every
//! operator input, scoring or not, flows through [`MatchEngine::execute`],
//! which applies the transition and reports what changed.

mod transition;

use crate::action::{Action, ActionResult};
use crate::config::ScoringConfig;
use crate::state::{MatchDelta, MatchState, Side};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// State change metadata (which fields changed).
    pub delta: MatchDelta,

    /// Action-specific execution result.
    pub action_result: ActionResult,
}

/// Borrowing reducer over a single match.
///
/// The engine holds no state of its own; construct one per dispatch or keep it
/// for a batch of inputs. Operations never fail.
pub struct MatchEngine<'a> {
    state: &'a mut MatchState,
    config: &'a ScoringConfig,
}

impl<'a> MatchEngine<'a> {
    pub fn new(state: &'a mut MatchState, config: &'a ScoringConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &MatchState {
        self.state
    }

    /// Executes an action and returns the delta plus its result.
    pub fn execute(&mut self, action: &Action) -> ExecutionOutcome {
        let before = self.state.clone();

        let action_result = transition::execute_transition(action, self.state, self.config);
        let delta = MatchDelta::from_states(action.clone(), &before, self.state);

        tracing::debug!(
            %action,
            points_a = self.state.player_a.points,
            points_b = self.state.player_b.points,
            server = ?self.state.server(),
            "action applied"
        );

        if let Some(winner) = action_result.game_won() {
            let player = self.state.player(winner);
            tracing::info!(
                side = %winner,
                name = %player.name,
                games = player.games,
                "game won"
            );
        }

        ExecutionOutcome {
            delta,
            action_result,
        }
    }

    pub fn award_point(&mut self, side: Side) -> ExecutionOutcome {
        self.execute(&Action::award_point(side))
    }

    pub fn correct_point(&mut self, side: Side) -> ExecutionOutcome {
        self.execute(&Action::correct_point(side))
    }

    pub fn award_game(&mut self, side: Side) -> ExecutionOutcome {
        self.execute(&Action::award_game(side))
    }

    pub fn correct_game(&mut self, side: Side) -> ExecutionOutcome {
        self.execute(&Action::correct_game(side))
    }

    pub fn change_ends(&mut self) -> ExecutionOutcome {
        self.execute(&Action::change_ends())
    }

    pub fn reset_points(&mut self) -> ExecutionOutcome {
        self.execute(&Action::reset_points())
    }

    pub fn reset_all(&mut self) -> ExecutionOutcome {
        self.execute(&Action::reset_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PlayerFields;

    #[test]
    fn engine_executes_actions() {
        let mut state = MatchState::new();
        let config = ScoringConfig::default();
        let mut engine = MatchEngine::new(&mut state, &config);

        let outcome = engine.award_point(Side::A);

        assert_eq!(outcome.delta.player_a, PlayerFields::POINTS);
        assert!(outcome.delta.player_b.is_empty());
        assert!(matches!(outcome.action_result, ActionResult::Point(_)));
        assert_eq!(engine.state().player_a.points, 1);
    }

    #[test]
    fn no_op_actions_yield_empty_delta() {
        let mut state = MatchState::new();
        let config = ScoringConfig::default();
        let mut engine = MatchEngine::new(&mut state, &config);

        let cleared = engine.execute(&Action::set_service(Side::A, false));

        assert!(engine.reset_points().delta.is_empty());
        assert!(cleared.delta.is_empty());
    }

    #[test]
    fn winning_point_marks_games_changed() {
        let mut state = MatchState::new();
        state.player_a.points = 10;
        state.player_b.points = 5;
        let config = ScoringConfig::default();

        let outcome = MatchEngine::new(&mut state, &config).award_point(Side::A);

        assert_eq!(outcome.action_result.game_won(), Some(Side::A));
        assert_eq!(
            outcome.delta.player_a,
            PlayerFields::POINTS | PlayerFields::GAMES
        );
    }
}
