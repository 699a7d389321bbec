//! Action transition dispatch.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::config::ScoringConfig;
use crate::state::MatchState;

/// Routes each action to its transition and wraps the result in ActionResult.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut MatchState,
    config: &ScoringConfig,
) -> ActionResult {
    match action {
        Action::AwardPoint(transition) => ActionResult::Point(transition.apply(state, config)),
        Action::CorrectPoint(transition) => applied(transition, state, config),
        Action::AwardGame(transition) => applied(transition, state, config),
        Action::CorrectGame(transition) => applied(transition, state, config),
        Action::ChangeEnds(transition) => applied(transition, state, config),
        Action::ResetPoints(transition) => applied(transition, state, config),
        Action::ResetAll(transition) => applied(transition, state, config),
        Action::SetName(transition) => applied(transition, state, config),
        Action::SetService(transition) => applied(transition, state, config),
    }
}

#[inline]
fn applied<T>(transition: &T, state: &mut MatchState, config: &ScoringConfig) -> ActionResult
where
    T: ActionTransition<Result = ()>,
{
    transition.apply(state, config);
    ActionResult::Applied
}
