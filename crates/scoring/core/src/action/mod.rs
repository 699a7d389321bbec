//! Action domain - every operation a scoreboard operator can perform.
//!
//! # Module Structure
//!
//! - `scoring`: point and game counters (award, correct)
//! - `control`: change ends, reset points, reset all
//! - `setup`: direct writes of name labels and serve toggles
//! - `parse`: textual command language (`FromStr` / `Display`)
//! - `error`: parse errors

pub mod control;
pub mod error;
pub mod parse;
pub mod scoring;
pub mod setup;

pub use control::{ChangeEndsAction, ResetAllAction, ResetPointsAction};
pub use error::ActionParseError;
pub use scoring::{
    AwardGameAction, AwardPointAction, CorrectGameAction, CorrectPointAction, PointOutcome,
};
pub use setup::{SetNameAction, SetServiceAction};

use crate::config::ScoringConfig;
use crate::state::{MatchState, Side};

/// Defines how a concrete action variant mutates match state.
///
/// Scoring operations are total: there is no validation phase and no error
/// path. `apply` runs to completion and reports whatever the caller may want
/// to surface (e.g. a game being won).
pub trait ActionTransition {
    type Result;

    /// Applies the action by mutating the match state directly.
    fn apply(&self, state: &mut MatchState, config: &ScoringConfig) -> Self::Result;
}

/// Top-level action enum dispatched through [`crate::MatchEngine`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    AwardPoint(AwardPointAction),
    CorrectPoint(CorrectPointAction),
    AwardGame(AwardGameAction),
    CorrectGame(CorrectGameAction),
    ChangeEnds(ChangeEndsAction),
    ResetPoints(ResetPointsAction),
    ResetAll(ResetAllAction),
    SetName(SetNameAction),
    SetService(SetServiceAction),
}

impl Action {
    pub fn award_point(side: Side) -> Self {
        Self::AwardPoint(AwardPointAction::new(side))
    }

    pub fn correct_point(side: Side) -> Self {
        Self::CorrectPoint(CorrectPointAction::new(side))
    }

    pub fn award_game(side: Side) -> Self {
        Self::AwardGame(AwardGameAction::new(side))
    }

    pub fn correct_game(side: Side) -> Self {
        Self::CorrectGame(CorrectGameAction::new(side))
    }

    pub fn change_ends() -> Self {
        Self::ChangeEnds(ChangeEndsAction)
    }

    pub fn reset_points() -> Self {
        Self::ResetPoints(ResetPointsAction)
    }

    pub fn reset_all() -> Self {
        Self::ResetAll(ResetAllAction)
    }

    pub fn set_name(side: Side, name: impl Into<String>) -> Self {
        Self::SetName(SetNameAction::new(side, name))
    }

    pub fn set_service(side: Side, serving: bool) -> Self {
        Self::SetService(SetServiceAction::new(side, serving))
    }

    /// Side targeted by the action, or `None` for whole-match actions.
    pub fn side(&self) -> Option<Side> {
        match self {
            Action::AwardPoint(action) => Some(action.side),
            Action::CorrectPoint(action) => Some(action.side),
            Action::AwardGame(action) => Some(action.side),
            Action::CorrectGame(action) => Some(action.side),
            Action::SetName(action) => Some(action.side),
            Action::SetService(action) => Some(action.side),
            Action::ChangeEnds(_) | Action::ResetPoints(_) | Action::ResetAll(_) => None,
        }
    }
}

/// Action-specific execution result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// Outcome of a scored point (serve rotation and win check).
    Point(PointOutcome),
    /// Every other action; the delta describes what changed.
    Applied,
}

impl ActionResult {
    pub fn game_won(&self) -> Option<Side> {
        match self {
            ActionResult::Point(outcome) => outcome.game_won,
            ActionResult::Applied => None,
        }
    }
}
