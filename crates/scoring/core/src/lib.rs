//! Deterministic table-tennis scoring rules and match state.
//!
//! `scoring-core` defines the canonical rules (actions, engine, match state)
//! and exposes pure APIs that any frontend can drive. All state mutation flows
//! through [`engine::MatchEngine`]; the only direct writes a frontend may make
//! are the name labels and the serve toggles, which [`MatchState`] exposes as
//! setters.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod state;

pub use action::{
    Action, ActionParseError, ActionResult, ActionTransition, AwardGameAction, AwardPointAction,
    ChangeEndsAction, CorrectGameAction, CorrectPointAction, PointOutcome, ResetAllAction,
    ResetPointsAction, SetNameAction, SetServiceAction,
};
pub use config::{CorrectionPolicy, ScoringConfig};
pub use engine::{ExecutionOutcome, MatchEngine};
pub use error::{ErrorSeverity, ScoreboardError};
pub use rules::GameStatus;
pub use state::{MatchDelta, MatchState, PlayerFields, PlayerState, Side};
