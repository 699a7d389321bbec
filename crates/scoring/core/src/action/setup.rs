//! Direct writes made by the presentation layer (name field, serve switch).
//!
//! These bypass the scoring rules entirely; routing them through the engine
//! only gives frontends a delta to redraw from and a log line.

use crate::action::ActionTransition;
use crate::config::ScoringConfig;
use crate::state::{MatchState, Side};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetNameAction {
    pub side: Side,
    pub name: String,
}

impl SetNameAction {
    pub fn new(side: Side, name: impl Into<String>) -> Self {
        Self {
            side,
            name: name.into(),
        }
    }
}

impl ActionTransition for SetNameAction {
    type Result = ();

    fn apply(&self, state: &mut MatchState, _config: &ScoringConfig) {
        state.set_name(self.side, self.name.clone());
    }
}

/// One side's serve switch flipped to `serving`.
///
/// See [`MatchState::set_service`] for how the two switches interact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetServiceAction {
    pub side: Side,
    pub serving: bool,
}

impl SetServiceAction {
    pub fn new(side: Side, serving: bool) -> Self {
        Self { side, serving }
    }
}

impl ActionTransition for SetServiceAction {
    type Result = ();

    fn apply(&self, state: &mut MatchState, _config: &ScoringConfig) {
        state.set_service(self.side, self.serving);
    }
}
