//! Point and game counter transitions.

use crate::action::ActionTransition;
use crate::config::ScoringConfig;
use crate::rules;
use crate::state::{MatchState, Side};

/// Tap on a point counter: one point to `side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardPointAction {
    pub side: Side,
}

impl AwardPointAction {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

/// What happened around a scored point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOutcome {
    pub server_before: Option<Side>,
    pub server_after: Option<Side>,
    /// Side credited with a game by this point.
    pub game_won: Option<Side>,
}

impl PointOutcome {
    pub fn serve_changed(&self) -> bool {
        self.server_before != self.server_after
    }
}

impl ActionTransition for AwardPointAction {
    type Result = PointOutcome;

    /// Increments, rotates service, then checks the win condition, in that
    /// order. Points are left on the board after a win.
    fn apply(&self, state: &mut MatchState, _config: &ScoringConfig) -> Self::Result {
        let player = state.player_mut(self.side);
        player.points = player.points.saturating_add(1);

        let (points_a, points_b) = (state.player_a.points, state.player_b.points);

        let server_before = state.server();
        let server_after = rules::next_server(points_a, points_b, server_before);
        state.set_server(server_after);

        let game_won = rules::game_winner(points_a, points_b);
        if let Some(winner) = game_won {
            let player = state.player_mut(winner);
            player.games = player.games.saturating_add(1);
        }

        PointOutcome {
            server_before,
            server_after,
            game_won,
        }
    }
}

/// Long-press on a point counter.
///
/// Removes [`ScoringConfig::POINT_CORRECTION`] points: the mis-awarded point
/// plus one legitimate point, which the operator then re-awards. Serve is not
/// touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrectPointAction {
    pub side: Side,
}

impl CorrectPointAction {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

impl ActionTransition for CorrectPointAction {
    type Result = ();

    fn apply(&self, state: &mut MatchState, config: &ScoringConfig) {
        let player = state.player_mut(self.side);
        player.points = config
            .correction
            .apply(player.points, ScoringConfig::POINT_CORRECTION);
    }
}

/// Manual game increment, independent of the point counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AwardGameAction {
    pub side: Side,
}

impl AwardGameAction {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

impl ActionTransition for AwardGameAction {
    type Result = ();

    fn apply(&self, state: &mut MatchState, _config: &ScoringConfig) {
        let player = state.player_mut(self.side);
        player.games = player.games.saturating_add(1);
    }
}

/// Manual game correction; removes [`ScoringConfig::GAME_CORRECTION`] games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrectGameAction {
    pub side: Side,
}

impl CorrectGameAction {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

impl ActionTransition for CorrectGameAction {
    type Result = ();

    fn apply(&self, state: &mut MatchState, config: &ScoringConfig) {
        let player = state.player_mut(self.side);
        player.games = config
            .correction
            .apply(player.games, ScoringConfig::GAME_CORRECTION);
    }
}
