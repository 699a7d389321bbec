//! Pure scoring rules shared by the engine and presentation layers.
//!
//! Nothing here mutates state; the engine feeds post-increment point counts
//! through these helpers and applies the answers.

use crate::config::ScoringConfig;
use crate::state::Side;

/// Returns true when both sides have reached the deuce threshold.
#[inline]
pub fn is_deuce(points_a: i32, points_b: i32) -> bool {
    points_a >= ScoringConfig::DEUCE_THRESHOLD && points_b >= ScoringConfig::DEUCE_THRESHOLD
}

/// Returns true when service must change hands at this score.
///
/// In deuce every point rotates service. Otherwise service rotates after each
/// block of [`ScoringConfig::SERVES_PER_TURN`] points, i.e. whenever the total
/// is even.
#[inline]
pub fn rotation_due(points_a: i32, points_b: i32) -> bool {
    is_deuce(points_a, points_b)
        || points_a.saturating_add(points_b) % ScoringConfig::SERVES_PER_TURN == 0
}

/// Computes the server after a point has been scored.
///
/// `points_a` / `points_b` are the counts *after* the increment. When nobody
/// holds the serve yet, nothing is assigned.
pub fn next_server(points_a: i32, points_b: i32, current: Option<Side>) -> Option<Side> {
    match current {
        Some(server) if rotation_due(points_a, points_b) => Some(server.opponent()),
        other => other,
    }
}

/// Returns the side that satisfies the game-winning condition, if any.
pub fn game_winner(points_a: i32, points_b: i32) -> Option<Side> {
    if wins(points_a, points_b) {
        Some(Side::A)
    } else if wins(points_b, points_a) {
        Some(Side::B)
    } else {
        None
    }
}

#[inline]
fn wins(own: i32, other: i32) -> bool {
    own >= ScoringConfig::POINTS_TO_WIN && own.saturating_sub(other) >= ScoringConfig::WIN_MARGIN
}

/// Display-level summary of the current game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InPlay,
    Deuce,
    /// The side has met the win condition; points stay on the board until
    /// the operator resets them.
    Won(Side),
}

impl GameStatus {
    pub fn from_points(points_a: i32, points_b: i32) -> Self {
        if let Some(side) = game_winner(points_a, points_b) {
            Self::Won(side)
        } else if is_deuce(points_a, points_b) {
            Self::Deuce
        } else {
            Self::InPlay
        }
    }

    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::Won(side) => Some(side),
            Self::InPlay | Self::Deuce => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_follows_parity_outside_deuce() {
        assert!(!rotation_due(1, 0));
        assert!(rotation_due(1, 1));
        assert!(!rotation_due(6, 3));
        assert!(rotation_due(9, 9));
    }

    #[test]
    fn rotation_every_point_in_deuce() {
        assert!(rotation_due(10, 10));
        assert!(rotation_due(11, 10));
        assert!(rotation_due(12, 11));
    }

    #[test]
    fn unassigned_serve_stays_unassigned() {
        assert_eq!(next_server(1, 1, None), None);
        assert_eq!(next_server(10, 11, None), None);
    }

    #[test]
    fn next_server_toggles_when_due() {
        assert_eq!(next_server(1, 0, Some(Side::A)), Some(Side::A));
        assert_eq!(next_server(1, 1, Some(Side::A)), Some(Side::B));
        assert_eq!(next_server(10, 11, Some(Side::B)), Some(Side::A));
    }

    #[test]
    fn winner_needs_eleven_and_two_clear() {
        assert_eq!(game_winner(11, 9), Some(Side::A));
        assert_eq!(game_winner(11, 10), None);
        assert_eq!(game_winner(10, 8), None);
        assert_eq!(game_winner(10, 12), Some(Side::B));
        assert_eq!(game_winner(15, 13), Some(Side::A));
    }

    #[test]
    fn status_reports_deuce_and_win() {
        assert_eq!(GameStatus::from_points(3, 2), GameStatus::InPlay);
        assert_eq!(GameStatus::from_points(10, 10), GameStatus::Deuce);
        assert_eq!(GameStatus::from_points(11, 10), GameStatus::Deuce);
        assert_eq!(GameStatus::from_points(11, 13), GameStatus::Won(Side::B));
        assert_eq!(GameStatus::Won(Side::A).winner(), Some(Side::A));
        assert_eq!(GameStatus::Deuce.winner(), None);
    }
}
