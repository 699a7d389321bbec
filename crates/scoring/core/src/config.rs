/// Scoring rule constants and tunable correction behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringConfig {
    /// How manual corrections treat counters that would drop below zero.
    pub correction: CorrectionPolicy,
}

impl ScoringConfig {
    // ===== rule constants (standard 11-point scoring, no expedite) =====
    /// Points a side needs before it can take the game.
    pub const POINTS_TO_WIN: i32 = 11;
    /// Minimum lead over the opponent required to take the game.
    pub const WIN_MARGIN: i32 = 2;
    /// Once both sides reach this score, service alternates every point.
    pub const DEUCE_THRESHOLD: i32 = 10;
    /// Consecutive serves per server outside deuce.
    pub const SERVES_PER_TURN: i32 = 2;
    /// Amount removed from a point counter by a correction.
    pub const POINT_CORRECTION: i32 = 2;
    /// Amount removed from a game counter by a correction.
    pub const GAME_CORRECTION: i32 = 2;

    pub const fn new() -> Self {
        Self {
            correction: CorrectionPolicy::Unclamped,
        }
    }

    pub const fn with_correction(correction: CorrectionPolicy) -> Self {
        Self { correction }
    }
}

/// Behaviour of `correct_point` / `correct_game` near zero.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CorrectionPolicy {
    /// Subtract the full correction step; counters may go negative.
    #[default]
    Unclamped,
    /// Subtract the correction step but never push a counter below zero.
    ClampAtZero,
}

impl CorrectionPolicy {
    /// Applies a correction of `step` to `value` under this policy.
    ///
    /// `ClampAtZero` never raises a counter: a value that is already negative
    /// stays where it is.
    pub fn apply(self, value: i32, step: i32) -> i32 {
        let next = value.saturating_sub(step);
        match self {
            Self::Unclamped => next,
            Self::ClampAtZero => next.max(0).min(value),
        }
    }
}
