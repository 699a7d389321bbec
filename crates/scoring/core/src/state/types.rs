/// One end of the table.
///
/// Sides are court positions, not people: after `change_ends` the player who
/// was on side A is on side B.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Returns the side across the net.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Per-side scoring data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    /// Display label; any string, including empty.
    pub name: String,
    /// Points in the current game. Negative only after an unclamped correction.
    pub points: i32,
    /// Games won in the match.
    pub games: i32,
}

impl PlayerState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: 0,
            games: 0,
        }
    }
}
