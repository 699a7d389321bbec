//! Frontend configuration structures and loaders.
//!
//! This module contains UI-facing configuration that is shared across
//! different frontend implementations (terminal, GUI, etc.).

use std::env;

use scoring_core::{CorrectionPolicy, ScoringConfig};

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub scoring: ScoringConfig,
    pub players: PlayerNames,
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCOREBOARD_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `SCOREBOARD_CLAMP_CORRECTIONS` - Clamp corrections at zero (default: false)
    /// - `SCOREBOARD_PLAYER_A` - Initial name on side A (default: empty)
    /// - `SCOREBOARD_PLAYER_B` - Initial name on side B (default: empty)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("SCOREBOARD_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(clamp) = read_env_bool("SCOREBOARD_CLAMP_CORRECTIONS") {
            config.scoring.correction = if clamp {
                CorrectionPolicy::ClampAtZero
            } else {
                CorrectionPolicy::Unclamped
            };
        }

        config.players.side_a = env::var("SCOREBOARD_PLAYER_A").ok();
        config.players.side_b = env::var("SCOREBOARD_PLAYER_B").ok();

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Names written to the board when a session starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerNames {
    pub side_a: Option<String>,
    pub side_b: Option<String>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
