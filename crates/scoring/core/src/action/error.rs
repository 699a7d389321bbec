//! Errors raised while turning operator text into an [`Action`](super::Action).

use crate::error::{ErrorSeverity, ScoreboardError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' needs a side (a or b)")]
    MissingSide { command: &'static str },

    #[error("'{command}': '{value}' is not a side (expected a or b)")]
    InvalidSide {
        command: &'static str,
        value: String,
    },

    #[error("'{command}' takes no argument, got '{value}'")]
    UnexpectedArgument {
        command: &'static str,
        value: String,
    },

    #[error("serve switch must be on or off, got '{0}'")]
    InvalidToggle(String),
}

impl ScoreboardError for ActionParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "ACTION_PARSE_EMPTY",
            Self::UnknownCommand(_) => "ACTION_PARSE_UNKNOWN_COMMAND",
            Self::MissingSide { .. } => "ACTION_PARSE_MISSING_SIDE",
            Self::InvalidSide { .. } => "ACTION_PARSE_INVALID_SIDE",
            Self::UnexpectedArgument { .. } => "ACTION_PARSE_UNEXPECTED_ARGUMENT",
            Self::InvalidToggle(_) => "ACTION_PARSE_INVALID_TOGGLE",
        }
    }
}
