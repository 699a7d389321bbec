//! Utilities for reacting to session events inside UI layers.
use scoring_core::MatchState;

use crate::message::MessageLog;
use crate::session::SessionEvent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

/// Receives every dispatch made through a [`crate::MatchSession`].
pub trait EventConsumer {
    /// `state` is the match state after the event was applied.
    fn on_event(&mut self, event: &SessionEvent, state: &MatchState) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}
