//! Maintains the CLI message log in response to session events.
use scoring_core::MatchState;

use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    format::format_event,
    message::MessageLog,
    session::SessionEvent,
};

pub struct CliEventConsumer {
    log: MessageLog,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &SessionEvent, state: &MatchState) -> EventImpact {
        if event.outcome.delta.is_empty() {
            return EventImpact::none();
        }

        for entry in format_event(event, state) {
            self.log.push(entry);
        }
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::MatchSession;
    use scoring_core::{Action, Side};

    #[test]
    fn scoring_events_are_logged() {
        let mut session = MatchSession::default();
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        let event = session.dispatch(Action::award_point(Side::B));
        let impact = consumer.on_event(&event, session.state());

        assert!(impact.requires_redraw);
        let latest = consumer.message_log().recent(1).next().expect("entry");
        assert_eq!(latest.text, "Point to Player B (0-1)");
    }

    #[test]
    fn no_op_events_do_not_redraw() {
        let mut session = MatchSession::default();
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        let event = session.dispatch(Action::reset_points());
        let impact = consumer.on_event(&event, session.state());

        assert!(!impact.requires_redraw);
        assert!(consumer.take_message_log().is_empty());
    }
}
