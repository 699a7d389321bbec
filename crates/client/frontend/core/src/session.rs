//! Owned match session driven by a frontend.
use scoring_core::{Action, ExecutionOutcome, MatchEngine, MatchState, ScoringConfig};

use crate::config::FrontendConfig;

/// Result of one dispatch, stamped with the session sequence number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionEvent {
    pub sequence: u64,
    pub action: Action,
    pub outcome: ExecutionOutcome,
}

/// Owns the match for the lifetime of a frontend.
///
/// The session is the single writer of [`MatchState`]: every operator input
/// is dispatched through it and it is never shared across tasks.
#[derive(Clone, Debug)]
pub struct MatchSession {
    state: MatchState,
    config: ScoringConfig,
    sequence: u64,
}

impl MatchSession {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_state(MatchState::new(), config)
    }

    pub fn with_state(state: MatchState, config: ScoringConfig) -> Self {
        Self {
            state,
            config,
            sequence: 0,
        }
    }

    /// Starts a session with the configured scoring policy and initial names.
    pub fn from_config(config: &FrontendConfig) -> Self {
        let mut state = MatchState::new();
        if let Some(name) = &config.players.side_a {
            state.player_a.name = name.clone();
        }
        if let Some(name) = &config.players.side_b {
            state.player_b.name = name.clone();
        }
        Self::with_state(state, config.scoring)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Number of actions dispatched so far.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn dispatch(&mut self, action: Action) -> SessionEvent {
        let outcome = MatchEngine::new(&mut self.state, &self.config).execute(&action);
        self.sequence += 1;
        tracing::debug!(sequence = self.sequence, %action, "session dispatch");

        SessionEvent {
            sequence: self.sequence,
            action,
            outcome,
        }
    }

}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use scoring_core::{CorrectionPolicy, Side};

    use super::*;
    use crate::config::PlayerNames;

    #[test]
    fn dispatch_advances_sequence() {
        let mut session = MatchSession::default();

        let first = session.dispatch(Action::award_point(Side::A));
        let second = session.dispatch(Action::reset_points());

        assert_eq!(first.sequence, 1);
        assert_eq!(second.sequence, 2);
        assert_eq!(session.sequence(), 2);
        assert_eq!(session.state().player_a.points, 0);
    }

    #[test]
    fn reset_all_keeps_the_sequence_running() {
        let mut session = MatchSession::default();
        session.dispatch(Action::award_game(Side::B));

        let event = session.dispatch(Action::reset_all());

        assert_eq!(event.sequence, 2);
        assert_eq!(session.state(), &MatchState::new());
    }

    #[test]
    fn from_config_applies_names_and_policy() {
        let mut config = FrontendConfig::default();
        config.scoring = ScoringConfig::with_correction(CorrectionPolicy::ClampAtZero);
        config.players = PlayerNames {
            side_a: Some("Ma".into()),
            side_b: None,
        };

        let mut session = MatchSession::from_config(&config);
        session.dispatch(Action::correct_point(Side::A));

        assert_eq!(session.state().player_a.name, "Ma");
        assert_eq!(session.state().player_b.name, "");
        assert_eq!(session.state().player_a.points, 0);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn dispatch_logs_sequence_and_action() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let mut session = MatchSession::default();

        tracing::subscriber::with_default(subscriber, || {
            session.dispatch(Action::award_point(Side::B));
            session.dispatch(Action::change_ends());
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("session dispatch"), "{output}");
        assert!(output.contains("sequence=1"), "{output}");
        assert!(output.contains("action=point b"), "{output}");
        assert!(output.contains("sequence=2"), "{output}");
    }
}
