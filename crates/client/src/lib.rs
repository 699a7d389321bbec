//! Top-level client orchestrating the match session and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ MatchSession (match state, scoring policy, dispatch sequence)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The client owns nothing but the wiring: the session is handed to the
//! frontend for the lifetime of the UI and returned when the operator quits.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_frontend_core::MatchSession;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() collects the session and frontend
/// 2. Client::run() transfers the session to the frontend (blocking)
/// 3. On frontend exit, the final session is returned to the caller
pub struct Client {
    session: MatchSession,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub async fn run(self) -> Result<MatchSession> {
        let Client {
            session,
            mut frontend,
        } = self;

        let session = frontend.run(session).await?;

        let state = session.state();
        tracing::info!(
            actions = session.sequence(),
            games_a = state.player_a.games,
            games_b = state.player_b.games,
            "session finished"
        );

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scoring_core::{Action, Side};

    /// Frontend that replays a fixed script instead of reading a terminal.
    struct ScriptedFrontend {
        script: Vec<Action>,
    }

    #[async_trait]
    impl Frontend for ScriptedFrontend {
        async fn run(&mut self, mut session: MatchSession) -> Result<MatchSession> {
            for action in self.script.drain(..) {
                session.dispatch(action);
            }
            Ok(session)
        }
    }

    #[tokio::test]
    async fn run_returns_the_session_after_the_frontend_exits() {
        let frontend = ScriptedFrontend {
            script: vec![
                Action::set_service(Side::A, true),
                Action::award_point(Side::A),
                Action::award_point(Side::B),
            ],
        };

        let client = Client::builder()
            .session(MatchSession::default())
            .frontend(frontend)
            .build()
            .expect("session and frontend provided");

        let session = client.run().await.expect("scripted run");

        assert_eq!(session.sequence(), 3);
        assert_eq!(session.state().player_a.points, 1);
        assert_eq!(session.state().player_b.points, 1);
        assert!(session.state().service_b());
    }

    #[test]
    fn build_without_frontend_fails() {
        let result = Client::builder().session(MatchSession::default()).build();
        assert!(result.is_err());
    }
}
