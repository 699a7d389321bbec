//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::session::MatchSession;

/// Frontend abstraction for UI layers.
///
/// A frontend takes ownership of the [`MatchSession`] for as long as it runs
/// and hands it back on exit so the caller can inspect or persist the final
/// state.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the operator quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, session: MatchSession) -> Result<MatchSession>;
}
