//! Table-tennis scoreboard binary.
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. File logging
//! 3. The match session
//! 4. The frontend (terminal UI)
//!
//! # Examples
//!
//! ```bash
//! SCOREBOARD_PLAYER_A=Waldner SCOREBOARD_PLAYER_B=Persson cargo run -p scoreboard-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use client_frontend_core::MatchSession;
    use scoreboard_client::Client;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on drop
    let _log_guard = logging::setup_logging(cli_config.log_dir.as_deref())?;

    tracing::info!("Starting scoreboard");
    if let Some(raw) = &cli_config.rejected_orientation {
        tracing::warn!(value = %raw, "ignoring unknown SCOREBOARD_ORIENTATION");
    }
    tracing::info!(
        correction = ?frontend_config.scoring.correction,
        message_capacity = frontend_config.messages.capacity,
        "configuration loaded"
    );

    // 3. Build the session and frontend
    let session = MatchSession::from_config(&frontend_config);
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 4. Build and run
    let client = Client::builder()
        .session(session)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Scoreboard shutdown complete");
    Ok(())
}
