//! File logging for the terminal client.
//!
//! The TUI owns stdout/stderr, so logs go to a daily-rolling file only.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "scoreboard.log";

/// Installs the global subscriber writing to `<log dir>/scoreboard.log.<date>`.
///
/// `RUST_LOG` overrides the default `info` filter. Keep the returned guard
/// alive for the lifetime of the program or buffered lines are lost.
pub fn setup_logging(log_dir_override: Option<&Path>) -> Result<WorkerGuard> {
    let log_dir = prepare_log_dir(log_dir_override)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(dir = %log_dir.display(), "logging initialized");

    Ok(guard)
}

/// Resolves the log directory and makes sure it exists.
pub fn prepare_log_dir(log_dir_override: Option<&Path>) -> Result<PathBuf> {
    let log_dir = log_dir_override
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_dir);

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    Ok(log_dir)
}

/// Platform cache directory for the scoreboard, e.g. `~/.cache/scoreboard/logs`.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "scoreboard")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("scoreboard"))
        .join("logs")
}
