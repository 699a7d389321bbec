//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

use client_frontend_core::Orientation;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    /// Unparseable `SCOREBOARD_ORIENTATION` value, reported once logging is up.
    pub rejected_orientation: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SCOREBOARD_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `SCOREBOARD_ORIENTATION` - Fixed orientation, e.g. `portrait` (default: from viewport)
    /// - `SCOREBOARD_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("SCOREBOARD_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(UiConfig::MIN_MESSAGE_PANEL_HEIGHT);
        }

        if let Ok(raw) = env::var("SCOREBOARD_ORIENTATION") {
            config.apply_orientation(&raw);
        }

        config.log_dir = env::var_os("SCOREBOARD_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Sets the orientation override, keeping an unknown value for later reporting.
    pub fn apply_orientation(&mut self, raw: &str) {
        match raw.trim().parse::<Orientation>() {
            Ok(orientation) => {
                self.ui.orientation = Some(orientation);
                self.rejected_orientation = None;
            }
            Err(_) => self.rejected_orientation = Some(raw.to_string()),
        }
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
    /// Fixed orientation; `None` derives it from the terminal size each frame.
    pub orientation: Option<Orientation>,
}

impl UiConfig {
    pub const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;

    /// Orientation for a viewport of the given size.
    pub fn orientation_for(&self, width: u16, height: u16) -> Orientation {
        self.orientation
            .unwrap_or_else(|| Orientation::from_viewport(width, height))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
            orientation: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
