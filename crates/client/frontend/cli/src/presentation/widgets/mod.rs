//! Scoreboard widgets composed by [`super::ui`].
pub mod controls;
pub mod digits;
pub mod header;
pub mod messages;
pub mod player_panel;
pub mod prompt;
