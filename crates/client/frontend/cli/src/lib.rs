//! Terminal UI frontend for the table-tennis scoreboard.
//!
//! This crate provides a terminal-based scoreboard operated from the
//! keyboard. It implements the `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the MatchSession from the composition root
//! - Translates key presses into scoring actions and dispatches them
//! - Hands the session back when the operator quits

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
