//! Cross-frontend primitives for presenting a match.
//!
//! Houses the match session, message logging, event handling, layout
//! selection and view-model types that both the terminal client and future
//! graphical clients can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod layout;
pub mod message;
pub mod session;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, PlayerNames};
pub use event::{EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use layout::{LayoutKind, Orientation, select_layout};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use session::{MatchSession, SessionEvent};
pub use view_model::{PlayerPanel, PresentationMapper, ScoreboardView};
