//! Common error infrastructure for scoring-core.
//!
//! Scoring operations themselves are total and never fail. Errors only arise
//! at the edges, for example when a frontend turns operator text into an
//! [`Action`](crate::Action). Concrete error enums live next to the code that
//! produces them and implement [`ScoreboardError`] so frontends can classify
//! them uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Only operator input can fail, so every error is a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown command, missing side
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all scoring-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ScoreboardError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
