//! Error types for the Timecard Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during time allocation and
//! plan gating.

use thiserror::Error;

/// The main error type for the Timecard Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::InvalidEntry {
///     entry_id: "te_001".to_string(),
///     message: "duration_minutes must not be negative (got -5)".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time entry 'te_001': duration_minutes must not be negative (got -5)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A time entry failed validation (negative duration, bad timestamp,
    /// missing user).
    #[error("Invalid time entry '{entry_id}': {message}")]
    InvalidEntry {
        /// The ID of the rejected entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A subscription plan name did not match any known tier.
    #[error("Unknown subscription plan: {plan}")]
    UnknownPlan {
        /// The plan name that was not recognised.
        plan: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contained an out-of-range value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidEntry`].
    pub fn invalid_entry(entry_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            entry_id: entry_id.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
