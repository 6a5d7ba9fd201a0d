//! Error types for the export engine.

use thiserror::Error;

/// Errors that can occur while converting meetings or assembling a document.
///
/// Every error is surfaced synchronously to the caller; nothing is logged,
/// swallowed, or retried internally, and no partial document is ever
/// returned.
#[derive(Error, Debug)]
pub enum MeetCalError {
    #[error("Invalid time '{0}'. Expected HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("Event summary must not be empty")]
    EmptySummary,

    #[error("Event '{summary}' ends at or before it starts")]
    InvalidEventWindow { summary: String },

    #[error("Invalid recurrence for event '{summary}': {reason}")]
    InvalidRecurrence { summary: String, reason: String },
}

/// Result type alias for export operations.
pub type MeetCalResult<T> = Result<T, MeetCalError>;
