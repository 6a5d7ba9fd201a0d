//! The internal event value consumed by document assembly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recurrence::RecurrenceSpec;

/// A calendar event, ready to be rendered into an event block.
///
/// Constructed once per export request (by `MeetingRecord::to_event` or
/// directly by a caller), consumed once by `generate_ics`, then discarded.
/// There is no persisted identity; the UID is generated at assembly time.
///
/// Invariant: `end > start`. The assembler enforces this before emitting
/// anything, so a violating event can never produce a partial document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event title (SUMMARY). Required, non-empty.
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Passed through to the URL property verbatim, never escaped.
    pub url: Option<String>,
    pub recurrence: Option<RecurrenceSpec>,
}
