//! Recurring-meeting calendar export engine.
//!
//! Converts an application's weekly meeting records into RFC 5545 `.ics`
//! documents that third-party calendar clients can import:
//! - `MeetingRecord` for the external input shape, `CalendarEvent` for the
//!   internal event value
//! - `schedule` for next-occurrence computation (weekday wraparound, UTC)
//! - `ics` for document assembly (escaping, folding, CRLF line discipline)
//!
//! The engine is pure computation: it performs no I/O, keeps no state across
//! calls, and surfaces every failure to the immediate caller.

pub mod error;
pub mod event;
pub mod ics;
pub mod meeting;
pub mod recurrence;
pub mod schedule;

// Re-export the main types at crate root for convenience
pub use error::{MeetCalError, MeetCalResult};
pub use event::CalendarEvent;
pub use ics::generate_ics;
pub use meeting::MeetingRecord;
pub use recurrence::{Frequency, RecurrenceSpec};
