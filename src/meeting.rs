//! External meeting records and their conversion to calendar events.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{MeetCalError, MeetCalResult};
use crate::event::CalendarEvent;
use crate::recurrence::RecurrenceSpec;
use crate::schedule::{next_occurrence, parse_time, weekday_code, weekday_from_index};

/// A weekly meeting as supplied by the surrounding application.
///
/// Read-only input: the engine consumes it once and keeps nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub name: String,
    /// 0-based day of week, 0 = Sunday.
    pub weekday: u8,
    /// 24-hour "HH:MM" time-of-day.
    pub time: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Meeting format tag (e.g. "Open Discussion"), rendered into the
    /// event description.
    pub format: Option<String>,
    pub url: Option<String>,
}

impl MeetingRecord {
    /// Convert into a `CalendarEvent` scheduled at the meeting's next
    /// occurrence on or after `now`.
    ///
    /// The event runs exactly one hour and recurs weekly on the meeting's
    /// weekday. Location is the comma-join of the non-empty address
    /// components (address, city, state).
    pub fn to_event(&self, now: DateTime<Utc>) -> MeetCalResult<CalendarEvent> {
        if self.name.is_empty() {
            return Err(MeetCalError::EmptySummary);
        }

        let time = parse_time(&self.time)?;
        let weekday = weekday_from_index(self.weekday);
        let start = next_occurrence(now, weekday, time);

        let location_parts: Vec<&str> = [&self.address, &self.city, &self.state]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();
        let location = if location_parts.is_empty() {
            None
        } else {
            Some(location_parts.join(", "))
        };

        Ok(CalendarEvent {
            summary: self.name.clone(),
            description: self.format.as_ref().map(|f| format!("Format: {}", f)),
            location,
            start,
            end: start + Duration::hours(1),
            url: self.url.clone(),
            recurrence: Some(RecurrenceSpec::weekly(weekday_code(weekday))),
        })
    }
}
