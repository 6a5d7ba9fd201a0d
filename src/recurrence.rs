//! Recurrence specification and RRULE serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ics::format_utc;

/// Recurrence frequency.
///
/// All four values serialize correctly, but only `Weekly` is produced by the
/// meeting conversion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// The RRULE FREQ token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

/// How an event repeats.
///
/// Invariants: `interval >= 1`; `until`, when present, must not precede the
/// owning event's start. Both are checked by the assembler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceSpec {
    pub frequency: Frequency,
    /// Repeat every N units of `frequency`. 1 means "every unit" and is
    /// omitted from the serialized rule.
    pub interval: u32,
    /// Two-letter weekday codes (SU..SA), order preserved in output.
    /// Only meaningful with `Weekly`.
    pub by_weekday: Vec<String>,
    /// Inclusive end boundary of the recurrence.
    pub until: Option<DateTime<Utc>>,
}

impl RecurrenceSpec {
    /// Weekly recurrence on a single weekday, every week, no end boundary.
    pub fn weekly(weekday_code: &str) -> Self {
        RecurrenceSpec {
            frequency: Frequency::Weekly,
            interval: 1,
            by_weekday: vec![weekday_code.to_string()],
            until: None,
        }
    }

    /// Serialize to a single RRULE value, e.g. `FREQ=WEEKLY;BYDAY=TU`.
    ///
    /// Field order is fixed: FREQ, INTERVAL (only if > 1), BYDAY (only if
    /// non-empty), UNTIL (only if present). Fields are omitted rather than
    /// emitted empty; consuming clients treat an empty field as a parse
    /// error.
    pub fn to_rrule(&self) -> String {
        let mut parts = vec![format!("FREQ={}", self.frequency.as_str())];

        if self.interval > 1 {
            parts.push(format!("INTERVAL={}", self.interval));
        }

        if !self.by_weekday.is_empty() {
            parts.push(format!("BYDAY={}", self.by_weekday.join(",")));
        }

        if let Some(until) = self.until {
            parts.push(format!("UNTIL={}", format_utc(until)));
        }

        parts.join(";")
    }
}
