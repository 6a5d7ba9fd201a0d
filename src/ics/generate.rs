//! ICS document assembly.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{MeetCalError, MeetCalResult};
use crate::event::CalendarEvent;

/// MIME type for serving the generated document.
pub const MIME_TYPE: &str = "text/calendar";

/// File extension for the generated document.
pub const FILE_EXTENSION: &str = "ics";

const PRODID: &str = "-//meetcal//Meeting Export//EN";

/// Maximum octets per physical content line before folding.
const FOLD_LIMIT: usize = 75;

/// Generate a unique event identifier.
///
/// Unique across invocations within a process; not persisted anywhere, so a
/// re-export of the same meeting produces a fresh UID.
pub fn generate_uid() -> String {
    Uuid::new_v4().to_string()
}

/// Escape text for embedding in a single ICS property value.
///
/// The replacement order matters: backslashes must be escaped first so the
/// backslashes introduced for semicolons, commas, and newlines are not
/// themselves re-escaped. Applied exactly once per value by the assembler.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Format an instant as the fixed-width UTC timestamp `YYYYMMDDTHHMMSSZ`.
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Fold a content line at 75 octets with CRLF + space continuations.
///
/// Continuation lines lose one octet to the leading space. Splits happen
/// only at character boundaries, never inside a UTF-8 sequence.
fn fold_line(line: &str) -> String {
    if line.len() <= FOLD_LIMIT {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 3 * (line.len() / FOLD_LIMIT + 1));
    let mut used = 0;
    let mut budget = FOLD_LIMIT;
    for ch in line.chars() {
        let width = ch.len_utf8();
        if used + width > budget {
            out.push_str("\r\n ");
            used = 0;
            budget = FOLD_LIMIT - 1;
        }
        out.push(ch);
        used += width;
    }
    out
}

fn validate(event: &CalendarEvent) -> MeetCalResult<()> {
    if event.summary.is_empty() {
        return Err(MeetCalError::EmptySummary);
    }

    if event.end <= event.start {
        return Err(MeetCalError::InvalidEventWindow {
            summary: event.summary.clone(),
        });
    }

    if let Some(ref recurrence) = event.recurrence {
        if recurrence.interval == 0 {
            return Err(MeetCalError::InvalidRecurrence {
                summary: event.summary.clone(),
                reason: "interval must be >= 1".to_string(),
            });
        }
        if let Some(until) = recurrence.until {
            if until < event.start {
                return Err(MeetCalError::InvalidRecurrence {
                    summary: event.summary.clone(),
                    reason: "until precedes event start".to_string(),
                });
            }
        }
    }

    Ok(())
}

fn write_event(lines: &mut Vec<String>, event: &CalendarEvent, dtstamp: &str) {
    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}", generate_uid()));
    lines.push(format!("DTSTAMP:{}", dtstamp));
    lines.push(format!("DTSTART:{}", format_utc(event.start)));
    lines.push(format!("DTEND:{}", format_utc(event.end)));
    lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));

    if let Some(ref description) = event.description {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }

    if let Some(ref location) = event.location {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }

    // URLs pass through unescaped
    if let Some(ref url) = event.url {
        lines.push(format!("URL:{}", url));
    }

    if let Some(ref recurrence) = event.recurrence {
        lines.push(format!("RRULE:{}", recurrence.to_rrule()));
    }

    lines.push("END:VEVENT".to_string());
}

/// Render events into a complete ICS document.
///
/// Events appear in input order; no sorting or deduplication. All events are
/// validated up front, so on error no partial document is produced. The
/// output is byte-for-byte deterministic for identical inputs except for the
/// per-event UID and the DTSTAMP lines.
pub fn generate_ics(events: &[CalendarEvent]) -> MeetCalResult<String> {
    for event in events {
        validate(event)?;
    }

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    let dtstamp = format_utc(Utc::now());
    for event in events {
        write_event(&mut lines, event, &dtstamp);
    }

    lines.push("END:VCALENDAR".to_string());

    let mut document = lines
        .iter()
        .map(|line| fold_line(line))
        .collect::<Vec<_>>()
        .join("\r\n");
    document.push_str("\r\n");
    Ok(document)
}
