//! ICS document generation.
//!
//! This module renders calendar events into a complete RFC 5545 document:
//! fixed VCALENDAR header, one VEVENT block per event in input order, and
//! the closing footer, with CRLF line endings throughout.

mod generate;

pub use generate::{
    FILE_EXTENSION, MIME_TYPE, escape_text, format_utc, generate_ics, generate_uid,
};
