//! Next-occurrence computation for weekly meeting slots.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};

use crate::error::{MeetCalError, MeetCalResult};

/// Parse a 24-hour "HH:MM" time-of-day string.
pub fn parse_time(s: &str) -> MeetCalResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| MeetCalError::InvalidTime(s.to_string()))
}

/// Map a 0-based weekday index (0 = Sunday) to a `Weekday`.
///
/// Out-of-range indexes fall back to Sunday. Meeting records are validated
/// upstream, so this is a documented permissive default rather than an
/// error path.
pub fn weekday_from_index(index: u8) -> Weekday {
    match index {
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// The two-letter RRULE BYDAY code for a weekday.
pub fn weekday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "SU",
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
    }
}

/// First instant on the target weekday at the target time-of-day, counting
/// from `now`'s date.
///
/// When the target weekday is earlier in the week than `now`'s, the date
/// wraps forward into next week. When it equals `now`'s weekday the
/// occurrence is today at the target time, even if that instant has already
/// passed on the clock; recurring meetings keep this week's slot rather than
/// skipping ahead.
pub fn next_occurrence(now: DateTime<Utc>, target: Weekday, time: NaiveTime) -> DateTime<Utc> {
    let mut day_diff =
        target.num_days_from_sunday() as i64 - now.weekday().num_days_from_sunday() as i64;
    if day_diff < 0 {
        day_diff += 7;
    }

    (now.date_naive() + Duration::days(day_diff))
        .and_time(time)
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("19:30").unwrap(),
            NaiveTime::from_hms_opt(19, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("00:00").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_time_rejects_malformed_input() {
        for bad in ["", "7pm", "25:00", "19:60", "19-30"] {
            assert!(parse_time(bad).is_err(), "should reject '{}'", bad);
        }
    }

    #[test]
    fn test_weekday_from_index_mapping() {
        assert_eq!(weekday_from_index(0), Weekday::Sun);
        assert_eq!(weekday_from_index(1), Weekday::Mon);
        assert_eq!(weekday_from_index(6), Weekday::Sat);
    }

    #[test]
    fn test_weekday_from_index_out_of_range_falls_back_to_sunday() {
        assert_eq!(weekday_from_index(7), Weekday::Sun);
        assert_eq!(weekday_from_index(255), Weekday::Sun);
    }

    #[test]
    fn test_wrap_from_saturday_to_monday() {
        // 2025-03-22 is a Saturday
        let now = Utc.with_ymd_and_hms(2025, 3, 22, 10, 0, 0).unwrap();
        let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap();

        let next = next_occurrence(now, Weekday::Mon, time);

        // 2 days later, not -5
        assert_eq!(next.date_naive().to_string(), "2025-03-24");
        assert_eq!(next.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_later_in_week_moves_forward() {
        // 2025-03-17 is a Monday
        let now = Utc.with_ymd_and_hms(2025, 3, 17, 8, 0, 0).unwrap();
        let time = NaiveTime::from_hms_opt(19, 30, 0).unwrap();

        let next = next_occurrence(now, Weekday::Thu, time);

        assert_eq!(next.date_naive().to_string(), "2025-03-20");
        assert_eq!(next.hour(), 19);
        assert_eq!(next.minute(), 30);
    }

    #[test]
    fn test_same_day_keeps_todays_slot_even_when_past() {
        // 2025-03-19 is a Wednesday; it is 14:00 and the slot is 09:00
        let now = Utc.with_ymd_and_hms(2025, 3, 19, 14, 0, 0).unwrap();
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        let next = next_occurrence(now, Weekday::Wed, time);

        // Today at 09:00, not next Wednesday
        assert_eq!(next, Utc.with_ymd_and_hms(2025, 3, 19, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let now = Utc.with_ymd_and_hms(2025, 3, 22, 10, 0, 0).unwrap();
        let time = NaiveTime::from_hms_opt(18, 0, 0).unwrap();

        let a = next_occurrence(now, Weekday::Tue, time);
        let b = next_occurrence(now, Weekday::Tue, time);
        assert_eq!(a, b);
    }
}
