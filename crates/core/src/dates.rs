//! Calendar-date normalization and week-boundary helpers.
//!
//! Scheduling weeks are identified by their start day and always span
//! exactly seven days. Everything here is pure and total: unresolvable
//! input degrades to `None`, never a panic or an error, so callers must
//! treat `None` as "could not resolve -- reject or skip".

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Days between a week's start and its (inclusive) end.
const WEEK_SPAN_DAYS: i64 = 6;

/// Parse a heterogeneous date input into a calendar date.
///
/// Accepted forms, tried in order:
/// - ISO datetimes (`2024-01-08T23:30:00Z`, with or without an offset):
///   the date portion before the `T` is taken literally, so the calendar
///   day never shifts across timezones;
/// - `YYYY-MM-DD`;
/// - `YYYY/M/D`;
/// - `D.M.YYYY`.
///
/// Blank or unparseable input yields `None`.
pub fn normalize_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Datetime strings carry the calendar date left of the `T`.
    let date_part = match trimmed.split_once('T') {
        Some((date, _)) => date,
        None => trimmed,
    };

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y/%m/%d"))
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d.%m.%Y"))
        .ok()
}

/// Format a date canonically as zero-padded `YYYY-MM-DD`.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The last day of a week starting on `week_start`: exactly six days later.
///
/// A schedule's end date is always derived this way; caller-supplied end
/// dates are never trusted.
pub fn week_end(week_start: NaiveDate) -> NaiveDate {
    week_start + Duration::days(WEEK_SPAN_DAYS)
}

/// Start and end dates of a schedule week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekBounds {
    /// Inclusive lower endpoint for datetime range comparisons (midnight).
    pub fn start_of_day(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Inclusive upper endpoint for datetime range comparisons
    /// (23:59:59.999).
    pub fn end_of_day(&self) -> NaiveDateTime {
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
            .expect("23:59:59.999 is a valid time");
        self.end.and_time(end_of_day)
    }
}

/// Compute the week containing `anchor`, aligned to `week_starts_on`.
///
/// Scheduling call sites align to Monday; the start day is a parameter so
/// the same arithmetic serves Sunday-start consumers.
pub fn week_bounds(anchor: NaiveDate, week_starts_on: Weekday) -> WeekBounds {
    let offset = (7 + anchor.weekday().num_days_from_monday() as i64
        - week_starts_on.num_days_from_monday() as i64)
        % 7;
    let start = anchor - Duration::days(offset);
    WeekBounds {
        start,
        end: week_end(start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -----------------------------------------------------------------------
    // normalize_calendar_date
    // -----------------------------------------------------------------------

    #[test]
    fn parses_bare_calendar_date() {
        assert_eq!(
            normalize_calendar_date("2024-01-08"),
            Some(date(2024, 1, 8))
        );
    }

    #[test]
    fn datetime_keeps_the_calendar_day() {
        // Late-evening UTC instants must not shift the calendar day.
        assert_eq!(
            normalize_calendar_date("2024-01-08T23:30:00Z"),
            Some(date(2024, 1, 8))
        );
        assert_eq!(
            normalize_calendar_date("2024-01-08T00:15:00+05:00"),
            Some(date(2024, 1, 8))
        );
    }

    #[test]
    fn parses_slash_and_dot_forms() {
        assert_eq!(normalize_calendar_date("2024/1/8"), Some(date(2024, 1, 8)));
        assert_eq!(normalize_calendar_date("8.1.2024"), Some(date(2024, 1, 8)));
    }

    #[test]
    fn garbage_resolves_to_none() {
        assert_eq!(normalize_calendar_date("not-a-date"), None);
        assert_eq!(normalize_calendar_date("2024-13-40"), None);
        assert_eq!(normalize_calendar_date(""), None);
        assert_eq!(normalize_calendar_date("   "), None);
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["2024-01-08", "2024-01-08T23:30:00Z", "2024/1/8"] {
            let first = normalize_calendar_date(raw).unwrap();
            let second = normalize_calendar_date(&format_calendar_date(first)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_calendar_date(date(2024, 3, 4)), "2024-03-04");
    }

    // -----------------------------------------------------------------------
    // week_end
    // -----------------------------------------------------------------------

    #[test]
    fn week_end_is_six_days_later() {
        assert_eq!(week_end(date(2024, 1, 8)), date(2024, 1, 14));
    }

    #[test]
    fn week_end_crosses_month_and_year_boundaries() {
        assert_eq!(week_end(date(2024, 1, 29)), date(2024, 2, 4));
        assert_eq!(week_end(date(2024, 12, 30)), date(2025, 1, 5));
    }

    // -----------------------------------------------------------------------
    // week_bounds
    // -----------------------------------------------------------------------

    #[test]
    fn monday_week_contains_every_weekday() {
        // 2024-01-08 is a Monday.
        for day in 8..=14 {
            let bounds = week_bounds(date(2024, 1, day), Weekday::Mon);
            assert_eq!(bounds.start, date(2024, 1, 8));
            assert_eq!(bounds.end, date(2024, 1, 14));
        }
    }

    #[test]
    fn monday_anchor_is_its_own_start() {
        let bounds = week_bounds(date(2024, 1, 8), Weekday::Mon);
        assert_eq!(bounds.start, date(2024, 1, 8));
    }

    #[test]
    fn sunday_start_weeks_align_differently() {
        // 2024-01-10 is a Wednesday; the enclosing Sunday-start week
        // begins on 2024-01-07.
        let bounds = week_bounds(date(2024, 1, 10), Weekday::Sun);
        assert_eq!(bounds.start, date(2024, 1, 7));
        assert_eq!(bounds.end, date(2024, 1, 13));
    }

    #[test]
    fn day_bounds_cover_the_full_range() {
        let bounds = week_bounds(date(2024, 1, 10), Weekday::Mon);
        assert_eq!(
            bounds.start_of_day(),
            date(2024, 1, 8).and_time(NaiveTime::MIN)
        );
        assert_eq!(
            bounds.end_of_day(),
            date(2024, 1, 14)
                .and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
        );
    }
}
