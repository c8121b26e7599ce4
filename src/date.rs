//! Calendar date parsing and annual recurrence helpers.
//!
//! Record dates use the fixed `YYYY-MM-DD` layout. Birthdays and anniversaries
//! recur on the anchor's month/day; a February 29 anchor needs a rule for
//! common years, picked by [`LeapDayPolicy`].

use chrono::{Datelike, Days, NaiveDate};
use serde::Deserialize;

use crate::error::ReminderError;

/// Text layout of every date in a record file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse `YYYY-MM-DD` text into a calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, ReminderError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| ReminderError::validation(text, "expected a YYYY-MM-DD date"))
}

/// Format a date back into the record file layout.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `date + days`, saturating at the end of the representable calendar.
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Where a February 29 anchor lands in a year without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeapDayPolicy {
    /// Celebrate on February 28.
    #[default]
    Clamp,
    /// Celebrate on March 1.
    RollForward,
}

impl LeapDayPolicy {
    /// The anchor's month/day placed in `year`.
    ///
    /// Returns `None` only when `year` lies outside chrono's calendar range.
    pub fn in_year(self, anchor: NaiveDate, year: i32) -> Option<NaiveDate> {
        if let Some(date) = anchor.with_year(year) {
            return Some(date);
        }
        // with_year only fails in range for Feb 29 -> common year
        match self {
            LeapDayPolicy::Clamp => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::RollForward => NaiveDate::from_ymd_opt(year, 3, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-10").unwrap(), ymd(2025, 3, 10));
    }

    #[test]
    fn test_parse_then_format_is_identity() {
        for text in ["2000-02-29", "1990-06-15", "2024-12-31", "1969-07-20"] {
            assert_eq!(format_date(parse_date(text).unwrap()), text);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for text in ["", "2025-02-30", "2025/01/01", "yesterday", "2023-02-29"] {
            match parse_date(text) {
                Err(ReminderError::Validation { value, .. }) => assert_eq!(value, text),
                other => panic!("Expected Validation for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(ymd(2025, 12, 31), 1), ymd(2026, 1, 1));
        assert_eq!(add_days(ymd(2025, 3, 9), 0), ymd(2025, 3, 9));
        assert_eq!(add_days(NaiveDate::MAX, 5), NaiveDate::MAX);
    }

    #[test]
    fn test_in_year_keeps_ordinary_dates() {
        let anchor = ymd(1990, 6, 15);
        assert_eq!(LeapDayPolicy::Clamp.in_year(anchor, 2025), Some(ymd(2025, 6, 15)));
        assert_eq!(
            LeapDayPolicy::RollForward.in_year(anchor, 2025),
            Some(ymd(2025, 6, 15))
        );
    }

    #[test]
    fn test_leap_day_clamp() {
        let anchor = ymd(2000, 2, 29);
        assert_eq!(LeapDayPolicy::Clamp.in_year(anchor, 2025), Some(ymd(2025, 2, 28)));
        assert_eq!(LeapDayPolicy::Clamp.in_year(anchor, 2028), Some(ymd(2028, 2, 29)));
    }

    #[test]
    fn test_leap_day_roll_forward() {
        let anchor = ymd(2000, 2, 29);
        assert_eq!(
            LeapDayPolicy::RollForward.in_year(anchor, 2025),
            Some(ymd(2025, 3, 1))
        );
        assert_eq!(
            LeapDayPolicy::RollForward.in_year(anchor, 2028),
            Some(ymd(2028, 2, 29))
        );
    }
}
