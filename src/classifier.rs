//! Row classification: kind tag → typed [`Reminder`].

use log::debug;

use crate::config::Settings;
use crate::date::parse_date;
use crate::error::ReminderError;
use crate::record::{RecordKind, Reminder};
use crate::row::Row;

/// Smallest row: tag, date, label.
const MIN_FIELDS: usize = 3;
/// Largest row: tag, date, label, lead days.
const MAX_FIELDS: usize = 4;

/// Build the reminder described by `row`.
///
/// Unknown tags are an error rather than a skip: they usually mean a typo
/// in the record file.
pub fn classify(row: &Row, settings: &Settings) -> Result<Reminder, ReminderError> {
    let kind = RecordKind::from_tag(row.tag()).ok_or_else(|| ReminderError::UnknownKind {
        tag: row.tag().to_string(),
        line: row.line,
    })?;

    if !(MIN_FIELDS..=MAX_FIELDS).contains(&row.len()) {
        return Err(ReminderError::RowShape {
            line: row.line,
            expected: "3 or 4",
            found: row.len(),
        });
    }

    let date_text = row.field(1).unwrap_or_default();
    let anchor_date = parse_date(date_text).map_err(|e| e.at_line(row.line))?;
    let label = row.field(2).unwrap_or_default();

    let lead_time_days = match row.field(3) {
        Some(text) if !text.is_empty() => {
            parse_lead_time(text).map_err(|e| e.at_line(row.line))?
        }
        _ => settings.default_lead_days(kind),
    };

    debug!(
        "Line {}: {:?} '{}' on {} (lead {} days)",
        row.line, kind, label, anchor_date, lead_time_days
    );

    Ok(Reminder::new(kind, anchor_date, label, lead_time_days).with_leap_day(settings.leap_day))
}

/// Parse a lead time in days; negative values are rejected.
pub fn parse_lead_time(text: &str) -> Result<u32, ReminderError> {
    let days: i64 = text
        .parse()
        .map_err(|_| ReminderError::validation(text, "lead time must be a whole number of days"))?;
    u32::try_from(days)
        .map_err(|_| ReminderError::validation(text, "lead time must be between 0 and 4294967295"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn classify_fields(fields: &[&str]) -> Result<Reminder, ReminderError> {
        classify(&Row::from_fields(fields), &Settings::default())
    }

    #[test]
    fn test_classify_task_default_lead() {
        let reminder = classify_fields(&["t", "2024-01-01", "Pay rent"]).unwrap();
        assert_eq!(reminder.kind(), RecordKind::Task);
        assert_eq!(reminder.anchor_date(), ymd(2024, 1, 1));
        assert_eq!(reminder.label(), "Pay rent");
        assert_eq!(reminder.lead_time_days(), 0);
    }

    #[test]
    fn test_classify_birthday_default_lead() {
        let reminder = classify_fields(&["b", "2000-03-10", "Bob"]).unwrap();
        assert_eq!(reminder.kind(), RecordKind::Birthday);
        assert_eq!(reminder.lead_time_days(), 1);
    }

    #[test]
    fn test_classify_anniversary_explicit_lead() {
        let reminder = classify_fields(&["a", "2010-09-04", "Sam and Kim", "14"]).unwrap();
        assert_eq!(reminder.kind(), RecordKind::Anniversary);
        assert_eq!(reminder.lead_time_days(), 14);
    }

    #[test]
    fn test_classify_empty_lead_uses_default() {
        let reminder = classify_fields(&["b", "2000-03-10", "Bob", ""]).unwrap();
        assert_eq!(reminder.lead_time_days(), 1);
    }

    #[test]
    fn test_classify_zero_lead_is_allowed() {
        let reminder = classify_fields(&["b", "2000-03-10", "Bob", "0"]).unwrap();
        assert_eq!(reminder.lead_time_days(), 0);
    }

    #[test]
    fn test_classify_uses_settings_defaults() {
        let settings = Settings {
            birthday_lead_days: 5,
            leap_day: crate::date::LeapDayPolicy::RollForward,
            ..Settings::default()
        };
        let reminder = classify(&Row::from_fields(&["b", "2000-02-29", "Leap"]), &settings).unwrap();
        assert_eq!(reminder.lead_time_days(), 5);
        assert_eq!(reminder.leap_day(), crate::date::LeapDayPolicy::RollForward);
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let row = Row::new(4, vec!["x".into(), "2025-01-01".into(), "foo".into()]);
        match classify(&row, &Settings::default()) {
            Err(ReminderError::UnknownKind { tag, line }) => {
                assert_eq!(tag, "x");
                assert_eq!(line, 4);
            }
            other => panic!("Expected UnknownKind, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_date_is_validation_error() {
        match classify_fields(&["b", "", "Alice"]) {
            Err(ReminderError::Validation { value, .. }) => assert_eq!(value, ""),
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_date_names_value() {
        match classify_fields(&["t", "2025-02-30", "Nope"]) {
            Err(ReminderError::Validation { value, reason }) => {
                assert_eq!(value, "2025-02-30");
                assert!(reason.contains("line 1"));
            }
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            classify_fields(&["b", "2000-03-10"]),
            Err(ReminderError::RowShape { found: 2, .. })
        ));
        assert!(matches!(
            classify_fields(&["b"]),
            Err(ReminderError::RowShape { found: 1, .. })
        ));
        assert!(matches!(
            classify_fields(&["b", "2000-03-10", "Bob", "1", "extra"]),
            Err(ReminderError::RowShape { found: 5, .. })
        ));
    }

    #[test]
    fn test_parse_lead_time() {
        assert_eq!(parse_lead_time("0").unwrap(), 0);
        assert_eq!(parse_lead_time("30").unwrap(), 30);
        assert!(matches!(
            parse_lead_time("-1"),
            Err(ReminderError::Validation { .. })
        ));
        assert!(matches!(
            parse_lead_time("soon"),
            Err(ReminderError::Validation { .. })
        ));
        assert!(matches!(
            parse_lead_time("1.5"),
            Err(ReminderError::Validation { .. })
        ));
    }
}
