//! Jubilee ages: whole years since a birthday or anniversary, in steps of five.

use std::fmt;

use chrono::Datelike;
use remindme::{RecordKind, ReminderError, Row, parse_date};

/// Years between two jubilees.
pub const JUBILEE_STEP: i64 = 5;

/// Tag, date and label; anything after the label is not read.
const MIN_FIELDS: usize = 3;

/// A birthday or anniversary whose age is a multiple of [`JUBILEE_STEP`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jubilee {
    pub kind: RecordKind,
    pub label: String,
    pub age: i64,
}

impl fmt::Display for Jubilee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}: {} years", self.kind.tag(), self.label, self.age)
    }
}

/// Only birthday (`b`) and anniversary (`a`) rows are considered.
pub fn is_birthday_like(row: &Row) -> bool {
    RecordKind::from_tag(row.tag()).is_some_and(|kind| kind.is_annual())
}

/// Year difference, compared by year only (month and day are ignored).
///
/// Anchors after `reference_year` give negative ages; they are kept.
pub fn age_in(anchor_year: i32, reference_year: i32) -> i64 {
    i64::from(reference_year) - i64::from(anchor_year)
}

pub fn is_jubilee(age: i64) -> bool {
    age % JUBILEE_STEP == 0
}

/// Jubilee for `row` in `reference_year`, if there is one.
///
/// Rows of other kinds (tasks, unknown tags) are ignored without error.
/// Only the date and label of a birthday or anniversary row are read, so
/// lead times and trailing fields are never validated here. A bad date or a
/// missing label is an error.
pub fn jubilee_for_row(row: &Row, reference_year: i32) -> Result<Option<Jubilee>, ReminderError> {
    let Some(kind) = RecordKind::from_tag(row.tag()).filter(RecordKind::is_annual) else {
        return Ok(None);
    };
    if row.len() < MIN_FIELDS {
        return Err(ReminderError::RowShape {
            line: row.line,
            expected: "at least 3",
            found: row.len(),
        });
    }

    let date_text = row.field(1).unwrap_or_default();
    let anchor_date = parse_date(date_text).map_err(|e| e.at_line(row.line))?;
    let age = age_in(anchor_date.year(), reference_year);
    if !is_jubilee(age) {
        return Ok(None);
    }
    Ok(Some(Jubilee {
        kind,
        label: row.field(2).unwrap_or_default().to_string(),
        age,
    }))
}
