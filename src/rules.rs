//! Due-date rules.
//!
//! - Task: due once its date is on or before the reference date, and stays due
//! - Birthday / Anniversary: due when the next yearly occurrence falls within
//!   `lead_time_days` of the reference date
//!
//! All rules are pure functions of the record and an explicit reference date.

use chrono::{Datelike, NaiveDate};

use crate::date::{LeapDayPolicy, add_days};
use crate::record::{RecordKind, Reminder};

/// The first yearly occurrence of `anchor`'s month/day on or after `reference`.
///
/// Saturates at `NaiveDate::MAX` if the following year is outside the
/// calendar range.
pub fn next_annual(anchor: NaiveDate, reference: NaiveDate, policy: LeapDayPolicy) -> NaiveDate {
    let year = reference.year();
    match policy.in_year(anchor, year) {
        Some(candidate) if candidate >= reference => candidate,
        _ => policy.in_year(anchor, year + 1).unwrap_or(NaiveDate::MAX),
    }
}

impl Reminder {
    /// Next occurrence of the anchor's month/day on or after `reference`.
    ///
    /// Tasks don't recur; their anchor date is returned as-is.
    pub fn next_occurrence(&self, reference: NaiveDate) -> NaiveDate {
        match self.kind() {
            RecordKind::Task => self.anchor_date(),
            RecordKind::Birthday | RecordKind::Anniversary => {
                next_annual(self.anchor_date(), reference, self.leap_day())
            }
        }
    }

    /// Whether the reminder should be shown on `reference`.
    pub fn is_due(&self, reference: NaiveDate) -> bool {
        match self.kind() {
            RecordKind::Task => self.anchor_date() <= reference,
            RecordKind::Birthday | RecordKind::Anniversary => {
                self.next_occurrence(reference) <= add_days(reference, self.lead_time_days())
            }
        }
    }

    /// Whole days from `today` to the next occurrence (0 when it is today).
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        self.next_occurrence(today)
            .signed_duration_since(today)
            .num_days()
    }
}
