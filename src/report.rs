//! Human-readable reminder lines.

use chrono::NaiveDate;

use crate::record::{RecordKind, Reminder};

/// First line of a reminder run.
pub const BANNER: &str = "Hello, here are your reminders for today:";

impl Reminder {
    /// Format the reminder relative to `today`.
    pub fn describe(&self, today: NaiveDate) -> String {
        match self.kind() {
            RecordKind::Task => self.label().to_string(),
            RecordKind::Birthday => match self.days_until(today) {
                0 => format!("{} has a birthday today", self.label()),
                days => format!("{} has a birthday in {days} day(s)", self.label()),
            },
            RecordKind::Anniversary => match self.days_until(today) {
                0 => format!("{} have an anniversary today", self.label()),
                days => format!("{} have an anniversary in {days} day(s)", self.label()),
            },
        }
    }
}

/// Bullet a described reminder for the console listing.
pub fn bullet(line: &str) -> String {
    format!("* {line}")
}
