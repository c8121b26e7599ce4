//! Typed reminder records.

use chrono::NaiveDate;

use crate::date::LeapDayPolicy;

/// The closed set of record kinds a record file may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// One-off task, shown from its date onwards.
    Task,
    /// Yearly birthday.
    Birthday,
    /// Yearly anniversary.
    Anniversary,
}

impl RecordKind {
    /// Look a kind up by its one-character tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "t" => Some(RecordKind::Task),
            "b" => Some(RecordKind::Birthday),
            "a" => Some(RecordKind::Anniversary),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            RecordKind::Task => "t",
            RecordKind::Birthday => "b",
            RecordKind::Anniversary => "a",
        }
    }

    /// Birthdays and anniversaries come back every year.
    pub fn is_annual(&self) -> bool {
        matches!(self, RecordKind::Birthday | RecordKind::Anniversary)
    }
}

/// A single classified record.
///
/// Built once per row by the classifier; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    kind: RecordKind,
    anchor_date: NaiveDate,
    label: String,
    lead_time_days: u32,
    leap_day: LeapDayPolicy,
}

impl Reminder {
    pub fn new(
        kind: RecordKind,
        anchor_date: NaiveDate,
        label: impl Into<String>,
        lead_time_days: u32,
    ) -> Self {
        Self {
            kind,
            anchor_date,
            label: label.into(),
            lead_time_days,
            leap_day: LeapDayPolicy::default(),
        }
    }

    pub fn with_leap_day(mut self, leap_day: LeapDayPolicy) -> Self {
        self.leap_day = leap_day;
        self
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn lead_time_days(&self) -> u32 {
        self.lead_time_days
    }

    pub fn leap_day(&self) -> LeapDayPolicy {
        self.leap_day
    }
}
