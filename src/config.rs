//! Run settings: default lead times, leap-day handling and output banner.
//!
//! Settings come from an optional TOML file; every key has a default so an
//! empty file (or no file) gives the stock behavior.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::date::LeapDayPolicy;
use crate::error::ReminderError;
use crate::record::RecordKind;

fn default_task_lead_days() -> u32 {
    0
}
fn default_birthday_lead_days() -> u32 {
    1
}
fn default_anniversary_lead_days() -> u32 {
    1
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_task_lead_days")]
    pub task_lead_days: u32,
    #[serde(default = "default_birthday_lead_days")]
    pub birthday_lead_days: u32,
    #[serde(default = "default_anniversary_lead_days")]
    pub anniversary_lead_days: u32,
    #[serde(default)]
    pub leap_day: LeapDayPolicy,
    /// Print the greeting line before the reminders.
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            task_lead_days: default_task_lead_days(),
            birthday_lead_days: default_birthday_lead_days(),
            anniversary_lead_days: default_anniversary_lead_days(),
            leap_day: LeapDayPolicy::default(),
            show_banner: true,
        }
    }
}

impl Settings {
    /// Lead time used when a row leaves its fourth field out.
    pub fn default_lead_days(&self, kind: RecordKind) -> u32 {
        match kind {
            RecordKind::Task => self.task_lead_days,
            RecordKind::Birthday => self.birthday_lead_days,
            RecordKind::Anniversary => self.anniversary_lead_days,
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load settings from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ReminderError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|e| ReminderError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&text).map_err(|e| ReminderError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }
}
