//! # remindme
//!
//! Birthday, anniversary and task reminders from a plain comma-delimited
//! record file.
//!
//! ## Overview
//!
//! Each row of a record file flows through four steps:
//! - **Record stream** ([`row`]): tokenize lines, skip blanks and `#` comments
//! - **Classifier** ([`classifier`]): one-character tag → typed [`Reminder`]
//! - **Rules** ([`rules`]): is the reminder due on the reference date?
//! - **Reporter** ([`report`]): format a due reminder as a display line
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use remindme::{Settings, collect_reminders};
//!
//! let records = "\
//! t, 2024-01-01, Pay rent
//! b, 2000-03-10, Bob
//! b, 1990-06-15, Alice
//! ";
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
//! let lines = collect_reminders(records, today, &Settings::default()).unwrap();
//!
//! assert_eq!(lines, vec!["Pay rent", "Bob has a birthday in 1 day(s)"]);
//! ```

pub mod classifier;
pub mod config;
pub mod date;
pub mod error;
pub mod executor;
pub mod record;
pub mod report;
pub mod row;
pub mod rules;

pub use classifier::{classify, parse_lead_time};
pub use config::Settings;
pub use date::{DATE_FORMAT, LeapDayPolicy, format_date, parse_date};
pub use error::ReminderError;
pub use executor::{RunSummary, collect_reminders, evaluate_row, evaluate_rows, execute_reminders};
pub use record::{RecordKind, Reminder};
pub use report::{BANNER, bullet};
pub use row::{Row, read_file, read_rows, split_fields};
pub use rules::next_annual;
