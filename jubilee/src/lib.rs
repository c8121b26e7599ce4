//! Five-year jubilee ages for remindme record files.
//!
//! This crate reads the same record files as `remindme` and reports every
//! birthday or anniversary whose age in a given year is a multiple of five.
//! Tasks and unknown tags are skipped rather than rejected.

pub mod executor;
pub mod jubilee;

pub use executor::{collect_jubilees, execute_jubilees};
pub use jubilee::{JUBILEE_STEP, Jubilee, age_in, is_birthday_like, is_jubilee, jubilee_for_row};
