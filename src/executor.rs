//! Record-at-a-time reminder executor.
//!
//! Each row is classified, tested for due-ness and formatted before the next
//! row is read. Lines are written to the sink as they are produced, so rows
//! that were already reported stay visible when a later row fails.

use std::io::Write;

use chrono::NaiveDate;
use log::{debug, info};

use crate::classifier::classify;
use crate::config::Settings;
use crate::error::ReminderError;
use crate::report::{BANNER, bullet};
use crate::row::{Row, read_rows};

/// Counts from a finished reminder run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows that reached the classifier (blank and comment rows excluded).
    pub rows: usize,
    /// Rows that produced an output line.
    pub shown: usize,
}

/// Push one row through classification, the due rule and the reporter.
///
/// `reference` decides due-ness; `today` anchors the "in N day(s)" wording.
/// Returns `Ok(None)` when the row is not due.
pub fn evaluate_row(
    row: &Row,
    reference: NaiveDate,
    today: NaiveDate,
    settings: &Settings,
) -> Result<Option<String>, ReminderError> {
    let reminder = classify(row, settings)?;
    if !reminder.is_due(reference) {
        debug!("Line {}: not due on {}", row.line, reference);
        return Ok(None);
    }
    Ok(Some(reminder.describe(today)))
}

/// Lazily evaluate rows in input order, yielding only due reminders.
pub fn evaluate_rows<'a, I>(
    rows: I,
    reference: NaiveDate,
    today: NaiveDate,
    settings: &'a Settings,
) -> impl Iterator<Item = Result<String, ReminderError>> + 'a
where
    I: IntoIterator<Item = Row>,
    I::IntoIter: 'a,
{
    rows.into_iter()
        .filter_map(move |row| evaluate_row(&row, reference, today, settings).transpose())
}

/// Run the reminder pipeline over record text, writing lines to `out`.
///
/// Stops at the first bad row; everything before it has been written.
pub fn execute_reminders<W: Write>(
    input_text: &str,
    today: NaiveDate,
    settings: &Settings,
    out: &mut W,
) -> Result<RunSummary, ReminderError> {
    if settings.show_banner {
        writeln!(out, "{BANNER}")?;
    }

    let mut summary = RunSummary::default();
    for row in read_rows(input_text) {
        summary.rows += 1;
        if let Some(line) = evaluate_row(&row, today, today, settings)? {
            writeln!(out, "{}", bullet(&line))?;
            summary.shown += 1;
        }
    }
    out.flush()?;

    info!(
        "Processed {} -> {} reminders for {}",
        summary.rows, summary.shown, today
    );
    Ok(summary)
}

/// Collect the due reminder lines for `today` (no banner, no bullets).
pub fn collect_reminders(
    input_text: &str,
    today: NaiveDate,
    settings: &Settings,
) -> Result<Vec<String>, ReminderError> {
    evaluate_rows(read_rows(input_text), today, today, settings).collect()
}
