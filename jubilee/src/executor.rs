//! Record-at-a-time jubilee executor.

use std::io::Write;

use log::{debug, info};
use remindme::{ReminderError, read_rows};

use crate::jubilee::{Jubilee, jubilee_for_row};

/// Run the jubilee pipeline over record text, writing one line per jubilee.
///
/// Returns the number of lines written. Lines already written stay written
/// when a later row fails.
pub fn execute_jubilees<W: Write>(
    input_text: &str,
    reference_year: i32,
    out: &mut W,
) -> Result<usize, ReminderError> {
    let mut rows = 0;
    let mut shown = 0;
    for row in read_rows(input_text) {
        rows += 1;
        match jubilee_for_row(&row, reference_year)? {
            Some(jubilee) => {
                writeln!(out, "{jubilee}")?;
                shown += 1;
            }
            None => debug!("Line {}: no jubilee in {}", row.line, reference_year),
        }
    }
    out.flush()?;

    info!("Processed {rows} -> {shown} jubilees for {reference_year}");
    Ok(shown)
}

/// Collect the jubilees for `reference_year` in input order.
pub fn collect_jubilees(
    input_text: &str,
    reference_year: i32,
) -> Result<Vec<Jubilee>, ReminderError> {
    read_rows(input_text)
        .filter_map(|row| jubilee_for_row(&row, reference_year).transpose())
        .collect()
}
