//! CLI tool to print today's reminders from a record file.
//!
//! Usage:
//!   remindme <records.csv>
//!   remindme <records.csv> --today 2025-03-09 --config remindme.toml

use chrono::{Local, NaiveDate};
use clap::Parser;
use log::info;
use remindme::{ReminderError, RunSummary, Settings, execute_reminders, parse_date, read_file};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

/// Print the tasks, birthdays and anniversaries due today.
#[derive(Parser)]
#[command(name = "remindme")]
struct Cli {
    /// Record file (comma-delimited: kind, date, label[, lead days])
    records: PathBuf,

    /// Evaluate as of this date (YYYY-MM-DD) instead of the system date
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// TOML settings file (default lead times, leap-day rule, banner)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,

    /// Log per-row decisions and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_today(text: &str) -> Result<NaiveDate, String> {
    parse_date(text).map_err(|e| e.to_string())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<RunSummary, ReminderError> {
    let settings = Settings::load(cli.config.as_deref())?;
    let input_text = read_file(&cli.records)?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    info!("Records: {}", cli.records.display());
    info!("Today:   {today}");

    execute_reminders(&input_text, today, &settings, out)
}

/// Report the outcome, wait for Enter if asked, and pick the exit code.
///
/// The error is printed before pausing so a failed run never sits silent.
fn finish(
    result: Result<RunSummary, ReminderError>,
    pause: bool,
    input: &mut impl BufRead,
    err: &mut impl Write,
) -> i32 {
    let code = match result {
        Ok(_) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            let _ = err.flush();
            1
        }
    };

    if pause {
        let mut line = String::new();
        let _ = input.read_line(&mut line);
    }
    code
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&cli, &mut out);
    drop(out);

    let code = finish(result, cli.pause, &mut io::stdin().lock(), &mut io::stderr());
    process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unknown_tag() -> ReminderError {
        ReminderError::UnknownKind {
            tag: "x".to_string(),
            line: 2,
        }
    }

    #[test]
    fn test_finish_success() {
        let mut input: &[u8] = b"";
        let mut err = Vec::new();
        assert_eq!(finish(Ok(RunSummary::default()), false, &mut input, &mut err), 0);
        assert!(err.is_empty());
    }

    #[test]
    fn test_finish_prints_error_and_pauses() {
        let mut input: &[u8] = b"\nleft over";
        let mut err = Vec::new();
        assert_eq!(finish(Err(unknown_tag()), true, &mut input, &mut err), 1);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: Line 2: unknown reminder type \"x\"\n"
        );
        // exactly one line was consumed by the pause
        assert_eq!(input, b"left over");
    }

    #[test]
    fn test_finish_without_pause_leaves_input() {
        let mut input: &[u8] = b"\n";
        let mut err = Vec::new();
        assert_eq!(finish(Err(unknown_tag()), false, &mut input, &mut err), 1);
        assert_eq!(input, b"\n");
    }
}
