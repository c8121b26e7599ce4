//! CLI tool to list birthday and anniversary jubilees for a year.

use clap::Parser;
use jubilee::execute_jubilees;
use log::info;
use remindme::read_file;
use std::io;
use std::path::PathBuf;
use std::process;

/// List birthdays and anniversaries whose age in a year is a multiple of five.
#[derive(Parser)]
#[command(name = "jubilee")]
struct Cli {
    /// Record file (comma-delimited: kind, date, label[, lead days])
    records: PathBuf,

    /// Year to compute ages for
    reference_year: i32,

    /// Log per-row decisions and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let input_text = match read_file(&cli.records) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    info!("Records: {}", cli.records.display());
    info!("Year:    {}", cli.reference_year);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = execute_jubilees(&input_text, cli.reference_year, &mut out) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
