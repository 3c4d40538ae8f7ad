mod config;
mod generate;
mod logging;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use mkical_core::MkicalError;
use owo_colors::OwoColorize;

use config::{FileConfig, Settings};

/// Exit code for failures other than the two range checks.
const GENERAL_FAILURE: u8 = 3;

#[derive(Parser)]
#[command(name = "mkical", version)]
#[command(about = "Generate an iCalendar countdown of monthly all-day events")]
struct Cli {
    /// Name of the calendar (default "Mortgage Countdown")
    #[arg(long)]
    name: Option<String>,

    /// Number of monthly events, 0-500 (default 42)
    #[arg(long, allow_negative_numbers = true)]
    months: Option<i64>,

    /// Day of month for every event, 1-28; 0 means today's day of month
    #[arg(long, allow_negative_numbers = true)]
    dom: Option<i64>,

    /// Description template (defaults to the summary)
    #[arg(long)]
    desctmpl: Option<String>,

    /// Summary template (default "{remaining} months remaining on mortgage")
    #[arg(long)]
    summary: Option<String>,

    /// Location of each event (default "Home")
    #[arg(long)]
    location: Option<String>,

    /// First month of the countdown as YYYY-MM (defaults to the current month)
    #[arg(long)]
    start: Option<String>,

    /// Add a reminder this many minutes before each event
    #[arg(long, value_name = "MINUTES")]
    alarm: Option<u32>,

    /// IANA timezone used to determine today's date (e.g., "Europe/Berlin")
    #[arg(long)]
    timezone: Option<String>,

    /// Domain part of generated event UIDs
    #[arg(long)]
    uid_domain: Option<String>,

    /// Config file (defaults to ~/.config/mkical/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("{err:#}").red());
            let code = err
                .downcast_ref::<MkicalError>()
                .map(MkicalError::exit_code)
                .unwrap_or(GENERAL_FAILURE);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, file)?;

    let ics = generate::render(&settings, Utc::now())?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(ics.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Could not write calendar to stdout")?;

    Ok(())
}
