//! `interval-schedule` CLI — print the yearly interval schedule for Austria.
//!
//! ## Usage
//!
//! ```sh
//! # Schedule for the current year (system clock, local time)
//! interval-schedule
//!
//! # Schedule for an explicit year
//! interval-schedule --year 2025
//!
//! # Current year as observed in Vienna
//! interval-schedule --timezone Europe/Vienna
//!
//! # Weekly interval anchored at 06:30, as JSON
//! interval-schedule --interval-days 7 --anchor-time 06:30 --format json
//!
//! # Debug logging on stderr
//! interval-schedule -vv
//! ```

mod logging;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Parser, ValueEnum};
use interval_schedule_core::interval::{default_anchor_time, DEFAULT_INTERVAL_DAYS};
use interval_schedule_core::{build_schedule_with, current_year, Austria, ScheduleConfig};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "interval-schedule",
    version,
    about = "Eleven-day interval schedule with Austrian public holidays"
)]
struct Cli {
    /// Target year (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// IANA timezone used to determine the current year (e.g. Europe/Vienna)
    #[arg(long, conflicts_with = "year")]
    timezone: Option<String>,

    /// Days between interval dates
    #[arg(long, default_value_t = DEFAULT_INTERVAL_DAYS)]
    interval_days: u32,

    /// Time of day of the Jan 1 anchor (HH:MM)
    #[arg(long, value_parser = parse_anchor_time)]
    anchor_time: Option<NaiveTime>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Single line of `YYYY-MM-DD: <label>` tokens
    Text,
    /// JSON array of `{date, label}` objects
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let year = match cli.year {
        Some(year) => year,
        None => current_year(cli.timezone.as_deref()).context("Failed to determine current year")?,
    };

    let config = ScheduleConfig {
        interval_days: cli.interval_days,
        anchor_time: cli.anchor_time.unwrap_or_else(default_anchor_time),
    };
    info!(year, interval_days = config.interval_days, "computing schedule");

    let schedule = build_schedule_with(year, &Austria, &config)
        .with_context(|| format!("Failed to build schedule for {}", year))?;

    match cli.format {
        Format::Text => println!("{}", schedule.to_line()),
        Format::Json => {
            let json = serde_json::to_string_pretty(&schedule.entries)
                .context("Failed to serialize schedule to JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn parse_anchor_time(raw: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|e| format!("expected HH:MM, got '{}': {}", raw, e))
}
