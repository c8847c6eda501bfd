//! Interval date expansion -- every Nth day from the Jan 1 anchor of a year.
//!
//! The interval sequence is expressed as a daily RFC 5545 recurrence
//! (`FREQ=DAILY;INTERVAL=n`) starting at the anchor and bounded by the last second
//! of the year, then expanded with the `rrule` crate. Anchors are evaluated in UTC,
//! so there is no DST shift between instances and every instance keeps the anchor
//! wall-clock time.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Timelike, Utc};
use rrule::RRuleSet;
use tracing::debug;

use crate::error::{Result, ScheduleError};

/// Spacing between interval dates, in days.
pub const DEFAULT_INTERVAL_DAYS: u32 = 11;

/// Time of day of the Jan 1 anchor (08:00).
pub fn default_anchor_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default()
}

/// Compute the interval dates of `year` with the default 11-day spacing.
///
/// Returns every date of the form `Jan 1 + 11k` (k >= 0) that lies in `year`,
/// in ascending order.
pub fn interval_dates(year: i32) -> Result<BTreeSet<NaiveDate>> {
    interval_dates_with(year, DEFAULT_INTERVAL_DAYS, default_anchor_time())
}

/// Compute the interval dates of `year` for an arbitrary spacing and anchor time.
///
/// # Errors
/// Returns `ScheduleError::InvalidYear` if `year` is outside 1..=9999.
/// Returns `ScheduleError::InvalidInterval` if `interval_days` is zero.
/// Returns `ScheduleError::InvalidRule` if the recurrence fails to parse.
pub fn interval_dates_with(
    year: i32,
    interval_days: u32,
    anchor_time: NaiveTime,
) -> Result<BTreeSet<NaiveDate>> {
    if !(1..=9999).contains(&year) {
        return Err(ScheduleError::InvalidYear(year));
    }
    if interval_days == 0 {
        return Err(ScheduleError::InvalidInterval(interval_days));
    }

    // UNTIL is inclusive, so the last second of Dec 31 keeps the sequence in-year.
    let rrule_text = format!(
        "DTSTART;TZID=UTC:{:04}0101T{:02}{:02}{:02}\nRRULE:FREQ=DAILY;INTERVAL={};UNTIL={:04}1231T235959Z",
        year,
        anchor_time.hour(),
        anchor_time.minute(),
        anchor_time.second(),
        interval_days,
        year,
    );

    let rrule_set: RRuleSet = rrule_text
        .parse()
        .map_err(|e| ScheduleError::InvalidRule(format!("{}", e)))?;

    // A year has at most 366 days, so this limit never truncates the expansion.
    let max_count = (366 / interval_days + 1) as u16;

    let dates: BTreeSet<NaiveDate> = rrule_set
        .all(max_count)
        .dates
        .into_iter()
        .map(|dt| dt.date_naive())
        .take_while(|date| date.year() == year)
        .collect();

    debug!(year, interval_days, count = dates.len(), "expanded interval dates");

    Ok(dates)
}

/// The current year according to the system clock.
///
/// Without a timezone the local system time is used. With an IANA timezone name
/// (e.g. "Europe/Vienna") the current instant is converted into that zone first.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` if the timezone is not a valid IANA identifier.
pub fn current_year(timezone: Option<&str>) -> Result<i32> {
    match timezone {
        Some(name) => year_in_timezone(Utc::now(), name),
        None => Ok(Local::now().year()),
    }
}

/// The calendar year of instant `now` as observed in `timezone`.
pub fn year_in_timezone(now: DateTime<Utc>, timezone: &str) -> Result<i32> {
    let tz: chrono_tz::Tz = timezone
        .parse()
        .map_err(|_| ScheduleError::InvalidTimezone(timezone.to_string()))?;
    Ok(now.with_timezone(&tz).year())
}
