//! Schedule assembly -- combines interval dates, day-after windows, holidays, and
//! the year-end special dates into one entry per date.
//!
//! Rules are applied in priority order into a date-keyed map:
//!
//! 1. Interval dates get `<anchor>-00:00` (e.g. `08:00-00:00`).
//! 2. The in-year day after an interval date (unless itself an interval date) gets
//!    the window of its [`DayWindow`] category.
//! 3. Holidays that are neither interval dates nor the day after one get `x`.
//! 4. Dec 24 and Dec 31, unless interval dates, are overwritten with `00:00-12:00`
//!    when they follow an interval date, and `08:00-12:00` otherwise.
//!
//! Steps 1-3 only claim dates that are still free; step 4 is last-write-wins.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::classify::classify_day_after;
use crate::error::{Result, ScheduleError};
use crate::holidays::{HolidayProvider, HolidaySet};
use crate::interval::{default_anchor_time, interval_dates_with, DEFAULT_INTERVAL_DAYS};

/// Label for holidays not covered by an interval rule.
pub const HOLIDAY_MARKER: &str = "x";

/// Label for Dec 24 / Dec 31 when the previous day is an interval date.
pub const YEAR_END_AFTER_INTERVAL: &str = "00:00-12:00";

/// Label for Dec 24 / Dec 31 in every other case.
pub const YEAR_END_DEFAULT: &str = "08:00-12:00";

/// Parameters of the interval sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Days between consecutive interval dates.
    pub interval_days: u32,
    /// Time of day of the Jan 1 anchor, rendered into the interval label.
    pub anchor_time: NaiveTime,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_days: DEFAULT_INTERVAL_DAYS,
            anchor_time: default_anchor_time(),
        }
    }
}

impl ScheduleConfig {
    /// The label of an interval date, e.g. `08:00-00:00`.
    pub fn interval_label(&self) -> String {
        format!("{}-00:00", self.anchor_time.format("%H:%M"))
    }
}

/// A date with its time-window or marker label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub label: String,
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date.format("%Y-%m-%d"), self.label)
    }
}

/// The computed schedule of one year, sorted by date with one entry per date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub year: i32,
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.entries
            .binary_search_by_key(&date, |entry| entry.date)
            .ok()
            .map(|idx| self.entries[idx].label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the report line: `YYYY-MM-DD: <label>` tokens joined by `", "`.
    pub fn to_line(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

/// Build the schedule of `year` with the default 11-day interval and 08:00 anchor.
///
/// The provider is queried once, before any date is classified.
///
/// # Errors
/// Propagates the provider's error (typically `ScheduleError::HolidayDataUnavailable`)
/// and any error from interval expansion.
pub fn build_schedule<P>(year: i32, provider: &P) -> Result<Schedule>
where
    P: HolidayProvider + ?Sized,
{
    build_schedule_with(year, provider, &ScheduleConfig::default())
}

/// Build the schedule of `year` for an explicit [`ScheduleConfig`].
pub fn build_schedule_with<P>(year: i32, provider: &P, config: &ScheduleConfig) -> Result<Schedule>
where
    P: HolidayProvider + ?Sized,
{
    let holidays = provider.holidays(year)?;
    let intervals = interval_dates_with(year, config.interval_days, config.anchor_time)?;
    debug!(
        year,
        intervals = intervals.len(),
        holidays = holidays.len(),
        "building schedule"
    );

    let entries = assemble(year, &intervals, &holidays, config)?;
    debug!(year, entries = entries.len(), "schedule built");

    Ok(Schedule {
        year,
        entries: entries
            .into_iter()
            .map(|(date, label)| ScheduleEntry { date, label })
            .collect(),
    })
}

/// Apply the precedence rules over already-resolved inputs.
fn assemble(
    year: i32,
    intervals: &BTreeSet<NaiveDate>,
    holidays: &HolidaySet,
    config: &ScheduleConfig,
) -> Result<BTreeMap<NaiveDate, String>> {
    let mut entries: BTreeMap<NaiveDate, String> = BTreeMap::new();
    let follows_interval =
        |date: NaiveDate| date.pred_opt().is_some_and(|prev| intervals.contains(&prev));

    let interval_label = config.interval_label();
    for &date in intervals {
        trace!(%date, label = %interval_label, "interval date");
        entries.insert(date, interval_label.clone());
    }

    // The day after Dec 31-ish interval dates rolls into the next year and is dropped.
    for &date in intervals {
        let Some(day_after) = date.succ_opt() else {
            continue;
        };
        if day_after.year() != year || intervals.contains(&day_after) {
            continue;
        }
        if let Entry::Vacant(slot) = entries.entry(day_after) {
            let window = classify_day_after(day_after, holidays);
            trace!(date = %day_after, ?window, "day after interval date");
            slot.insert(window.label().to_string());
        }
    }

    for date in holidays.dates() {
        if date.year() != year || intervals.contains(&date) || follows_interval(date) {
            continue;
        }
        if let Entry::Vacant(slot) = entries.entry(date) {
            trace!(%date, "holiday");
            slot.insert(HOLIDAY_MARKER.to_string());
        }
    }

    for (month, day) in [(12, 24), (12, 31)] {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(ScheduleError::InvalidYear(year))?;
        if intervals.contains(&date) {
            continue;
        }
        let label = if follows_interval(date) {
            YEAR_END_AFTER_INTERVAL
        } else {
            YEAR_END_DEFAULT
        };
        trace!(%date, label, "year-end special date");
        entries.insert(date, label.to_string());
    }

    Ok(entries)
}
