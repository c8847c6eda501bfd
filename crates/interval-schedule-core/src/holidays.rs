//! Public holiday sets and the providers that produce them.
//!
//! The schedule only asks whether a date is a holiday, so a [`HolidayProvider`] is
//! any capability mapping a year to a [`HolidaySet`]. The built-in provider is
//! [`Austria`]; tests and callers can pass a closure instead.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScheduleError};

/// Public holidays of one year, keyed by date with a descriptive label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    days: BTreeMap<NaiveDate, String>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holiday. An existing label for the same date is replaced.
    pub fn insert(&mut self, date: NaiveDate, label: impl Into<String>) {
        self.days.insert(date, label.into());
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn label(&self, date: NaiveDate) -> Option<&str> {
        self.days.get(&date).map(String::as_str)
    }

    /// Holiday dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> + '_ {
        self.days.iter().map(|(date, label)| (*date, label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(NaiveDate, L)> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, L)>>(iter: I) -> Self {
        let mut set = HolidaySet::new();
        for (date, label) in iter {
            set.insert(date, label);
        }
        set
    }
}

/// Source of public holidays for a given year.
pub trait HolidayProvider {
    /// All holidays falling in `year`.
    ///
    /// # Errors
    /// Returns `ScheduleError::HolidayDataUnavailable` when the provider has no data
    /// for `year`.
    fn holidays(&self, year: i32) -> Result<HolidaySet>;
}

impl<F> HolidayProvider for F
where
    F: Fn(i32) -> Result<HolidaySet>,
{
    fn holidays(&self, year: i32) -> Result<HolidaySet> {
        self(year)
    }
}

/// Austrian national public holidays.
///
/// * Neujahr (Jan 1)
/// * Heilige Drei Könige (Jan 6)
/// * Ostermontag (Easter Monday)
/// * Staatsfeiertag (May 1)
/// * Christi Himmelfahrt (Easter + 39)
/// * Pfingstmontag (Easter + 50)
/// * Fronleichnam (Easter + 60)
/// * Mariä Himmelfahrt (Aug 15)
/// * Nationalfeiertag (Nov 12 in 1919-1934, Oct 26 since 1967)
/// * Allerheiligen (Nov 1)
/// * Mariä Empfängnis (Dec 8)
/// * Christtag (Dec 25)
/// * Stefanitag (Dec 26)
#[derive(Debug, Clone, Copy, Default)]
pub struct Austria;

impl Austria {
    /// Years for which holiday data is available.
    pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=2099;
}

impl HolidayProvider for Austria {
    fn holidays(&self, year: i32) -> Result<HolidaySet> {
        if !Self::SUPPORTED_YEARS.contains(&year) {
            return Err(ScheduleError::HolidayDataUnavailable {
                year,
                reason: format!(
                    "Austrian holidays are only available for {}-{}",
                    Self::SUPPORTED_YEARS.start(),
                    Self::SUPPORTED_YEARS.end()
                ),
            });
        }

        let easter = easter_sunday(year).ok_or(ScheduleError::InvalidYear(year))?;
        let fixed = |month: u32, day: u32| {
            NaiveDate::from_ymd_opt(year, month, day).ok_or(ScheduleError::InvalidYear(year))
        };

        let mut set = HolidaySet::new();
        set.insert(fixed(1, 1)?, "Neujahr");
        set.insert(fixed(1, 6)?, "Heilige Drei Könige");
        set.insert(easter + Duration::days(1), "Ostermontag");
        set.insert(fixed(5, 1)?, "Staatsfeiertag");
        set.insert(easter + Duration::days(39), "Christi Himmelfahrt");
        set.insert(easter + Duration::days(50), "Pfingstmontag");
        set.insert(easter + Duration::days(60), "Fronleichnam");
        set.insert(fixed(8, 15)?, "Mariä Himmelfahrt");
        if (1919..=1934).contains(&year) {
            set.insert(fixed(11, 12)?, "Nationalfeiertag");
        }
        if year >= 1967 {
            set.insert(fixed(10, 26)?, "Nationalfeiertag");
        }
        set.insert(fixed(11, 1)?, "Allerheiligen");
        set.insert(fixed(12, 8)?, "Mariä Empfängnis");
        set.insert(fixed(12, 25)?, "Christtag");
        set.insert(fixed(12, 26)?, "Stefanitag");

        debug!(year, count = set.len(), "loaded Austrian holidays");
        Ok(set)
    }
}

/// Easter Sunday of `year` in the Gregorian calendar (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
