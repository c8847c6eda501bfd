//! Time-window classification for the day after an interval date.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::holidays::HolidaySet;

/// Category of a day-after entry and its time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayWindow {
    /// Sunday or public holiday: 00:00-08:00.
    SundayOrHoliday,
    /// Saturday: 00:00-12:00.
    Saturday,
    /// Ordinary weekday: 00:00-18:00.
    Weekday,
}

impl DayWindow {
    pub fn label(self) -> &'static str {
        match self {
            DayWindow::SundayOrHoliday => "00:00-08:00",
            DayWindow::Saturday => "00:00-12:00",
            DayWindow::Weekday => "00:00-18:00",
        }
    }
}

impl fmt::Display for DayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify the day following an interval date.
///
/// Sundays and holidays come first, so a holiday on a Saturday is
/// `SundayOrHoliday`, not `Saturday`.
pub fn classify_day_after(date: NaiveDate, holidays: &HolidaySet) -> DayWindow {
    match date.weekday() {
        Weekday::Sun => DayWindow::SundayOrHoliday,
        _ if holidays.contains(date) => DayWindow::SundayOrHoliday,
        Weekday::Sat => DayWindow::Saturday,
        _ => DayWindow::Weekday,
    }
}
