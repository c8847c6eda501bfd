//! # interval-schedule-core
//!
//! Yearly schedule of eleven-day interval dates combined with Austrian public holidays.
//!
//! Every 11th day from Jan 1 (08:00) is an interval date. The day after an interval
//! date gets a time window based on its weekday and holiday status, the remaining
//! holidays are marked, and Dec 24 / Dec 31 carry their own year-end windows.
//!
//! ## Modules
//!
//! - [`interval`] — Interval date expansion via a daily recurrence rule
//! - [`holidays`] — Holiday sets, the provider capability, and the Austrian calendar
//! - [`classify`] — Time-window classification for the day after an interval date
//! - [`schedule`] — Rule precedence, assembly, and report rendering
//! - [`error`] — Error types

pub mod classify;
pub mod error;
pub mod holidays;
pub mod interval;
pub mod schedule;

pub use classify::{classify_day_after, DayWindow};
pub use error::{Result, ScheduleError};
pub use holidays::{Austria, HolidayProvider, HolidaySet};
pub use interval::{current_year, interval_dates, interval_dates_with};
pub use schedule::{build_schedule, build_schedule_with, Schedule, ScheduleConfig, ScheduleEntry};
