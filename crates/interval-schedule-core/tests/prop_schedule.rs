//! Property-based tests for interval expansion and schedule assembly using proptest.
//!
//! These tests verify invariants that should hold for *any* supported year and
//! holiday set, not just the specific examples in `schedule_tests.rs`.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use interval_schedule_core::schedule::{HOLIDAY_MARKER, YEAR_END_AFTER_INTERVAL, YEAR_END_DEFAULT};
use interval_schedule_core::{build_schedule, interval_dates, Austria, HolidaySet, Result};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_year() -> impl Strategy<Value = i32> {
    1950i32..=2099
}

/// A year together with a synthetic holiday set drawn from its days.
fn arb_year_and_holidays() -> impl Strategy<Value = (i32, HolidaySet)> {
    (arb_year(), prop::collection::btree_set(1u32..=365, 0..30)).prop_map(|(year, ordinals)| {
        let holidays = ordinals
            .into_iter()
            .filter_map(|ordinal| NaiveDate::from_yo_opt(year, ordinal))
            .map(|date| (date, "Synthetic"))
            .collect();
        (year, holidays)
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn jan_1(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
}

fn days_in_year(year: i32) -> i64 {
    (jan_1(year + 1) - jan_1(year)).num_days()
}

fn day_after_label(date: NaiveDate, holidays: &HolidaySet) -> &'static str {
    if date.weekday() == Weekday::Sun || holidays.contains(date) {
        "00:00-08:00"
    } else if date.weekday() == Weekday::Sat {
        "00:00-12:00"
    } else {
        "00:00-18:00"
    }
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Interval dates are in-year, 11 days apart, starting Jan 1
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn interval_dates_are_eleven_days_apart(year in arb_year()) {
        let dates: Vec<NaiveDate> = interval_dates(year).unwrap().into_iter().collect();

        prop_assert_eq!(dates[0], jan_1(year));
        for date in &dates {
            prop_assert_eq!(date.year(), year);
            prop_assert_eq!((*date - jan_1(year)).num_days() % 11, 0);
        }
        for pair in dates.windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).num_days(), 11);
        }

        // ceil(days / 11), and the next step would leave the year.
        let expected = (days_in_year(year) + 10) / 11;
        prop_assert_eq!(dates.len() as i64, expected);
        let next = *dates.last().unwrap() + Duration::days(11);
        prop_assert_ne!(next.year(), year);
    }
}

// ---------------------------------------------------------------------------
// Property 2: One entry per date, sorted ascending, all in-year
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn entries_are_unique_and_sorted((year, holidays) in arb_year_and_holidays()) {
        let schedule = build_schedule(year, &|_: i32| -> Result<HolidaySet> { Ok(holidays.clone()) }).unwrap();

        for pair in schedule.entries.windows(2) {
            prop_assert!(pair[0].date < pair[1].date, "{} !< {}", pair[0].date, pair[1].date);
        }
        prop_assert!(schedule.iter().all(|entry| entry.date.year() == year));
    }
}

// ---------------------------------------------------------------------------
// Property 3: Every rule is reflected in the output
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn rules_hold_for_any_holiday_set((year, holidays) in arb_year_and_holidays()) {
        let schedule = build_schedule(year, &|_: i32| -> Result<HolidaySet> { Ok(holidays.clone()) }).unwrap();
        let intervals: BTreeSet<NaiveDate> = interval_dates(year).unwrap();
        let dec_24 = NaiveDate::from_ymd_opt(year, 12, 24).unwrap();
        let dec_31 = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        let special = |d: NaiveDate| d == dec_24 || d == dec_31;

        for &date in &intervals {
            prop_assert_eq!(schedule.get(date), Some("08:00-00:00"));

            let day_after = date + Duration::days(1);
            if day_after.year() == year && !intervals.contains(&day_after) && !special(day_after) {
                prop_assert_eq!(schedule.get(day_after), Some(day_after_label(day_after, &holidays)));
            }
        }

        for date in holidays.dates() {
            let after_interval = intervals.contains(&(date - Duration::days(1)));
            if !intervals.contains(&date) && !after_interval && !special(date) {
                prop_assert_eq!(schedule.get(date), Some(HOLIDAY_MARKER));
            }
        }

        for date in [dec_24, dec_31] {
            let expected = if intervals.contains(&date) {
                "08:00-00:00"
            } else if intervals.contains(&(date - Duration::days(1))) {
                YEAR_END_AFTER_INTERVAL
            } else {
                YEAR_END_DEFAULT
            };
            prop_assert_eq!(schedule.get(date), Some(expected));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Only claimed dates appear
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_unclaimed_dates((year, holidays) in arb_year_and_holidays()) {
        let schedule = build_schedule(year, &|_: i32| -> Result<HolidaySet> { Ok(holidays.clone()) }).unwrap();
        let intervals = interval_dates(year).unwrap();

        for entry in schedule.iter() {
            let date = entry.date;
            let claimed = intervals.contains(&date)
                || intervals.contains(&(date - Duration::days(1)))
                || holidays.contains(date)
                || (date.month() == 12 && (date.day() == 24 || date.day() == 31));
            prop_assert!(claimed, "unexpected entry {}", entry);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Austrian reports are deterministic
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn austrian_report_is_idempotent(year in arb_year()) {
        let first = build_schedule(year, &Austria).unwrap().to_line();
        let second = build_schedule(year, &Austria).unwrap().to_line();
        prop_assert_eq!(first, second);
    }
}
