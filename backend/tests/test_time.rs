//! Tests for wall-clock time helpers
//!
//! Night hours are read from the hour-of-day of a single instant; elapsed
//! hours come from the full timestamp difference.

use charter_fare_core::core::time::{elapsed_hours, night_hours, NIGHT_END_HOUR, NIGHT_START_HOUR};
use chrono::{NaiveDate, NaiveDateTime};

fn ts(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn test_night_window_boundaries() {
    assert_eq!(NIGHT_START_HOUR, 22);
    assert_eq!(NIGHT_END_HOUR, 5);

    assert_eq!(night_hours(ts(1, 22, 0)), 2);
    assert_eq!(night_hours(ts(1, 23, 0)), 1);
    assert_eq!(night_hours(ts(1, 0, 0)), 5);
    assert_eq!(night_hours(ts(1, 4, 0)), 1);
    assert_eq!(night_hours(ts(1, 5, 0)), 0);
}

#[test]
fn test_daytime_contributes_nothing() {
    for hour in 5..22 {
        assert_eq!(night_hours(ts(1, hour, 30)), 0, "hour {}", hour);
    }
}

#[test]
fn test_minutes_do_not_shift_the_window() {
    // Same hour bucket regardless of minutes
    assert_eq!(night_hours(ts(1, 21, 59)), 0);
    assert_eq!(night_hours(ts(1, 22, 59)), 2);
    assert_eq!(night_hours(ts(1, 1, 0)), night_hours(ts(1, 1, 59)));
}

#[test]
fn test_night_hours_independent_of_date() {
    assert_eq!(night_hours(ts(1, 2, 0)), night_hours(ts(28, 2, 0)));
}

#[test]
fn test_elapsed_hours_fractional() {
    assert_eq!(elapsed_hours(ts(1, 8, 0), ts(1, 8, 15)), 0.25);
    assert_eq!(elapsed_hours(ts(1, 8, 0), ts(1, 20, 45)), 12.75);
}

#[test]
fn test_elapsed_hours_multi_day() {
    assert_eq!(elapsed_hours(ts(1, 1, 0), ts(2, 10, 0)), 33.0);
    assert_eq!(elapsed_hours(ts(1, 6, 0), ts(4, 6, 0)), 72.0);
}

#[test]
fn test_elapsed_hours_zero_and_negative() {
    assert_eq!(elapsed_hours(ts(1, 9, 0), ts(1, 9, 0)), 0.0);
    assert!(elapsed_hours(ts(2, 9, 0), ts(1, 9, 0)) < 0.0);
}
