//! Wall-clock time helpers for fare calculation
//!
//! Timestamps are `NaiveDateTime` values interpreted as local time at the
//! departure bureau. Only two things are ever derived from them: the elapsed
//! trip duration in (fractional) hours, and the number of night hours an
//! individual instant contributes to the night/early-morning surcharge.

use chrono::{NaiveDateTime, Timelike};

/// First hour of the night window (22:00)
pub const NIGHT_START_HOUR: u32 = 22;

/// Hour at which the early-morning window closes (05:00)
pub const NIGHT_END_HOUR: u32 = 5;

const SECONDS_PER_HOUR: f64 = 3_600.0;
const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;

/// Elapsed time between two instants in fractional hours
///
/// Nanosecond precision, so any positive gap yields a positive result.
/// Negative when `end` precedes `start`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use charter_fare_core::core::time::elapsed_hours;
///
/// let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// let start = day.and_hms_opt(8, 0, 0).unwrap();
/// let end = day.and_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(elapsed_hours(start, end), 1.5);
/// ```
pub fn elapsed_hours(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let delta = end - start;
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_HOUR,
        // Beyond ~292 years; whole seconds are plenty
        None => delta.num_seconds() as f64 / SECONDS_PER_HOUR,
    }
}

/// Night hours contributed by a single instant
///
/// Only the hour-of-day is inspected; minutes and seconds are ignored, so
/// 21:59 contributes 0 and 22:00 contributes 2.
///
/// - 22:00-23:59 → hours remaining until midnight (`24 - hour`)
/// - 00:00-04:59 → hours remaining until 05:00 (`5 - hour`)
/// - otherwise → 0
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use charter_fare_core::core::time::night_hours;
///
/// let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// assert_eq!(night_hours(day.and_hms_opt(1, 0, 0).unwrap()), 4);
/// assert_eq!(night_hours(day.and_hms_opt(23, 45, 0).unwrap()), 1);
/// assert_eq!(night_hours(day.and_hms_opt(10, 0, 0).unwrap()), 0);
/// ```
pub fn night_hours(t: NaiveDateTime) -> u32 {
    match t.hour() {
        h if h >= NIGHT_START_HOUR => 24 - h,
        h if h < NIGHT_END_HOUR => NIGHT_END_HOUR - h,
        _ => 0,
    }
}
