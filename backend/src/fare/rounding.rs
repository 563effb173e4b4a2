//! Billing units
//!
//! Partial usage is always rounded up, never down.

/// Distance is billed in 10 km bands
pub const DISTANCE_UNIT_KM: f64 = 10.0;

/// Shorter trips are billed as this distance
pub const MIN_BILLABLE_DISTANCE_KM: f64 = 10.0;

/// Round a distance up to the next 10 km band, with 10 km as the floor
///
/// # Example
/// ```
/// use charter_fare_core::rounded_distance;
///
/// assert_eq!(rounded_distance(0.0), 10);
/// assert_eq!(rounded_distance(10.0), 10);
/// assert_eq!(rounded_distance(10.1), 20);
/// assert_eq!(rounded_distance(230.0), 230);
/// ```
pub fn rounded_distance(distance_km: f64) -> i64 {
    distance_band_km(distance_km) as i64
}

/// [`rounded_distance`], or `None` when the band does not fit in an i64
pub fn checked_rounded_distance(distance_km: f64) -> Option<i64> {
    to_units(distance_band_km(distance_km))
}

fn distance_band_km(distance_km: f64) -> f64 {
    let bands = (distance_km.max(MIN_BILLABLE_DISTANCE_KM) / DISTANCE_UNIT_KM).ceil();
    bands * DISTANCE_UNIT_KM
}

/// Round a duration up to whole hours; any started hour counts
///
/// # Example
/// ```
/// use charter_fare_core::rounded_hours;
///
/// assert_eq!(rounded_hours(33.0), 33);
/// assert_eq!(rounded_hours(8.01), 9);
/// ```
pub fn rounded_hours(hours: f64) -> i64 {
    hours.ceil() as i64
}

/// [`rounded_hours`], or `None` when the result does not fit in an i64
pub fn checked_rounded_hours(hours: f64) -> Option<i64> {
    to_units(hours.ceil())
}

/// Convert an integral f64 to i64 without saturating
///
/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
pub(crate) fn to_units(value: f64) -> Option<i64> {
    (value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64)
        .then_some(value as i64)
}
