//! Fare Calculator
//!
//! Pure functions for each fare component plus [`FareCalculator`], which
//! resolves the bureau tariff and assembles a [`FareBreakdown`].
//!
//! # Formulas (per bus)
//!
//! - distance: `rounded_distance × distance_rate`
//! - time: `rounded_hours × time_rate`
//! - replacement driver (only when hours > 16 or distance > 500):
//!   `(rounded_distance + rounded_hours) × replacement_driver_rate`
//! - night: `night_hours × time_rate × night_rate_increase`, where night hours
//!   are taken from the departure and return instants only
//!
//! Every product is checked; a component returns `None` when its amount does
//! not fit in an i64, which surfaces as [`FareError::Overflow`].

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{debug, warn};

use super::breakdown::FareBreakdown;
use super::rounding::{checked_rounded_distance, checked_rounded_hours, to_units};
use crate::core::time::night_hours;
use crate::models::trip::{InvalidInputError, TripRequest};
use crate::tariff::{TariffEntry, TariffLookup};

/// Trips longer than this (hours) need a second driver
pub const REPLACEMENT_DRIVER_HOURS: f64 = 16.0;

/// Trips farther than this (km) need a second driver
pub const REPLACEMENT_DRIVER_DISTANCE_KM: f64 = 500.0;

/// Errors that fail a fare calculation
#[derive(Debug, Error, PartialEq)]
pub enum FareError {
    #[error("Unknown departure bureau: {0}")]
    UnknownBureau(String),

    #[error("Invalid trip: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Fare amount overflows: {0}")]
    Overflow(&'static str),
}

/// Distance-based fare for one bus
pub fn distance_fare(distance_km: f64, distance_rate: i64) -> Option<i64> {
    checked_rounded_distance(distance_km)?.checked_mul(distance_rate)
}

/// Time-based fare for one bus
pub fn time_fare(hours: f64, time_rate: i64) -> Option<i64> {
    checked_rounded_hours(hours)?.checked_mul(time_rate)
}

/// Whether the trip legally requires a replacement driver
///
/// Strict comparison on the unrounded values: exactly 16 h or 500 km does not
/// trigger the surcharge.
pub fn requires_replacement_driver(distance_km: f64, hours: f64) -> bool {
    hours > REPLACEMENT_DRIVER_HOURS || distance_km > REPLACEMENT_DRIVER_DISTANCE_KM
}

/// Replacement-driver surcharge for one bus (all or nothing)
pub fn replacement_driver_fare(distance_km: f64, hours: f64, rate: i64) -> Option<i64> {
    if !requires_replacement_driver(distance_km, hours) {
        return Some(0);
    }
    let by_distance = checked_rounded_distance(distance_km)?.checked_mul(rate)?;
    let by_hours = checked_rounded_hours(hours)?.checked_mul(rate)?;
    by_distance.checked_add(by_hours)
}

/// Night / early-morning surcharge for one bus
///
/// Rounded to the nearest minor unit since the multiplier is fractional.
pub fn night_fare(
    departure_time: NaiveDateTime,
    return_time: NaiveDateTime,
    time_rate: i64,
    night_rate_increase: f64,
) -> Option<i64> {
    let hours = night_hours(departure_time) + night_hours(return_time);
    to_units((f64::from(hours) * time_rate as f64 * night_rate_increase).round())
}

/// Price a trip against an already-resolved tariff entry
///
/// # Errors
/// - [`FareError::InvalidInput`] if the trip fails validation
/// - [`FareError::Overflow`] if any amount does not fit in an i64
pub fn calculate_breakdown(
    trip: &TripRequest,
    entry: &TariffEntry,
) -> Result<FareBreakdown, FareError> {
    trip.validate()?;

    let distance = trip.total_distance;
    let hours = trip.duration_hours();

    let distance_amount = distance_fare(distance, entry.distance_rate)
        .ok_or(FareError::Overflow("distance fare"))?;
    let time_amount =
        time_fare(hours, entry.time_rate).ok_or(FareError::Overflow("time fare"))?;
    let replacement_amount =
        replacement_driver_fare(distance, hours, entry.replacement_driver_rate)
            .ok_or(FareError::Overflow("replacement driver fare"))?;
    let night_amount = night_fare(
        trip.departure_time,
        trip.return_time,
        entry.time_rate,
        entry.night_rate_increase,
    )
    .ok_or(FareError::Overflow("night fare"))?;

    let breakdown = FareBreakdown::new(
        distance_amount,
        time_amount,
        replacement_amount,
        night_amount,
        trip.bus_count,
    )
    .ok_or(FareError::Overflow("total fare"))?;

    debug!(
        bureau = %trip.departure_bureau,
        distance_km = distance,
        hours,
        replacement_driver = breakdown.replacement_driver_fare > 0,
        per_bus = breakdown.per_bus_total(),
        total = breakdown.total_fare,
        "Fare calculated"
    );

    Ok(breakdown)
}

/// Fare calculator bound to a read-only tariff source
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use charter_fare_core::{BusSize, FareCalculator, TariffTable, TripRequest};
///
/// let tariffs = TariffTable::builtin();
/// let calculator = FareCalculator::new(&tariffs);
///
/// let depart = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(1, 0, 0).unwrap();
/// let back = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let trip = TripRequest::new(230.0, depart, back, BusSize::Large, 2, "北海道運輸局");
///
/// let fare = calculator.calculate(&trip).unwrap();
/// assert_eq!(fare.total_fare, 1_479_632);
/// ```
#[derive(Debug)]
pub struct FareCalculator<'t, L: TariffLookup + ?Sized> {
    tariffs: &'t L,
}

impl<'t, L: TariffLookup + ?Sized> FareCalculator<'t, L> {
    pub fn new(tariffs: &'t L) -> Self {
        Self { tariffs }
    }

    /// Resolve the departure bureau's tariff and price the trip
    ///
    /// # Errors
    /// - [`FareError::UnknownBureau`] if the bureau has no tariff
    /// - [`FareError::InvalidInput`] if the trip fails validation
    pub fn calculate(&self, trip: &TripRequest) -> Result<FareBreakdown, FareError> {
        let entry = self.tariffs.lookup(&trip.departure_bureau).map_err(|e| {
            warn!(bureau = %trip.departure_bureau, "No tariff for departure bureau");
            e
        })?;
        calculate_breakdown(trip, entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_replacement_driver_threshold_is_strict() {
        assert!(!requires_replacement_driver(500.0, 16.0));
        assert!(requires_replacement_driver(500.1, 1.0));
        assert!(requires_replacement_driver(10.0, 16.01));
        assert_eq!(replacement_driver_fare(500.0, 16.0, 1890), Some(0));
    }

    #[test]
    fn test_replacement_driver_uses_rounded_units() {
        // 501 km → 510, 3.2 h → 4
        assert_eq!(
            replacement_driver_fare(501.0, 3.2, 100),
            Some(510 * 100 + 4 * 100)
        );
    }

    #[test]
    fn test_night_fare_sums_both_endpoints() {
        // 23:00 → 1 h, 03:00 → 2 h
        assert_eq!(night_fare(at(1, 23), at(3, 3), 1000, 1.5), Some(4500));
        assert_eq!(night_fare(at(1, 8), at(1, 18), 1000, 1.5), Some(0));
    }

    #[test]
    fn test_night_fare_reference_value_is_exact() {
        assert_eq!(night_fare(at(1, 1), at(2, 10), 5570, 1.2), Some(26_736));
    }

    #[test]
    fn test_component_overflow_yields_none() {
        assert_eq!(distance_fare(1e17, 140), None);
        assert_eq!(distance_fare(1e19, 1), None);
        assert_eq!(time_fare(3.0, i64::MAX), None);
        assert_eq!(replacement_driver_fare(600.0, 2.0, i64::MAX / 100), None);
        assert_eq!(night_fare(at(1, 1), at(2, 10), i64::MAX, 1.2), None);
    }

    #[test]
    fn test_calculate_breakdown_rejects_invalid_trip() {
        let entry = TariffEntry::new(140, 5570, 1890, 1.2);
        let trip = TripRequest::new(
            100.0,
            at(1, 10),
            at(1, 10),
            crate::models::trip::BusSize::Medium,
            1,
            "any",
        );
        assert!(matches!(
            calculate_breakdown(&trip, &entry),
            Err(FareError::InvalidInput(
                InvalidInputError::NonPositiveDuration { .. }
            ))
        ));
    }
}
