//! Input validation tests
//!
//! Invalid trips fail with `FareError::InvalidInput` instead of producing
//! negative or zero fares.

use charter_fare_core::{
    calculate_breakdown, BusSize, FareError, InvalidInputError, TariffEntry, TripRequest,
};
use chrono::{NaiveDate, NaiveDateTime};

fn ts(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn entry() -> TariffEntry {
    TariffEntry::new(140, 5570, 1890, 1.2)
}

fn valid_trip() -> TripRequest {
    TripRequest::new(100.0, ts(1, 8), ts(1, 18), BusSize::Large, 1, "北海道運輸局")
}

#[test]
fn test_valid_trip_passes() {
    assert_eq!(valid_trip().validate(), Ok(()));
    assert!(calculate_breakdown(&valid_trip(), &entry()).is_ok());
}

#[test]
fn test_zero_distance_is_valid() {
    let mut trip = valid_trip();
    trip.total_distance = 0.0;
    assert_eq!(trip.validate(), Ok(()));
}

#[test]
fn test_negative_distance_rejected() {
    let mut trip = valid_trip();
    trip.total_distance = -0.5;
    assert_eq!(
        calculate_breakdown(&trip, &entry()),
        Err(FareError::InvalidInput(InvalidInputError::NegativeDistance {
            distance: -0.5
        }))
    );
}

#[test]
fn test_non_finite_distance_rejected() {
    for distance in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut trip = valid_trip();
        trip.total_distance = distance;
        assert_eq!(trip.validate(), Err(InvalidInputError::NonFiniteDistance));
    }
}

#[test]
fn test_zero_bus_count_rejected() {
    let mut trip = valid_trip();
    trip.bus_count = 0;
    assert_eq!(trip.validate(), Err(InvalidInputError::ZeroBusCount));
}

#[test]
fn test_return_at_departure_rejected() {
    let mut trip = valid_trip();
    trip.return_time = trip.departure_time;
    assert!(matches!(
        trip.validate(),
        Err(InvalidInputError::NonPositiveDuration { .. })
    ));
}

#[test]
fn test_return_before_departure_rejected() {
    let mut trip = valid_trip();
    trip.return_time = ts(1, 6);
    let err = calculate_breakdown(&trip, &entry()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid trip: Return time 2024-07-01 06:00:00 must be after departure time 2024-07-01 08:00:00"
    );
}
