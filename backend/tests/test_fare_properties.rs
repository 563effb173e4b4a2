//! Property tests for the fare formulas

use charter_fare_core::fare::{
    distance_fare, replacement_driver_fare, time_fare, REPLACEMENT_DRIVER_DISTANCE_KM,
    REPLACEMENT_DRIVER_HOURS,
};
use charter_fare_core::core::time::night_hours;
use charter_fare_core::{
    rounded_distance, BusSize, FareCalculator, TariffEntry, TariffTable, TripRequest,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

proptest! {
    #[test]
    fn rounded_distance_is_a_ten_km_band_covering_the_distance(d in 0.0f64..100_000.0) {
        let r = rounded_distance(d);
        prop_assert_eq!(r % 10, 0);
        prop_assert!(r >= 10);
        // Float division can land a hair below a band edge
        prop_assert!((r as f64) >= d - 1e-9 * d.max(1.0));
        prop_assert!((r as f64) < d.max(10.0) + 10.0);
    }

    #[test]
    fn distance_fare_is_monotonic(a in 0.0f64..5_000.0, b in 0.0f64..5_000.0, rate in 1i64..1_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(distance_fare(lo, rate).unwrap() <= distance_fare(hi, rate).unwrap());
    }

    #[test]
    fn time_fare_is_monotonic(a in 0.01f64..200.0, b in 0.01f64..200.0, rate in 1i64..10_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(time_fare(lo, rate).unwrap() <= time_fare(hi, rate).unwrap());
    }

    #[test]
    fn replacement_driver_zero_iff_within_thresholds(
        d in 0.0f64..1_000.0,
        h in 0.01f64..40.0,
        rate in 1i64..5_000,
    ) {
        let fare = replacement_driver_fare(d, h, rate).unwrap();
        if h <= REPLACEMENT_DRIVER_HOURS && d <= REPLACEMENT_DRIVER_DISTANCE_KM {
            prop_assert_eq!(fare, 0);
        } else {
            prop_assert!(fare > 0);
        }
    }

    #[test]
    fn night_hours_bounded(minutes in 0i64..(60 * 24 * 14)) {
        let t = base_time() + Duration::minutes(minutes);
        prop_assert!(night_hours(t) <= 5);
    }

    #[test]
    fn total_scales_with_bus_count(
        d in 0.0f64..1_500.0,
        start_min in 0i64..(60 * 24),
        len_min in 1i64..(60 * 48),
        buses in 1u32..20,
    ) {
        let table = TariffTable::builtin();
        let calculator = FareCalculator::new(&table);
        let departure = base_time() + Duration::minutes(start_min);
        let back = departure + Duration::minutes(len_min);

        let single = TripRequest::new(d, departure, back, BusSize::Large, 1, "北海道運輸局");
        let mut fleet = single.clone();
        fleet.bus_count = buses;

        let one = calculator.calculate(&single).unwrap();
        let many = calculator.calculate(&fleet).unwrap();
        prop_assert_eq!(many.total_fare, i64::from(buses) * one.total_fare);
    }

    #[test]
    fn components_never_negative_for_valid_trips(
        d in 0.0f64..1_500.0,
        start_min in 0i64..(60 * 24),
        len_min in 1i64..(60 * 72),
        distance_rate in 1i64..500,
        time_rate in 1i64..10_000,
        driver_rate in 1i64..5_000,
        increase in 1.0f64..2.0,
    ) {
        let table = TariffTable::new([(
            "X",
            TariffEntry::new(distance_rate, time_rate, driver_rate, increase),
        )])
        .unwrap();
        let departure = base_time() + Duration::minutes(start_min);
        let trip = TripRequest::new(
            d, departure, departure + Duration::minutes(len_min), BusSize::Medium, 1, "X",
        );

        let fare = FareCalculator::new(&table).calculate(&trip).unwrap();
        prop_assert!(fare.distance_fare > 0);
        prop_assert!(fare.time_fare > 0);
        prop_assert!(fare.replacement_driver_fare >= 0);
        prop_assert!(fare.night_fare >= 0);
        prop_assert_eq!(fare.total_fare, fare.per_bus_total());
    }
}
