//! Fare calculation
//!
//! The four fare components are computed for a single bus and then scaled by
//! the number of buses:
//!
//! ```text
//! total = (distance + time + replacement_driver + night) × bus_count
//! ```
//!
//! See `calculator.rs` for the component formulas and `rounding.rs` for the
//! billing units.

pub mod breakdown;
pub mod calculator;
pub mod rounding;

// Re-exports
pub use breakdown::{FareBreakdown, FareComponent, TOTAL_FARE_LABEL};
pub use calculator::{
    calculate_breakdown, distance_fare, night_fare, replacement_driver_fare,
    requires_replacement_driver, time_fare, FareCalculator, FareError,
    REPLACEMENT_DRIVER_DISTANCE_KM, REPLACEMENT_DRIVER_HOURS,
};
pub use rounding::{
    checked_rounded_distance, checked_rounded_hours, rounded_distance, rounded_hours,
    DISTANCE_UNIT_KM, MIN_BILLABLE_DISTANCE_KM,
};
