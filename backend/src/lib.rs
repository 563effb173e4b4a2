//! Charter Fare Core - Rust Engine
//!
//! Regulated charter-bus fare calculation from a trip description and the
//! tariff published by the departure transport bureau.
//!
//! # Architecture
//!
//! - **core**: Wall-clock time helpers (elapsed hours, night hours)
//! - **models**: Domain types (TripRequest, BusSize)
//! - **tariff**: Rate entries and the read-only tariff table
//! - **fare**: Rounding rules, fare components and the calculator
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (minor currency units)
//! 2. Calculation is pure: same trip + tariff always yields the same breakdown
//! 3. A calculation returns a complete breakdown or fails with one error

// Module declarations
pub mod core;
pub mod fare;
pub mod models;
pub mod tariff;

// Re-exports for convenience
pub use fare::{
    calculate_breakdown, rounded_distance, rounded_hours, FareBreakdown, FareCalculator,
    FareComponent, FareError,
};
pub use models::trip::{BusSize, InvalidInputError, TripRequest};
pub use tariff::{TariffEntry, TariffError, TariffLookup, TariffTable};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn charter_fare_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::calculate_fare, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::builtin_tariffs, m)?)?;
    Ok(())
}
