//! Python bindings (feature `pyo3`)
//!
//! ```python
//! from charter_fare_core import calculate_fare
//!
//! fare = calculate_fare({
//!     "total_distance": 230,
//!     "departure_time": "2024-07-01T01:00:00",
//!     "return_time": "2024-07-02T10:00:00",
//!     "bus_size": "large",
//!     "bus_count": 2,
//!     "departure_bureau": "北海道運輸局",
//! })
//! print(fare["total_fare"])  # 1479632
//! ```

pub mod types;

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::fare::FareCalculator;
use crate::tariff::TariffTable;
use types::{breakdown_to_py, parse_tariff_table, parse_trip_request, tariff_table_to_py, value_error};

/// Price a trip
///
/// # Arguments
/// * `trip` - Dict with the trip fields
/// * `tariffs` - Optional `bureau -> rates` dict; the built-in table when omitted
///
/// # Errors
/// Raises ValueError for malformed dicts, unknown bureaus, or invalid trips.
#[pyfunction]
#[pyo3(signature = (trip, tariffs = None))]
pub fn calculate_fare<'py>(
    py: Python<'py>,
    trip: &Bound<'py, PyDict>,
    tariffs: Option<&Bound<'py, PyDict>>,
) -> PyResult<Bound<'py, PyDict>> {
    let request = parse_trip_request(trip)?;
    let table = match tariffs {
        Some(dict) => parse_tariff_table(dict)?,
        None => TariffTable::builtin(),
    };

    let breakdown = FareCalculator::new(&table)
        .calculate(&request)
        .map_err(value_error)?;

    breakdown_to_py(py, &breakdown)
}

/// The built-in tariff table as a dict
#[pyfunction]
pub fn builtin_tariffs(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    tariff_table_to_py(py, &TariffTable::builtin())
}
