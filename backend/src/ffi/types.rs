//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and Python dicts.

use std::fmt::Display;

use chrono::NaiveDateTime;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::fare::{FareBreakdown, FareComponent};
use crate::models::trip::{BusSize, TripRequest};
use crate::tariff::{TariffEntry, TariffTable};

pub(crate) fn value_error(err: impl Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Extract a required field from a Python dict with clear error messages.
fn extract_required<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<T>
where
    T: FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

fn extract_timestamp(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<NaiveDateTime> {
    let raw: String = extract_required(dict, key)?;
    raw.parse::<NaiveDateTime>()
        .map_err(|e| value_error(format!("Field '{}' is not an ISO timestamp: {}", key, e)))
}

/// Convert Python dict to TripRequest
///
/// `bus_size` defaults to `large` when missing.
pub fn parse_trip_request(dict: &Bound<'_, PyDict>) -> PyResult<TripRequest> {
    let bus_size = match dict.get_item("bus_size")? {
        Some(value) => value.extract::<String>()?.parse::<BusSize>().map_err(value_error)?,
        None => BusSize::Large,
    };

    Ok(TripRequest {
        total_distance: extract_required(dict, "total_distance")?,
        departure_time: extract_timestamp(dict, "departure_time")?,
        return_time: extract_timestamp(dict, "return_time")?,
        bus_size,
        bus_count: extract_required(dict, "bus_count")?,
        departure_bureau: extract_required(dict, "departure_bureau")?,
    })
}

/// Convert Python dict of `bureau -> rates dict` to TariffTable
pub fn parse_tariff_table(dict: &Bound<'_, PyDict>) -> PyResult<TariffTable> {
    let mut entries = Vec::with_capacity(dict.len());
    for (key, value) in dict.iter() {
        let bureau: String = key.extract()?;
        let rates = value.downcast::<PyDict>()?;
        let entry = TariffEntry::new(
            extract_required(rates, "distance_rate")?,
            extract_required(rates, "time_rate")?,
            extract_required(rates, "replacement_driver_rate")?,
            extract_required(rates, "night_rate_increase")?,
        );
        entries.push((bureau, entry));
    }
    TariffTable::new(entries).map_err(value_error)
}

/// Convert FareBreakdown to Python dict
pub fn breakdown_to_py<'py>(
    py: Python<'py>,
    breakdown: &FareBreakdown,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("distance_fare", breakdown.distance_fare)?;
    dict.set_item("time_fare", breakdown.time_fare)?;
    dict.set_item("replacement_driver_fare", breakdown.replacement_driver_fare)?;
    dict.set_item("night_fare", breakdown.night_fare)?;
    dict.set_item("bus_count", breakdown.bus_count)?;
    dict.set_item("total_fare", breakdown.total_fare)?;

    let labels = PyDict::new_bound(py);
    for component in FareComponent::ALL {
        labels.set_item(component.label(), breakdown.component(component))?;
    }
    dict.set_item("labels", labels)?;

    Ok(dict)
}

/// Convert TariffTable to Python dict
pub fn tariff_table_to_py<'py>(
    py: Python<'py>,
    table: &TariffTable,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    for (bureau, entry) in table.iter() {
        let rates = PyDict::new_bound(py);
        rates.set_item("distance_rate", entry.distance_rate)?;
        rates.set_item("time_rate", entry.time_rate)?;
        rates.set_item("replacement_driver_rate", entry.replacement_driver_rate)?;
        rates.set_item("night_rate_increase", entry.night_rate_increase)?;
        dict.set_item(bureau, rates)?;
    }
    Ok(dict)
}
