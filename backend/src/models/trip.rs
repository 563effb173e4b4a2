//! Trip model
//!
//! Describes one charter request:
//! - Total distance driven (km)
//! - Departure and return instants (local wall-clock time)
//! - Bus size and number of buses dispatched
//! - Departure bureau, which selects the applicable tariff

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::time::elapsed_hours;

/// Vehicle class of the chartered buses
///
/// Not yet used by the fare formula; tariffs publish a single rate set per
/// bureau. Parsing accepts the Japanese class names used on tariff sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusSize {
    #[serde(alias = "大型")]
    Large,
    #[serde(alias = "中型")]
    Medium,
    #[serde(alias = "マイクロ")]
    Micro,
    #[serde(alias = "ハイエース")]
    HighRoofVan,
}

impl BusSize {
    pub const ALL: [BusSize; 4] = [
        BusSize::Large,
        BusSize::Medium,
        BusSize::Micro,
        BusSize::HighRoofVan,
    ];

    /// Canonical identifier (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            BusSize::Large => "large",
            BusSize::Medium => "medium",
            BusSize::Micro => "micro",
            BusSize::HighRoofVan => "high_roof_van",
        }
    }

    /// Class name as printed on tariff sheets
    pub fn label(&self) -> &'static str {
        match self {
            BusSize::Large => "大型",
            BusSize::Medium => "中型",
            BusSize::Micro => "マイクロ",
            BusSize::HighRoofVan => "ハイエース",
        }
    }
}

impl fmt::Display for BusSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown bus size: {0}")]
pub struct ParseBusSizeError(pub String);

impl FromStr for BusSize {
    type Err = ParseBusSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusSize::ALL
            .into_iter()
            .find(|size| {
                size.as_str().eq_ignore_ascii_case(s)
                    || size.label() == s
                    || size.as_str().replace('_', "-").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| ParseBusSizeError(s.to_string()))
    }
}

/// Errors raised when a trip cannot be priced
#[derive(Debug, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("Total distance must be non-negative, got {distance} km")]
    NegativeDistance { distance: f64 },

    #[error("Total distance must be a finite number")]
    NonFiniteDistance,

    #[error("Bus count must be at least 1")]
    ZeroBusCount,

    #[error("Return time {return_time} must be after departure time {departure_time}")]
    NonPositiveDuration {
        departure_time: NaiveDateTime,
        return_time: NaiveDateTime,
    },
}

/// A charter trip to be priced
///
/// Created per calculation and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Total distance driven (km)
    #[serde(alias = "totalDistance")]
    pub total_distance: f64,

    /// Departure instant, local to the departure bureau
    #[serde(alias = "departureTime")]
    pub departure_time: NaiveDateTime,

    /// Return instant, local to the departure bureau
    #[serde(alias = "returnTime")]
    pub return_time: NaiveDateTime,

    #[serde(alias = "busSize")]
    pub bus_size: BusSize,

    /// Number of buses dispatched (>= 1)
    #[serde(alias = "busCount")]
    pub bus_count: u32,

    /// Key into the tariff table
    #[serde(alias = "departureBureau")]
    pub departure_bureau: String,
}

impl TripRequest {
    /// Create a new trip request
    ///
    /// No validation happens here; see [`TripRequest::validate`].
    pub fn new(
        total_distance: f64,
        departure_time: NaiveDateTime,
        return_time: NaiveDateTime,
        bus_size: BusSize,
        bus_count: u32,
        departure_bureau: impl Into<String>,
    ) -> Self {
        Self {
            total_distance,
            departure_time,
            return_time,
            bus_size,
            bus_count,
            departure_bureau: departure_bureau.into(),
        }
    }

    /// Trip duration in fractional hours
    pub fn duration_hours(&self) -> f64 {
        elapsed_hours(self.departure_time, self.return_time)
    }

    /// Check the request can be priced
    ///
    /// # Errors
    /// - Distance is NaN/infinite or negative
    /// - Bus count is zero
    /// - Return time is at or before departure time
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if !self.total_distance.is_finite() {
            return Err(InvalidInputError::NonFiniteDistance);
        }
        if self.total_distance < 0.0 {
            return Err(InvalidInputError::NegativeDistance {
                distance: self.total_distance,
            });
        }
        if self.bus_count == 0 {
            return Err(InvalidInputError::ZeroBusCount);
        }
        if self.return_time <= self.departure_time {
            return Err(InvalidInputError::NonPositiveDuration {
                departure_time: self.departure_time,
                return_time: self.return_time,
            });
        }
        Ok(())
    }
}
