//! Tariff Rate Entries
//!
//! Rates published by one transport bureau.
//! All monetary values in minor currency units.

use serde::{Deserialize, Serialize};

use super::table::TariffError;

/// Rate parameters for one bureau
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TariffEntry {
    /// Charge per km of rounded distance
    #[serde(alias = "distanceRate")]
    pub distance_rate: i64,

    /// Charge per started hour
    #[serde(alias = "timeRate")]
    pub time_rate: i64,

    /// Replacement-driver charge, applied per rounded km and per started hour
    #[serde(alias = "replacementDriverRate")]
    pub replacement_driver_rate: i64,

    /// Multiplier applied to the time rate for night hours (e.g. 1.2)
    #[serde(alias = "nightRateIncrease")]
    pub night_rate_increase: f64,
}

impl TariffEntry {
    pub fn new(
        distance_rate: i64,
        time_rate: i64,
        replacement_driver_rate: i64,
        night_rate_increase: f64,
    ) -> Self {
        Self {
            distance_rate,
            time_rate,
            replacement_driver_rate,
            night_rate_increase,
        }
    }

    /// Check every rate is positive (and the multiplier finite)
    pub fn validate(&self, bureau: &str) -> Result<(), TariffError> {
        let invalid = |field: &'static str, value: String| TariffError::InvalidRate {
            bureau: bureau.to_string(),
            field,
            value,
        };

        if self.distance_rate <= 0 {
            return Err(invalid("distance_rate", self.distance_rate.to_string()));
        }
        if self.time_rate <= 0 {
            return Err(invalid("time_rate", self.time_rate.to_string()));
        }
        if self.replacement_driver_rate <= 0 {
            return Err(invalid(
                "replacement_driver_rate",
                self.replacement_driver_rate.to_string(),
            ));
        }
        if !self.night_rate_increase.is_finite() || self.night_rate_increase <= 0.0 {
            return Err(invalid(
                "night_rate_increase",
                self.night_rate_increase.to_string(),
            ));
        }
        Ok(())
    }
}
