//! Fare breakdown types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label used for the grand total on fare sheets
pub const TOTAL_FARE_LABEL: &str = "運賃料金の合計価格";

/// The four components of a charter fare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FareComponent {
    /// Distance-based fare (キロ制運賃)
    Distance,
    /// Time-based fare (時間制運賃)
    Time,
    /// Replacement-driver surcharge (交替運転者配置料金)
    ReplacementDriver,
    /// Night / early-morning surcharge (深夜早朝料金)
    Night,
}

impl FareComponent {
    pub const ALL: [FareComponent; 4] = [
        FareComponent::Distance,
        FareComponent::Time,
        FareComponent::ReplacementDriver,
        FareComponent::Night,
    ];

    /// Name as printed on fare sheets
    pub fn label(&self) -> &'static str {
        match self {
            FareComponent::Distance => "キロ制運賃",
            FareComponent::Time => "時間制運賃",
            FareComponent::ReplacementDriver => "交替運転者配置料金",
            FareComponent::Night => "深夜早朝料金",
        }
    }
}

impl fmt::Display for FareComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one fare calculation
///
/// Component amounts are for a single bus; `total_fare` is scaled by
/// `bus_count`. All money values in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub distance_fare: i64,
    pub time_fare: i64,
    pub replacement_driver_fare: i64,
    pub night_fare: i64,
    /// Number of buses the total was scaled by
    pub bus_count: u32,
    pub total_fare: i64,
}

impl FareBreakdown {
    /// Assemble a breakdown and compute the scaled total
    ///
    /// Returns `None` if the per-bus sum or the scaled total overflows.
    pub fn new(
        distance_fare: i64,
        time_fare: i64,
        replacement_driver_fare: i64,
        night_fare: i64,
        bus_count: u32,
    ) -> Option<Self> {
        let per_bus = distance_fare
            .checked_add(time_fare)?
            .checked_add(replacement_driver_fare)?
            .checked_add(night_fare)?;
        Some(Self {
            distance_fare,
            time_fare,
            replacement_driver_fare,
            night_fare,
            bus_count,
            total_fare: per_bus.checked_mul(i64::from(bus_count))?,
        })
    }

    /// Sum of the four components for one bus
    ///
    /// Cannot overflow: the same sum was checked in [`FareBreakdown::new`].
    pub fn per_bus_total(&self) -> i64 {
        self.distance_fare + self.time_fare + self.replacement_driver_fare + self.night_fare
    }

    /// Amount of a single component (per bus)
    pub fn component(&self, component: FareComponent) -> i64 {
        match component {
            FareComponent::Distance => self.distance_fare,
            FareComponent::Time => self.time_fare,
            FareComponent::ReplacementDriver => self.replacement_driver_fare,
            FareComponent::Night => self.night_fare,
        }
    }

    /// Components in fare-sheet order
    pub fn components(&self) -> [(FareComponent, i64); 4] {
        FareComponent::ALL.map(|c| (c, self.component(c)))
    }
}
