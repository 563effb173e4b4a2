//! Tariff Table
//!
//! Read-only mapping from departure bureau name to its [`TariffEntry`].
//!
//! # Critical Invariants
//!
//! - **Exact keys**: lookups never normalize case or fall back to a default
//! - **Validated on construction**: every entry has positive rates
//! - **Immutable**: there is no way to add or change entries after building

use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::rates::TariffEntry;
use crate::fare::FareError;

/// Bureau covered by the built-in table
pub const HOKKAIDO_BUREAU: &str = "北海道運輸局";

/// Errors raised while building or loading a tariff table
#[derive(Debug, Error, PartialEq)]
pub enum TariffError {
    #[error("Failed to parse tariff table: {0}")]
    Parse(String),

    #[error("Invalid {field} for bureau '{bureau}': {value} (rates must be positive)")]
    InvalidRate {
        bureau: String,
        field: &'static str,
        value: String,
    },

    #[error("Bureau name must not be empty")]
    EmptyBureauName,
}

/// Source of tariff entries keyed by bureau
///
/// The calculator only depends on this trait, so callers can inject any
/// read-only map of synthetic entries.
pub trait TariffLookup {
    /// Resolve the entry for `bureau`
    ///
    /// # Errors
    /// [`FareError::UnknownBureau`] when no entry exists for the exact key.
    fn lookup(&self, bureau: &str) -> Result<&TariffEntry, FareError>;
}

/// Tariff table keyed by bureau name
///
/// Entries are kept sorted so listing and fingerprinting are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TariffTable {
    entries: BTreeMap<String, TariffEntry>,
}

impl TariffTable {
    /// Build a table from `(bureau, entry)` pairs
    ///
    /// A later duplicate key replaces an earlier one.
    ///
    /// # Errors
    /// - Empty bureau name
    /// - Any rate that is not positive
    pub fn new<I, S>(entries: I) -> Result<Self, TariffError>
    where
        I: IntoIterator<Item = (S, TariffEntry)>,
        S: Into<String>,
    {
        let table = Self {
            entries: entries
                .into_iter()
                .map(|(bureau, entry)| (bureau.into(), entry))
                .collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Rates published on the Hokkaido fare sheet
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            HOKKAIDO_BUREAU.to_string(),
            TariffEntry::new(140, 5570, 1890, 1.2),
        );
        Self { entries }
    }

    /// Parse a JSON object of `bureau -> rates`
    ///
    /// # Example
    /// ```
    /// use charter_fare_core::TariffTable;
    ///
    /// let table = TariffTable::from_json(r#"{
    ///     "関東運輸局": {"distanceRate": 160, "timeRate": 6200,
    ///                  "replacementDriverRate": 2100, "nightRateIncrease": 1.25}
    /// }"#).unwrap();
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, TariffError> {
        let table: Self =
            serde_json::from_str(json).map_err(|e| TariffError::Parse(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    /// Parse a JSON tariff table from any reader (e.g. an open file)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TariffError> {
        let table: Self =
            serde_json::from_reader(reader).map_err(|e| TariffError::Parse(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), TariffError> {
        for (bureau, entry) in &self.entries {
            if bureau.trim().is_empty() {
                return Err(TariffError::EmptyBureauName);
            }
            entry.validate(bureau)?;
        }
        Ok(())
    }

    /// Direct access without the error wrapper
    pub fn get(&self, bureau: &str) -> Option<&TariffEntry> {
        self.entries.get(bureau)
    }

    /// Bureau names in sorted order
    pub fn bureaus(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(bureau, entry)` pairs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TariffEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// SHA256 hex digest of the table's canonical JSON form
    ///
    /// Identifies exactly which rates produced a quote. Keys are sorted, so
    /// two tables with the same content always share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let canonical: serde_json::Map<String, Value> = self
            .entries
            .iter()
            .map(|(bureau, entry)| {
                let rates = json!({
                    "distance_rate": entry.distance_rate,
                    "time_rate": entry.time_rate,
                    "replacement_driver_rate": entry.replacement_driver_rate,
                    "night_rate_increase": entry.night_rate_increase,
                });
                (bureau.clone(), rates)
            })
            .collect();
        let json = Value::Object(canonical).to_string();

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let result = hasher.finalize();

        format!("{:x}", result)
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TariffLookup for TariffTable {
    fn lookup(&self, bureau: &str) -> Result<&TariffEntry, FareError> {
        self.entries
            .get(bureau)
            .ok_or_else(|| FareError::UnknownBureau(bureau.to_string()))
    }
}

impl TariffLookup for HashMap<String, TariffEntry> {
    fn lookup(&self, bureau: &str) -> Result<&TariffEntry, FareError> {
        self.get(bureau)
            .ok_or_else(|| FareError::UnknownBureau(bureau.to_string()))
    }
}

impl TariffLookup for BTreeMap<String, TariffEntry> {
    fn lookup(&self, bureau: &str) -> Result<&TariffEntry, FareError> {
        self.get(bureau)
            .ok_or_else(|| FareError::UnknownBureau(bureau.to_string()))
    }
}
