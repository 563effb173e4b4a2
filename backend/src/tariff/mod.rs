//! Tariff Types
//!
//! This module provides:
//! - Per-bureau rate entries (`TariffEntry`)
//! - The read-only bureau → rate table (`TariffTable`) and its lookup seam
//!
//! # Lifecycle
//!
//! A table is built once (from JSON or the built-in defaults) and only read
//! afterwards. Nothing in the engine mutates it.

pub mod rates;
pub mod table;

// Re-exports
pub use rates::TariffEntry;
pub use table::{TariffError, TariffLookup, TariffTable, HOKKAIDO_BUREAU};
