//! Domain models for charter fare calculation

pub mod trip;

// Re-exports
pub use trip::{BusSize, InvalidInputError, TripRequest};
