//! Time helpers shared by the fare formulas

pub mod time;

pub use time::{elapsed_hours, night_hours, NIGHT_END_HOUR, NIGHT_START_HOUR};
