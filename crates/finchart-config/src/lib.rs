//! finchart-config
//!
//! Named persistence of chart filter/display preference pairs.
//! Owns the ChartProfile data structure plus disk persistence helpers.

pub mod error;
pub mod store;

pub use error::ConfigError;
pub use store::{ChartProfile, ChartProfileStore};
