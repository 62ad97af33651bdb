#![doc(test(attr(deny(warnings))))]

//! Finchart turns filtered lists of financial operations into chart-ready
//! aggregates: calendar-bucketed bar series and category pie slices.

pub mod utils;

pub use finchart_config::{ChartProfile, ChartProfileStore, ConfigError};
pub use finchart_core::*;
pub use finchart_domain::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finchart tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
