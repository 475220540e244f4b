#![doc(test(attr(deny(warnings))))]

//! Profit Core offers the project-profitability primitives behind dashboards,
//! PDF reports, and quotes: cost breakdowns, margins, break-even projections,
//! and the validation and settings layers that feed them.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod finance;
pub mod report;
pub mod utils;
pub mod validate;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Profit Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
