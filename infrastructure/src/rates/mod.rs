//! Exchange-rate sources for the currency interpreter.
//!
//! The interpreter only needs one operation: units of `to` per one unit of
//! `from`. The default source is a static table merged from built-in
//! snapshot rates and the `[rates]` config section; a live HTTP source is
//! available behind the `web-rates` feature.

use async_trait::async_trait;
use thiserror::Error;

pub mod static_table;
#[cfg(feature = "web-rates")]
pub mod web;

pub use static_table::StaticRates;
#[cfg(feature = "web-rates")]
pub use web::HttpRates;

/// Errors a rate source can produce.
#[derive(Error, Debug)]
pub enum RateError {
    /// The source has no rate for this pair.
    #[error("no exchange rate for {from}/{to}")]
    Unknown { from: String, to: String },

    /// The source itself failed (network, malformed response).
    #[error("rate lookup failed: {0}")]
    Fetch(String),
}

/// Source of currency exchange rates.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Units of `to` per one unit of `from`. Codes are uppercase ISO 4217.
    async fn rate(&self, from: &str, to: &str) -> Result<f64, RateError>;
}
