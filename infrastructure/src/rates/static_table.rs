//! Static exchange-rate table.

use super::{RateError, RateSource};
use async_trait::async_trait;
use std::collections::HashMap;

/// Built-in snapshot rates. Approximate by nature; sessions that care
/// override them via `[rates].preloaded` or enable the `web-rates` source.
const DEFAULT_RATES: &[(&str, &str, f64)] = &[
    ("USD", "GBP", 0.79),
    ("USD", "EUR", 0.92),
    ("USD", "JPY", 149.50),
    ("USD", "CHF", 0.88),
    ("USD", "CAD", 1.36),
    ("USD", "AUD", 1.52),
    ("USD", "THB", 35.20),
    ("USD", "INR", 83.10),
    ("USD", "CNY", 7.24),
    ("EUR", "GBP", 0.86),
];

/// Rate source backed by an in-memory table.
///
/// Lookups try the direct pair first, then the inverse pair (as `1/rate`).
pub struct StaticRates {
    rates: HashMap<(String, String), f64>,
}

impl StaticRates {
    /// Table preloaded with the built-in snapshot rates.
    pub fn new() -> Self {
        let mut table = Self::empty();
        for (from, to, rate) in DEFAULT_RATES {
            table = table.with_rate(*from, *to, *rate);
        }
        table
    }

    /// Table with no entries.
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Add or override one pair.
    pub fn with_rate(mut self, from: impl Into<String>, to: impl Into<String>, rate: f64) -> Self {
        self.rates
            .insert((from.into().to_uppercase(), to.into().to_uppercase()), rate);
        self
    }

    fn lookup(&self, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return Some(1.0);
        }
        if let Some(rate) = self.rates.get(&(from.to_string(), to.to_string())) {
            return Some(*rate);
        }
        self.rates
            .get(&(to.to_string(), from.to_string()))
            .map(|rate| 1.0 / rate)
    }
}

impl Default for StaticRates {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for StaticRates {
    async fn rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        self.lookup(from, to).ok_or_else(|| RateError::Unknown {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
