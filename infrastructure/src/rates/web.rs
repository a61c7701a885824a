//! Live exchange-rate source over HTTP (`web-rates` feature).
//!
//! Fetches `GET {base_url}/latest?base=FROM&symbols=TO` and reads
//! `rates.TO` from the JSON body. Fetched rates are cached in memory for
//! the process lifetime, so one pair costs at most one request per
//! session.

use super::{RateError, RateSource};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.exchangerate.host";

/// Rate source backed by an exchange-rate HTTP API.
pub struct HttpRates {
    http: reqwest::Client,
    base_url: String,
    cache: Mutex<HashMap<String, f64>>,
}

impl HttpRates {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the source at a different API host (tests use this).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn cache_key(from: &str, to: &str) -> String {
        format!("{from}/{to}")
    }
}

impl Default for HttpRates {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for HttpRates {
    async fn rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        let key = Self::cache_key(from, to);
        if let Ok(cache) = self.cache.lock()
            && let Some(rate) = cache.get(&key)
        {
            return Ok(*rate);
        }

        let url = format!("{}/latest?base={}&symbols={}", self.base_url, from, to);
        debug!("fetching exchange rate: {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RateError::Fetch(e.to_string()))?;
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RateError::Fetch(e.to_string()))?;

        let rate = body["rates"][to]
            .as_f64()
            .ok_or_else(|| RateError::Unknown {
                from: from.to_string(),
                to: to.to_string(),
            })?;

        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, rate);
        }
        Ok(rate)
    }
}
