//! Exchange-rate configuration from TOML (`[rates]` section)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Raw exchange-rate configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRatesConfig {
    /// Use the live HTTP rate source (requires the `web-rates` feature).
    pub live: bool,
    /// Preloaded pairs keyed as `"FROM/TO"`, merged over the built-in
    /// snapshot table.
    pub preloaded: BTreeMap<String, f64>,
}

impl FileRatesConfig {
    /// Parsed `(from, to, rate)` triples. Malformed keys are skipped with
    /// a warning rather than failing startup.
    pub fn pairs(&self) -> Vec<(String, String, f64)> {
        self.preloaded
            .iter()
            .filter_map(|(key, rate)| match key.split_once('/') {
                Some((from, to)) if !from.is_empty() && !to.is_empty() => {
                    Some((from.to_uppercase(), to.to_uppercase(), *rate))
                }
                _ => {
                    warn!("ignoring malformed [rates.preloaded] key: {key:?}");
                    None
                }
            })
            .collect()
    }
}
