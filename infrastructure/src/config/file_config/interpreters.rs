//! Interpreter chain configuration from TOML (`[interpreters]` section)

use serde::{Deserialize, Serialize};

/// Raw interpreter configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInterpretersConfig {
    /// Chain order. First match wins, so cheaper and more specific
    /// interpreters belong earlier.
    pub order: Vec<String>,
}

impl Default for FileInterpretersConfig {
    fn default() -> Self {
        Self {
            order: vec![
                "expression".to_string(),
                "currency".to_string(),
                "datetime".to_string(),
                "unit".to_string(),
            ],
        }
    }
}
