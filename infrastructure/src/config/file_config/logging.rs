//! Transcript logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write one JSONL record per turn to this path. Off by default;
    /// history itself is never persisted.
    pub transcript_file: Option<String>,
}
