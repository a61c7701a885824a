//! REPL configuration from TOML (`[repl]` section)

use onebox_application::ReplParams;
use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Input that terminates the session
    pub exit_command: String,
    /// Path to the line-editor history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            exit_command: "exit".to_string(),
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Convert to application-layer parameters.
    pub fn to_params(&self) -> ReplParams {
        ReplParams::default().with_exit_command(&self.exit_command)
    }
}
