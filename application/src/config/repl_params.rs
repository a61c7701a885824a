//! REPL parameters: loop control knobs.
//!
//! These are application-layer concerns, not domain policy; the raw TOML
//! config in the infrastructure layer converts into this.

use serde::{Deserialize, Serialize};

/// Parameters for [`RunReplUseCase`](crate::use_cases::run_repl::RunReplUseCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplParams {
    /// Trimmed input equal to this terminates the loop. Checked before
    /// question construction, so it never reaches an interpreter.
    pub exit_command: String,
}

impl Default for ReplParams {
    fn default() -> Self {
        Self {
            exit_command: "exit".to_string(),
        }
    }
}

impl ReplParams {
    pub fn with_exit_command(mut self, command: impl Into<String>) -> Self {
        self.exit_command = command.into();
        self
    }

    /// Turn-indexed prompt text.
    pub fn prompt_for(&self, turn: u64) -> String {
        format!("{turn}> ")
    }
}
