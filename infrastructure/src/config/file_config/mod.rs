//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion to application-layer types
//! happens at wiring time.

mod interpreters;
mod logging;
mod rates;
mod repl;

pub use interpreters::FileInterpretersConfig;
pub use logging::FileLoggingConfig;
pub use rates::FileRatesConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// REPL settings
    pub repl: FileReplConfig,
    /// Interpreter chain settings
    pub interpreters: FileInterpretersConfig,
    /// Exchange-rate settings
    pub rates: FileRatesConfig,
    /// Transcript logging settings
    pub logging: FileLoggingConfig,
}
