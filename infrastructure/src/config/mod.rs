//! Configuration loading and raw TOML types.

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileConfig, FileInterpretersConfig, FileLoggingConfig, FileRatesConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
