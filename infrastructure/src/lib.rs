//! Infrastructure layer for onebox
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the four concrete interpreters, exchange-rate
//! sources, configuration file loading, and transcript logging.

pub mod config;
pub mod interpreters;
pub mod logging;
pub mod rates;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileInterpretersConfig, FileLoggingConfig, FileRatesConfig,
    FileReplConfig,
};
pub use interpreters::{
    CurrencyInterpreter, DateTimeInterpreter, ExpressionInterpreter, InterpreterConfigError,
    UnitInterpreter, build_interpreters,
};
pub use logging::JsonlTranscriptLogger;
pub use rates::{RateError, RateSource, StaticRates};
#[cfg(feature = "web-rates")]
pub use rates::HttpRates;
