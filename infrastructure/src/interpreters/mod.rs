//! Interpreter adapters.
//!
//! Each interpreter implements the application layer's
//! [`Interpreter`](onebox_application::Interpreter) port for one question
//! domain. [`build_interpreters`] assembles the chain in the order
//! configured under `[interpreters].order`. The order is a deliberate
//! priority, with the cheap expression interpreter ahead of the
//! recognizer-style ones.

pub mod currency;
pub mod datetime;
pub mod expression;
pub mod unit;

pub use currency::CurrencyInterpreter;
pub use datetime::DateTimeInterpreter;
pub use expression::ExpressionInterpreter;
pub use unit::UnitInterpreter;

use crate::config::FileConfig;
use crate::rates::{RateSource, StaticRates};
use onebox_application::Interpreter;
use std::sync::Arc;
use thiserror::Error;

/// Errors detected while wiring the chain from configuration.
#[derive(Error, Debug)]
pub enum InterpreterConfigError {
    #[error("unknown interpreter in [interpreters].order: {0}")]
    UnknownInterpreter(String),
}

/// Build the interpreter chain in the configured order.
pub fn build_interpreters(
    config: &FileConfig,
) -> Result<Vec<Arc<dyn Interpreter>>, InterpreterConfigError> {
    let rates = build_rate_source(config);
    config
        .interpreters
        .order
        .iter()
        .map(|name| {
            Ok(match name.as_str() {
                "expression" => Arc::new(ExpressionInterpreter::new()) as Arc<dyn Interpreter>,
                "currency" => Arc::new(CurrencyInterpreter::new(rates.clone())),
                "datetime" => Arc::new(DateTimeInterpreter::new()),
                "unit" => Arc::new(UnitInterpreter::new()),
                other => {
                    return Err(InterpreterConfigError::UnknownInterpreter(other.to_string()));
                }
            })
        })
        .collect()
}

fn build_rate_source(config: &FileConfig) -> Arc<dyn RateSource> {
    #[cfg(feature = "web-rates")]
    if config.rates.live {
        return Arc::new(crate::rates::HttpRates::new());
    }

    let mut rates = StaticRates::new();
    for (from, to, rate) in config.rates.pairs() {
        rates = rates.with_rate(from, to, rate);
    }
    Arc::new(rates)
}
