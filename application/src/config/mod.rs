//! Application configuration.

mod repl_params;

pub use repl_params::ReplParams;
