//! Presentation layer for onebox
//!
//! This crate contains the CLI definition, the terminal adapter for the
//! application's Console port, and the welcome banner.

pub mod cli;
pub mod console;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use console::terminal::TerminalConsole;
pub use output::banner::welcome_banner;
