//! Terminal adapter for the Console port.

pub mod terminal;
