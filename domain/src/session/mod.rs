//! Session state: the append-only answer history.

pub mod history;
