//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — one turn of input with its history snapshot
//! - [`value::Value`] — an evaluated answer with its two presentations
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
pub mod value;
