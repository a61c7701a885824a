//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A question referenced a history variable with no stored entry.
    #[error("unknown variable {0}")]
    UnresolvedVariable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_variable_display() {
        let error = DomainError::UnresolvedVariable("var5".to_string());
        assert_eq!(error.to_string(), "unknown variable var5");
    }
}
