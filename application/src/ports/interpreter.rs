//! Interpreter port
//!
//! Defines the capability a domain interpreter (arithmetic, currency,
//! date/time, units, ...) must provide to participate in the evaluator
//! chain. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use onebox_domain::{DomainError, Question, Value};
use thiserror::Error;

/// Why an interpreter could not answer a question.
///
/// Every variant is recoverable at the chain level: the failure is recorded
/// and the next interpreter is tried. `Unrecognized` (wrong domain or
/// unparseable) and `UnresolvedVariable` (the question referenced history
/// that does not exist) are deliberately not treated differently past this
/// point; the variant only shapes the message.
#[derive(Error, Debug)]
pub enum InterpretError {
    /// The question is not in this interpreter's domain.
    #[error("{0}")]
    Unrecognized(String),

    /// The question referenced a history variable with no stored entry.
    #[error("unknown variable {0}")]
    UnresolvedVariable(String),

    /// An external dependency failed (rate source, etc.).
    #[error("{0}")]
    External(String),
}

impl From<DomainError> for InterpretError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::UnresolvedVariable(name) => InterpretError::UnresolvedVariable(name),
        }
    }
}

/// A pluggable interpreter for one domain of questions.
///
/// Implementations signal failure for "I cannot interpret this question";
/// a question they *can* interpret whose answer is domain-specific text
/// (e.g. a currency description) is a success carrying that text. They
/// must not panic or escape with anything the chain cannot record, and
/// they are stateless with respect to each other within a turn (internal
/// caching across turns is fine).
#[async_trait]
pub trait Interpreter: Send + Sync {
    /// Identity used to attribute failure records.
    fn name(&self) -> &str;

    /// Try to answer the question.
    async fn answer(&self, question: &Question) -> Result<Value, InterpretError>;
}

/// One recorded interpreter failure: identity plus error description.
///
/// Collected by the chain, rendered into the diagnostic answer, never
/// raised past the chain boundary.
#[derive(Debug)]
pub struct FailureRecord {
    pub interpreter: String,
    pub error: InterpretError,
}

impl FailureRecord {
    pub fn new(interpreter: impl Into<String>, error: InterpretError) -> Self {
        Self {
            interpreter: interpreter.into(),
            error,
        }
    }
}

impl std::fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.interpreter, self.error)
    }
}
