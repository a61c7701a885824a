//! Resolve Answer use case: the evaluator chain.
//!
//! Holds an ordered list of interpreters and decides, for one question,
//! which of them supplies the answer. Strict first-match-wins: once an
//! interpreter succeeds the remaining ones are never consulted, even if
//! they might also succeed. When every interpreter fails, the "answer" is
//! a synthetic diagnostic value, not an error, so the REPL stays live and
//! the diagnostic participates in history like any other answer.

use crate::ports::interpreter::{FailureRecord, Interpreter};
use onebox_domain::util::truncate_str;
use onebox_domain::{Question, Value};
use std::sync::Arc;
use tracing::debug;

/// Leading line of the diagnostic answer produced when no interpreter can
/// answer a question.
pub const NO_ANSWER_MESSAGE: &str = "I don't know how to answer that!";

/// Outcome of resolving one question.
#[derive(Debug)]
pub struct Resolution {
    /// The answer: a real one, or the synthetic diagnostic.
    pub value: Value,
    /// Name of the interpreter that answered, `None` for the diagnostic.
    pub answered_by: Option<String>,
    /// Failures recorded before the answer, in trial order.
    pub failures: Vec<FailureRecord>,
}

impl Resolution {
    /// Whether an interpreter actually answered.
    pub fn is_resolved(&self) -> bool {
        self.answered_by.is_some()
    }
}

/// Use case for resolving one question against the interpreter chain.
///
/// The list order is a deliberate priority (more specific and cheaper
/// interpreters first) and comes from configuration, not discovery.
/// The chain itself performs no caching or memoization across turns.
pub struct ResolveAnswerUseCase {
    interpreters: Vec<Arc<dyn Interpreter>>,
}

impl ResolveAnswerUseCase {
    pub fn new(interpreters: Vec<Arc<dyn Interpreter>>) -> Self {
        Self { interpreters }
    }

    /// Interpreter names in trial order.
    pub fn interpreter_names(&self) -> Vec<&str> {
        self.interpreters.iter().map(|i| i.name()).collect()
    }

    /// Try each interpreter in order; the first success is the answer.
    ///
    /// Always yields *some* answer. Failures never cross this boundary as
    /// errors; they are converted to [`FailureRecord`]s and, when nobody
    /// answers, rendered into the diagnostic value.
    pub async fn execute(&self, question: &Question) -> Resolution {
        let mut failures = Vec::new();

        for interpreter in &self.interpreters {
            match interpreter.answer(question).await {
                Ok(value) => {
                    debug!(
                        "{} answered: {}",
                        interpreter.name(),
                        truncate_str(&value.to_string(), 120)
                    );
                    return Resolution {
                        value,
                        answered_by: Some(interpreter.name().to_string()),
                        failures,
                    };
                }
                Err(error) => {
                    debug!("{} declined: {}", interpreter.name(), error);
                    failures.push(FailureRecord::new(interpreter.name(), error));
                }
            }
        }

        let value = Value::Text(Self::diagnostic(&failures));
        Resolution {
            value,
            answered_by: None,
            failures,
        }
    }

    /// Render the all-fail diagnostic: the headline, then one
    /// `<interpreter>: <error>` line per failure in trial order.
    fn diagnostic(failures: &[FailureRecord]) -> String {
        let mut text = String::from(NO_ANSWER_MESSAGE);
        for failure in failures {
            text.push('\n');
            text.push_str(&failure.to_string());
        }
        text
    }
}
