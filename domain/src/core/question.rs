//! Question value object and variable substitution.

use crate::core::error::DomainError;
use crate::session::history::HistorySnapshot;
use regex::Regex;
use std::sync::LazyLock;

/// A `varN` reference token, matched independent of surrounding punctuation.
static VARIABLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bvar\d+\b").expect("variable token pattern"));

/// One turn of user input together with the variable history available to
/// resolve references (Value Object).
///
/// The snapshot is taken at construction time; answers stored after that
/// never retroactively change what this question can see.
#[derive(Debug, Clone)]
pub struct Question {
    text: String,
    variables: HistorySnapshot,
}

impl Question {
    /// Create a question from raw input. Surrounding whitespace is trimmed;
    /// the text is otherwise unmodified.
    pub fn new(text: impl Into<String>, variables: HistorySnapshot) -> Self {
        Self {
            text: text.into().trim().to_string(),
            variables,
        }
    }

    /// The raw question text for this turn.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The history snapshot this question was built against.
    pub fn variables(&self) -> &HistorySnapshot {
        &self.variables
    }

    /// Replace every `varN` reference token using the supplied mapping.
    ///
    /// Pure and repeatable: neither the question nor the store is mutated.
    /// The first `Err` from the mapping aborts the transformation and
    /// propagates to the caller; interpreters convert it into a local
    /// failure, never a crash.
    pub fn transform_variables<E>(
        &self,
        mut transform: impl FnMut(&str) -> Result<String, E>,
    ) -> Result<String, E> {
        let mut out = String::with_capacity(self.text.len());
        let mut last = 0;
        for token in VARIABLE_TOKEN.find_iter(&self.text) {
            out.push_str(&self.text[last..token.start()]);
            out.push_str(&transform(token.as_str())?);
            last = token.end();
        }
        out.push_str(&self.text[last..]);
        Ok(out)
    }

    /// Display-mode substitution: every reference token becomes the stored
    /// computable value's plain textual form. Interpreters that work on
    /// plain text call this before recognizing the question.
    pub fn resolved_text(&self) -> Result<String, DomainError> {
        self.transform_variables(|name| {
            self.variables
                .get(name)
                .map(|value| value.to_string())
                .ok_or_else(|| DomainError::UnresolvedVariable(name.to_string()))
        })
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Value;
    use crate::session::history::History;

    fn snapshot_of(values: &[Value]) -> HistorySnapshot {
        let mut history = History::new();
        for value in values {
            history.append(value.clone());
        }
        history.snapshot()
    }

    #[test]
    fn text_is_trimmed() {
        let q = Question::new("  4 + 5  ", HistorySnapshot::empty());
        assert_eq!(q.text(), "4 + 5");
    }

    #[test]
    fn transform_replaces_every_token() {
        let q = Question::new("var0 + var1 * var0", HistorySnapshot::empty());
        let out: Result<String, ()> = q.transform_variables(|name| Ok(format!("<{name}>")));
        assert_eq!(out.unwrap(), "<var0> + <var1> * <var0>");
    }

    #[test]
    fn transform_respects_token_boundaries() {
        // `variable0` and `avar1` are not reference tokens
        let q = Question::new("variable0 + var2, avar1", HistorySnapshot::empty());
        let out: Result<String, ()> = q.transform_variables(|name| Ok(format!("[{name}]")));
        assert_eq!(out.unwrap(), "variable0 + [var2], avar1");
    }

    #[test]
    fn transform_finds_tokens_next_to_punctuation() {
        let q = Question::new("(var0)+var1?", HistorySnapshot::empty());
        let out: Result<String, ()> = q.transform_variables(|name| Ok(format!("{name}!")));
        assert_eq!(out.unwrap(), "(var0!)+var1!?");
    }

    #[test]
    fn transform_propagates_first_error() {
        let q = Question::new("var0 var1", HistorySnapshot::empty());
        let out = q.transform_variables(|name| {
            if name == "var0" {
                Err(name.to_string())
            } else {
                Ok(String::new())
            }
        });
        assert_eq!(out.unwrap_err(), "var0");
    }

    #[test]
    fn resolved_text_substitutes_stored_values() {
        let q = Question::new("var0 + 3", snapshot_of(&[Value::Number(9.0)]));
        assert_eq!(q.resolved_text().unwrap(), "9 + 3");
    }

    #[test]
    fn resolved_text_unresolved_reference_is_an_error() {
        let q = Question::new("var5 + 3", snapshot_of(&[Value::Number(9.0)]));
        assert_eq!(
            q.resolved_text(),
            Err(DomainError::UnresolvedVariable("var5".to_string()))
        );
    }

    #[test]
    fn snapshot_is_not_a_live_reference() {
        let mut history = History::new();
        history.append(Value::Number(1.0));
        let q = Question::new("var1", history.snapshot());
        history.append(Value::Number(2.0));
        // the question still sees one entry
        assert!(q.resolved_text().is_err());
    }

    #[test]
    fn resolved_text_is_repeatable() {
        let q = Question::new("var0 * 2", snapshot_of(&[Value::Number(4.0)]));
        assert_eq!(q.resolved_text().unwrap(), q.resolved_text().unwrap());
        assert_eq!(q.text(), "var0 * 2");
    }
}
