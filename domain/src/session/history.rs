//! Append-only history of evaluated answers (the variable store).
//!
//! Entries are keyed by turn index and exposed under the names `var0`,
//! `var1`, ... in creation order. Indices are never reused or renumbered,
//! and entries are never mutated or removed; the only mutation is an
//! append after a turn fully resolves. Questions read the history through
//! immutable [`HistorySnapshot`]s.

use crate::core::value::Value;
use std::sync::Arc;

/// Format the variable name for a turn index.
///
/// The turn index is a `u64`; at one turn per millisecond a session would
/// take half a billion years to exhaust it, so overflow is treated as
/// unreachable.
pub fn variable_name(turn: u64) -> String {
    format!("var{turn}")
}

/// Parse a `varN` name back to its turn index. Returns `None` for anything
/// that is not `var` followed by decimal digits.
pub fn parse_variable_name(name: &str) -> Option<u64> {
    let digits = name.strip_prefix("var")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// The accumulated memory of one session.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Value>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append the answer for the next turn.
    pub fn append(&mut self, value: Value) {
        self.entries.push(value);
    }

    /// Take an immutable snapshot of the current entries. Later appends do
    /// not show through.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            entries: Arc::from(self.entries.as_slice()),
        }
    }
}

/// Read-only view of the history at question-construction time.
#[derive(Debug, Clone)]
pub struct HistorySnapshot {
    entries: Arc<[Value]>,
}

impl HistorySnapshot {
    /// A snapshot with no entries, for the first turn and one-shot questions.
    pub fn empty() -> Self {
        Self {
            entries: Arc::from([]),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a stored value by its `varN` name. `None` for malformed
    /// names and indices with no entry.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = parse_variable_name(name)?;
        self.entries.get(usize::try_from(index).ok()?)
    }

    /// Iterate entries as `(name, value)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &Value)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(turn, value)| (variable_name(turn as u64), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_names_follow_turn_order() {
        assert_eq!(variable_name(0), "var0");
        assert_eq!(variable_name(12), "var12");
    }

    #[test]
    fn parse_accepts_only_var_digits() {
        assert_eq!(parse_variable_name("var0"), Some(0));
        assert_eq!(parse_variable_name("var42"), Some(42));
        assert_eq!(parse_variable_name("var"), None);
        assert_eq!(parse_variable_name("varx"), None);
        assert_eq!(parse_variable_name("var1x"), None);
        assert_eq!(parse_variable_name("x1"), None);
    }

    #[test]
    fn append_grows_in_order() {
        let mut history = History::new();
        assert!(history.is_empty());
        history.append(Value::Number(9.0));
        history.append(Value::Number(12.0));
        assert_eq!(history.len(), 2);

        let snapshot = history.snapshot();
        assert_eq!(snapshot.get("var0"), Some(&Value::Number(9.0)));
        assert_eq!(snapshot.get("var1"), Some(&Value::Number(12.0)));
        assert_eq!(snapshot.get("var2"), None);
    }

    #[test]
    fn snapshot_is_frozen_at_creation() {
        let mut history = History::new();
        history.append(Value::Number(1.0));
        let before = history.snapshot();
        history.append(Value::Number(2.0));
        let after = history.snapshot();

        assert_eq!(before.len(), 1);
        assert_eq!(before.get("var1"), None);
        assert_eq!(after.len(), 2);
        assert_eq!(after.get("var1"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn iter_yields_named_entries() {
        let mut history = History::new();
        history.append(Value::Number(1.0));
        history.append(Value::Text("hi".to_string()));
        let snapshot = history.snapshot();

        let names: Vec<String> = snapshot.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["var0", "var1"]);
    }
}
