//! Evaluated answer values.
//!
//! Every answer an interpreter produces is a [`Value`]. A value carries two
//! presentations: the *computable* form that goes into history and feeds
//! later arithmetic ([`Value::to_computable`]), and the *display* form shown
//! to the user ([`Value::display_string`]). The two may differ arbitrarily:
//! a currency amount displays as `£ 7.90 GBP` but computes as `7.9`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A currency amount with its ISO code and display symbol (Value Object).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    code: String,
    symbol: String,
}

impl Money {
    /// Create a new amount. Rounded to 2 decimal places at construction so
    /// every later read sees the same figure.
    pub fn new(amount: f64, code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            amount: (amount * 100.0).round() / 100.0,
            code: code.into(),
            symbol: symbol.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.code)
    }
}

/// An evaluated answer (Value Object).
///
/// Created by an interpreter inside one turn, rendered once for display,
/// then frozen into history as its computable reduction for the remainder
/// of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A plain number.
    Number(f64),
    /// Free text, including the synthetic "no answer" diagnostic.
    Text(String),
    /// A point in time with a fixed UTC offset.
    Moment(DateTime<FixedOffset>),
    /// A currency amount.
    Money(Money),
}

impl Value {
    /// The canonical reduction stored in history and used for substitution
    /// and downstream arithmetic. A currency amount reduces to its numeric
    /// magnitude; every other variant is already its own computable form.
    pub fn to_computable(&self) -> Value {
        match self {
            Value::Money(money) => Value::Number(money.amount()),
            other => other.clone(),
        }
    }

    /// The human-facing rendering. Variants without a specialized rule fall
    /// back to their plain [`Display`](std::fmt::Display) form.
    pub fn display_string(&self) -> String {
        match self {
            Value::Money(money) => {
                format!("{} {:.2} {}", money.symbol(), money.amount(), money.code())
            }
            other => other.to_string(),
        }
    }

    /// Numeric view used by the expression scope. `None` for values that
    /// cannot participate in arithmetic.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Money(money) => Some(money.amount()),
            Value::Text(_) | Value::Moment(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(text) => write!(f, "{}", text),
            Value::Moment(moment) => write!(f, "{}", moment.format("%Y-%m-%d %H:%M:%S %:z")),
            Value::Money(money) => write!(f, "{}", money),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Money> for Value {
    fn from(money: Money) -> Self {
        Value::Money(money)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(moment: DateTime<FixedOffset>) -> Self {
        Value::Moment(moment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_rounds_to_two_places() {
        let money = Money::new(7.899999, "GBP", "£");
        assert_eq!(money.amount(), 7.9);
    }

    #[test]
    fn money_display_forms() {
        let value = Value::Money(Money::new(7.9, "GBP", "£"));
        assert_eq!(value.display_string(), "£ 7.90 GBP");
        assert_eq!(value.to_string(), "7.90 GBP");
    }

    #[test]
    fn money_reduces_to_number() {
        let value = Value::Money(Money::new(7.9, "GBP", "£"));
        assert_eq!(value.to_computable(), Value::Number(7.9));
    }

    #[test]
    fn plain_variants_reduce_to_themselves() {
        assert_eq!(Value::Number(9.0).to_computable(), Value::Number(9.0));
        let text = Value::Text("hello".to_string());
        assert_eq!(text.to_computable(), text);
    }

    #[test]
    fn number_display_drops_trailing_zero() {
        assert_eq!(Value::Number(9.0).to_string(), "9");
        assert_eq!(Value::Number(16.0934).to_string(), "16.0934");
    }

    #[test]
    fn moment_display_format() {
        let moment: DateTime<FixedOffset> = "2020-08-29T14:00:00+09:00".parse().unwrap();
        let value = Value::Moment(moment);
        assert_eq!(value.to_string(), "2020-08-29 14:00:00 +09:00");
        assert_eq!(value.display_string(), "2020-08-29 14:00:00 +09:00");
    }

    #[test]
    fn as_number_views() {
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::Money(Money::new(7.9, "GBP", "£")).as_number(), Some(7.9));
        assert_eq!(Value::Text("x".to_string()).as_number(), None);
    }

    #[test]
    fn presentations_are_idempotent() {
        let value = Value::Money(Money::new(12.345, "USD", "$"));
        assert_eq!(value.display_string(), value.display_string());
        assert_eq!(value.to_computable(), value.to_computable());
        assert_eq!(
            value.to_computable().to_computable(),
            value.to_computable()
        );
    }
}
