//! Currency interpreter.
//!
//! Recognizes three shapes, after display-mode variable substitution:
//! - `10 USD to GBP` — convert an amount
//! - `GBP to USD` — rate lookup, answered as one unit of `from`
//! - `GBP` — describe a currency, answering [`Value::Text`]
//!
//! Both conversion shapes answer [`Value::Money`], so the display carries
//! the target symbol and code while history stores the bare magnitude.
//!
//! Rates come from the injected [`RateSource`]. A missing rate or a failed
//! fetch is an interpreter-local failure, recorded by the chain like any
//! other.

use crate::rates::{RateError, RateSource};
use async_trait::async_trait;
use onebox_application::{InterpretError, Interpreter};
use onebox_domain::{Money, Question, Value};
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Common ISO 4217 codes with display symbol and English name. Full locale
/// tables are out of scope; codes not listed here are not recognized.
const CURRENCIES: &[(&str, &str, &str)] = &[
    ("USD", "$", "US dollar"),
    ("GBP", "£", "British pound"),
    ("EUR", "€", "euro"),
    ("JPY", "¥", "Japanese yen"),
    ("CHF", "CHF", "Swiss franc"),
    ("AUD", "A$", "Australian dollar"),
    ("CAD", "C$", "Canadian dollar"),
    ("NZD", "NZ$", "New Zealand dollar"),
    ("SEK", "kr", "Swedish krona"),
    ("NOK", "kr", "Norwegian krone"),
    ("THB", "฿", "Thai baht"),
    ("INR", "₹", "Indian rupee"),
    ("CNY", "¥", "Chinese yuan"),
];

static CONVERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?P<amount>\d[\d,]*(?:\.\d+)?)\s*)?(?P<from>[a-z]{3})\s+(?:to|in|as)\s+(?P<to>[a-z]{3})\s*$",
    )
    .expect("currency conversion pattern")
});

static BARE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?P<code>[a-z]{3})\s*$").expect("currency code pattern"));

fn currency_entry(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    CURRENCIES.iter().find(|(known, _, _)| *known == code)
}

fn symbol_for(code: &str) -> &str {
    currency_entry(code).map(|(_, symbol, _)| *symbol).unwrap_or(code)
}

/// Interpreter for currency conversions and lookups.
pub struct CurrencyInterpreter {
    rates: Arc<dyn RateSource>,
}

impl CurrencyInterpreter {
    pub fn new(rates: Arc<dyn RateSource>) -> Self {
        Self { rates }
    }

    async fn rate(&self, from: &str, to: &str) -> Result<f64, InterpretError> {
        self.rates.rate(from, to).await.map_err(|error| match error {
            RateError::Unknown { .. } => InterpretError::Unrecognized(error.to_string()),
            RateError::Fetch(_) => InterpretError::External(error.to_string()),
        })
    }
}

#[async_trait]
impl Interpreter for CurrencyInterpreter {
    fn name(&self) -> &str {
        "currency"
    }

    async fn answer(&self, question: &Question) -> Result<Value, InterpretError> {
        let text = question.resolved_text()?;

        if let Some(caps) = CONVERSION.captures(&text) {
            let from = caps["from"].to_uppercase();
            let to = caps["to"].to_uppercase();
            if currency_entry(&from).is_some() && currency_entry(&to).is_some() {
                let rate = self.rate(&from, &to).await?;
                return Ok(match caps.name("amount") {
                    Some(amount) => {
                        let amount: f64 =
                            amount.as_str().replace(',', "").parse().map_err(|_| {
                                InterpretError::Unrecognized(format!(
                                    "bad amount: {}",
                                    amount.as_str()
                                ))
                            })?;
                        Value::Money(Money::new(amount * rate, &to, symbol_for(&to)))
                    }
                    None => Value::Money(Money::new(rate, &to, symbol_for(&to))),
                });
            }
        }

        if let Some(caps) = BARE_CODE.captures(&text) {
            let code = caps["code"].to_uppercase();
            if let Some((code, symbol, name)) = currency_entry(&code) {
                return Ok(Value::Text(format!("{symbol} {name} ({code})")));
            }
        }

        Err(InterpretError::Unrecognized(format!(
            "unknown currency: {text}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::StaticRates;
    use onebox_domain::{History, HistorySnapshot};

    fn interpreter() -> CurrencyInterpreter {
        CurrencyInterpreter::new(Arc::new(
            StaticRates::empty()
                .with_rate("USD", "GBP", 0.79)
                .with_rate("GBP", "USD", 1.2658),
        ))
    }

    fn question(text: &str) -> Question {
        Question::new(text, HistorySnapshot::empty())
    }

    #[tokio::test]
    async fn amount_conversion_answers_money() {
        let value = interpreter().answer(&question("10 USD to GBP")).await.unwrap();
        assert_eq!(value, Value::Money(Money::new(7.9, "GBP", "£")));
        assert_eq!(value.display_string(), "£ 7.90 GBP");
        assert_eq!(value.to_computable(), Value::Number(7.9));
    }

    #[tokio::test]
    async fn bare_pair_answers_one_unit_at_the_rate() {
        let value = interpreter().answer(&question("GBP to USD")).await.unwrap();
        assert_eq!(value, Value::Money(Money::new(1.2658, "USD", "$")));
        assert_eq!(value.display_string(), "$ 1.27 USD");
    }

    #[tokio::test]
    async fn lowercase_codes_and_in_separator() {
        let value = interpreter().answer(&question("10 usd in gbp")).await.unwrap();
        assert_eq!(value.display_string(), "£ 7.90 GBP");
    }

    #[tokio::test]
    async fn amounts_may_carry_thousands_separators() {
        let value = interpreter()
            .answer(&question("1,000 USD to GBP"))
            .await
            .unwrap();
        assert_eq!(value, Value::Money(Money::new(790.0, "GBP", "£")));
    }

    #[tokio::test]
    async fn bare_code_describes_the_currency() {
        let value = interpreter().answer(&question("GBP")).await.unwrap();
        assert_eq!(value, Value::Text("£ British pound (GBP)".to_string()));
    }

    #[tokio::test]
    async fn variable_references_resolve_before_recognition() {
        let mut history = History::new();
        history.append(Value::Number(10.0));
        let q = Question::new("var0 USD to GBP", history.snapshot());

        let value = interpreter().answer(&q).await.unwrap();
        assert_eq!(value.display_string(), "£ 7.90 GBP");
    }

    #[tokio::test]
    async fn unresolved_variable_is_a_local_failure() {
        let q = question("var5 USD to GBP");
        let error = interpreter().answer(&q).await.unwrap_err();
        assert!(matches!(error, InterpretError::UnresolvedVariable(_)));
    }

    #[tokio::test]
    async fn wrong_domain_is_unrecognized() {
        let error = interpreter()
            .answer(&question("two days from now"))
            .await
            .unwrap_err();
        assert!(matches!(error, InterpretError::Unrecognized(_)));
    }

    #[tokio::test]
    async fn unknown_codes_are_not_currencies() {
        // three letters, but not an ISO code we know
        let error = interpreter().answer(&question("foo to bar")).await.unwrap_err();
        assert!(matches!(error, InterpretError::Unrecognized(_)));
    }

    #[tokio::test]
    async fn missing_rate_is_unrecognized() {
        let empty = CurrencyInterpreter::new(Arc::new(StaticRates::empty()));
        let error = empty.answer(&question("10 USD to GBP")).await.unwrap_err();
        assert_eq!(error.to_string(), "no exchange rate for USD/GBP");
    }
}
