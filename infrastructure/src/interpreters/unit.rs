//! Unit conversion interpreter.
//!
//! Recognizes `<number> <from> to|in|as <to>` after display-mode variable
//! substitution, against a built-in table of length, mass, temperature,
//! speed, duration, volume, and data units. Temperatures convert through
//! the affine kelvin scale; everything else is a linear factor to the
//! dimension's base unit. Results are rounded to 4 decimal places.

use async_trait::async_trait;
use onebox_application::{InterpretError, Interpreter};
use onebox_domain::{Question, Value};
use regex::Regex;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Length,
    Mass,
    Temperature,
    Speed,
    Duration,
    Volume,
    Data,
}

/// One unit: `base = value * scale + offset`. Only temperatures use a
/// non-zero offset.
#[derive(Debug, Clone, Copy)]
struct UnitDef {
    dimension: Dimension,
    scale: f64,
    offset: f64,
}

use Dimension::*;

fn linear(dimension: Dimension, scale: f64) -> UnitDef {
    UnitDef {
        dimension,
        scale,
        offset: 0.0,
    }
}

fn unit_def(name: &str) -> Option<UnitDef> {
    Some(match name {
        // length (base meter)
        "meter" | "metre" | "m" => linear(Length, 1.0),
        "kilometer" | "kilometre" | "km" => linear(Length, 1000.0),
        "centimeter" | "centimetre" | "cm" => linear(Length, 0.01),
        "millimeter" | "millimetre" | "mm" => linear(Length, 0.001),
        "mile" | "mi" => linear(Length, 1609.344),
        "yard" | "yd" => linear(Length, 0.9144),
        "foot" | "feet" | "ft" => linear(Length, 0.3048),
        "inch" | "inches" => linear(Length, 0.0254),

        // mass (base kilogram)
        "kilogram" | "kilo" | "kg" => linear(Mass, 1.0),
        "gram" | "g" => linear(Mass, 0.001),
        "milligram" | "mg" => linear(Mass, 1e-6),
        "pound" | "lb" | "lbs" => linear(Mass, 0.453_592_37),
        "ounce" | "oz" => linear(Mass, 0.028_349_523_125),
        "stone" => linear(Mass, 6.350_293_18),
        "tonne" | "ton" => linear(Mass, 1000.0),

        // temperature (base kelvin)
        "kelvin" | "k" => linear(Temperature, 1.0),
        "celsius" | "c" => UnitDef {
            dimension: Temperature,
            scale: 1.0,
            offset: 273.15,
        },
        "fahrenheit" | "f" => UnitDef {
            dimension: Temperature,
            scale: 5.0 / 9.0,
            offset: 459.67 * 5.0 / 9.0,
        },

        // speed (base meter/second)
        "m/s" => linear(Speed, 1.0),
        "mph" => linear(Speed, 0.44704),
        "kph" | "km/h" => linear(Speed, 1000.0 / 3600.0),
        "knot" => linear(Speed, 1852.0 / 3600.0),

        // duration (base second)
        "second" | "sec" | "s" => linear(Duration, 1.0),
        "millisecond" | "ms" => linear(Duration, 0.001),
        "minute" | "min" => linear(Duration, 60.0),
        "hour" | "hr" | "h" => linear(Duration, 3600.0),
        "day" => linear(Duration, 86_400.0),
        "week" => linear(Duration, 604_800.0),

        // volume (base liter)
        "liter" | "litre" | "l" => linear(Volume, 1.0),
        "milliliter" | "millilitre" | "ml" => linear(Volume, 0.001),
        "gallon" | "gal" => linear(Volume, 3.785_411_784),
        "quart" => linear(Volume, 0.946_352_946),
        "pint" => linear(Volume, 0.473_176_473),
        "cup" => linear(Volume, 0.236_588_236_5),

        // data (base byte)
        "byte" => linear(Data, 1.0),
        "bit" => linear(Data, 0.125),
        "kilobyte" | "kb" => linear(Data, 1024.0),
        "megabyte" | "mb" => linear(Data, 1024.0 * 1024.0),
        "gigabyte" | "gb" => linear(Data, 1024.0 * 1024.0 * 1024.0),
        "terabyte" | "tb" => linear(Data, 1024.0 * 1024.0 * 1024.0 * 1024.0),

        _ => return None,
    })
}

/// Lowercased exact name first, then a stripped regular plural.
fn lookup_unit(name: &str) -> Option<UnitDef> {
    let name = name.trim();
    unit_def(name).or_else(|| unit_def(name.strip_suffix('s')?))
}

fn convert(value: f64, from: UnitDef, to: UnitDef) -> Option<f64> {
    if from.dimension != to.dimension {
        return None;
    }
    let base = value * from.scale + from.offset;
    Some((base - to.offset) / to.scale)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

static CONVERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<number>-?\d+(?:\.\d+)?)\s*(?P<from>[a-z/ ]+?)\s+(?:to|in|as)\s+(?P<to>[a-z/ ]+?)$")
        .expect("unit conversion pattern")
});

/// Interpreter for unit conversions like `10 miles to kilometers`.
#[derive(Default)]
pub struct UnitInterpreter;

impl UnitInterpreter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Interpreter for UnitInterpreter {
    fn name(&self) -> &str {
        "unit"
    }

    async fn answer(&self, question: &Question) -> Result<Value, InterpretError> {
        let text = question.resolved_text()?.to_lowercase();
        let caps = CONVERSION.captures(text.trim()).ok_or_else(|| {
            InterpretError::Unrecognized(format!("not a unit conversion: {}", question.text()))
        })?;

        let number: f64 = caps["number"].parse().map_err(|_| {
            InterpretError::Unrecognized(format!("bad number: {}", &caps["number"]))
        })?;
        let from = lookup_unit(&caps["from"]).ok_or_else(|| {
            InterpretError::Unrecognized(format!("unknown unit: {}", caps["from"].trim()))
        })?;
        let to = lookup_unit(&caps["to"]).ok_or_else(|| {
            InterpretError::Unrecognized(format!("unknown unit: {}", caps["to"].trim()))
        })?;

        let converted = convert(number, from, to).ok_or_else(|| {
            InterpretError::Unrecognized(format!(
                "cannot convert {} to {}",
                caps["from"].trim(),
                caps["to"].trim()
            ))
        })?;

        Ok(Value::Number(round4(converted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onebox_domain::{History, HistorySnapshot};

    async fn answer(text: &str) -> Result<Value, InterpretError> {
        UnitInterpreter::new()
            .answer(&Question::new(text, HistorySnapshot::empty()))
            .await
    }

    async fn number(text: &str) -> f64 {
        match answer(text).await.unwrap() {
            Value::Number(n) => n,
            other => panic!("expected a number, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn miles_to_kilometers() {
        assert_eq!(number("10 miles to kilometers").await, 16.0934);
    }

    #[tokio::test]
    async fn temperature_is_affine() {
        assert_eq!(number("77 F to C").await, 25.0);
        assert_eq!(number("25 C to F").await, 77.0);
        assert_eq!(number("0 C to K").await, 273.15);
    }

    #[tokio::test]
    async fn mass_and_aliases() {
        assert_eq!(number("10 KG to lbs").await, 22.0462);
        assert_eq!(number("1 stone to pounds").await, 14.0);
    }

    #[tokio::test]
    async fn speed() {
        assert_eq!(number("100 kph to mph").await, 62.1371);
    }

    #[tokio::test]
    async fn separators_in_and_as() {
        assert_eq!(number("1 hour in minutes").await, 60.0);
        assert_eq!(number("2.5 l as pints").await, 5.2834);
    }

    #[tokio::test]
    async fn variable_references_resolve_first() {
        let mut history = History::new();
        history.append(Value::Number(10.0));
        let q = Question::new("var0 miles to kilometers", history.snapshot());

        let value = UnitInterpreter::new().answer(&q).await.unwrap();
        assert_eq!(value, Value::Number(16.0934));
    }

    #[tokio::test]
    async fn mismatched_dimensions_fail() {
        let error = answer("10 kg to km").await.unwrap_err();
        assert_eq!(error.to_string(), "cannot convert kg to km");
    }

    #[tokio::test]
    async fn unknown_units_fail() {
        let error = answer("10 florps to km").await.unwrap_err();
        assert_eq!(error.to_string(), "unknown unit: florps");
    }

    #[tokio::test]
    async fn non_conversions_fail() {
        assert!(answer("what time is it").await.is_err());
        assert!(answer("GBP to USD").await.is_err());
    }

    #[test]
    fn plural_stripping_prefers_exact_names() {
        // "celsius" must not be stripped to "celsiu"
        assert!(lookup_unit("celsius").is_some());
        assert!(lookup_unit("ms").is_some_and(|u| u.dimension == Duration));
        assert!(lookup_unit("meters").is_some_and(|u| u.dimension == Length));
    }
}
