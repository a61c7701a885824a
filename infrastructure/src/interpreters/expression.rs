//! Arithmetic expression interpreter.
//!
//! Recursive descent over f64:
//! - `+`, `-`, `*`, `/`, `%` with the usual precedence
//! - unary minus and parentheses
//! - numeric literals, the constants `PI` and `E`
//! - the functions `sqrt(x)` and `abs(x)`
//! - `varN` history references
//!
//! History references use delegate-mode substitution: rather than splicing
//! value text into the question, the store snapshot is bound into an
//! explicit evaluation scope and the parser resolves `varN` identifiers
//! against live values. The scope is rebuilt per call from the question's
//! snapshot; the interpreter itself holds no state between turns.

use async_trait::async_trait;
use onebox_application::{InterpretError, Interpreter};
use onebox_domain::{HistorySnapshot, Question, Value, parse_variable_name};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
enum ExprError {
    #[error("not an expression: {0}")]
    Parse(String),

    #[error("unknown variable {0}")]
    UnknownVariable(String),

    #[error("{0} is not numeric")]
    NotNumeric(String),

    #[error("division by zero")]
    DivisionByZero,
}

impl From<ExprError> for InterpretError {
    fn from(error: ExprError) -> Self {
        match error {
            ExprError::UnknownVariable(name) => InterpretError::UnresolvedVariable(name),
            other => InterpretError::Unrecognized(other.to_string()),
        }
    }
}

/// Evaluation scope: history values addressable by their `varN` names.
struct Scope {
    bindings: HashMap<String, Option<f64>>,
}

impl Scope {
    fn from_snapshot(snapshot: &HistorySnapshot) -> Self {
        let bindings = snapshot
            .iter()
            .map(|(name, value)| (name, value.as_number()))
            .collect();
        Self { bindings }
    }

    fn resolve(&self, name: &str) -> Result<f64, ExprError> {
        match self.bindings.get(name) {
            Some(Some(n)) => Ok(*n),
            // stored, but not something arithmetic can consume
            Some(None) => Err(ExprError::NotNumeric(name.to_string())),
            None if parse_variable_name(name).is_some() => {
                Err(ExprError::UnknownVariable(name.to_string()))
            }
            None => match name {
                "PI" | "pi" => Ok(std::f64::consts::PI),
                "E" | "e" => Ok(std::f64::consts::E),
                _ => Err(ExprError::Parse(format!("unknown identifier {name}"))),
            },
        }
    }
}

/// Evaluate an expression string against a scope.
fn eval_expression(input: &str, scope: &Scope) -> Result<f64, ExprError> {
    let mut parser = ExprParser::new(input, scope);
    let result = parser.parse_expr()?;
    parser.expect_end()?;
    Ok(result)
}

/// Simple recursive descent parser for arithmetic expressions.
struct ExprParser<'a> {
    input: &'a str,
    pos: usize,
    scope: &'a Scope,
}

impl<'a> ExprParser<'a> {
    fn new(input: &'a str, scope: &'a Scope) -> Self {
        Self {
            input,
            pos: 0,
            scope,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() {
            let ch = self.input.as_bytes()[self.pos];
            if ch == b' ' || ch == b'\t' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        self.skip_whitespace();
        let ch = self.input[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn expect_end(&mut self) -> Result<(), ExprError> {
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(ExprError::Parse(format!(
                "unexpected trailing input: {:?}",
                &self.input[self.pos..]
            )));
        }
        Ok(())
    }

    /// Expression: `+` and `-` (lowest precedence).
    fn parse_expr(&mut self) -> Result<f64, ExprError> {
        let mut left = self.parse_term()?;

        loop {
            match self.peek() {
                Some('+') => {
                    self.advance();
                    left += self.parse_term()?;
                }
                Some('-') => {
                    self.advance();
                    left -= self.parse_term()?;
                }
                _ => break,
            }
        }

        Ok(left)
    }

    /// Term: `*`, `/`, `%` (higher precedence).
    fn parse_term(&mut self) -> Result<f64, ExprError> {
        let mut left = self.parse_unary()?;

        loop {
            match self.peek() {
                Some('*') => {
                    self.advance();
                    left *= self.parse_unary()?;
                }
                Some('/') => {
                    self.advance();
                    let right = self.parse_unary()?;
                    if right == 0.0 {
                        return Err(ExprError::DivisionByZero);
                    }
                    left /= right;
                }
                Some('%') => {
                    self.advance();
                    let right = self.parse_unary()?;
                    if right == 0.0 {
                        return Err(ExprError::DivisionByZero);
                    }
                    left %= right;
                }
                _ => break,
            }
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<f64, ExprError> {
        if self.peek() == Some('-') {
            self.advance();
            return Ok(-self.parse_unary()?);
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<f64, ExprError> {
        match self.peek() {
            Some('(') => {
                self.advance();
                let value = self.parse_expr()?;
                if self.advance() != Some(')') {
                    return Err(ExprError::Parse("missing closing parenthesis".to_string()));
                }
                Ok(value)
            }
            Some(ch) if ch.is_ascii_digit() => self.parse_number(),
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                let name = self.parse_identifier();
                if self.peek() == Some('(') {
                    self.advance();
                    let argument = self.parse_expr()?;
                    if self.advance() != Some(')') {
                        return Err(ExprError::Parse(
                            "missing closing parenthesis".to_string(),
                        ));
                    }
                    return apply_function(&name, argument);
                }
                self.scope.resolve(&name)
            }
            Some(ch) => Err(ExprError::Parse(format!("unexpected character {ch:?}"))),
            None => Err(ExprError::Parse("unexpected end of expression".to_string())),
        }
    }

    fn parse_number(&mut self) -> Result<f64, ExprError> {
        self.skip_whitespace();
        let start = self.pos;
        let mut seen_dot = false;
        while self.pos < self.input.len() {
            let ch = self.input.as_bytes()[self.pos];
            if ch.is_ascii_digit() {
                self.pos += 1;
            } else if ch == b'.' && !seen_dot {
                seen_dot = true;
                self.pos += 1;
            } else {
                break;
            }
        }
        let literal = &self.input[start..self.pos];
        literal
            .parse()
            .map_err(|_| ExprError::Parse(format!("bad number literal {literal:?}")))
    }

    fn parse_identifier(&mut self) -> String {
        self.skip_whitespace();
        let start = self.pos;
        while self.pos < self.input.len() {
            let ch = self.input.as_bytes()[self.pos];
            if ch.is_ascii_alphanumeric() || ch == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }
}

fn apply_function(name: &str, argument: f64) -> Result<f64, ExprError> {
    match name {
        "sqrt" => {
            if argument < 0.0 {
                return Err(ExprError::Parse("sqrt of a negative number".to_string()));
            }
            Ok(argument.sqrt())
        }
        "abs" => Ok(argument.abs()),
        _ => Err(ExprError::Parse(format!("unknown function {name}"))),
    }
}

/// Interpreter for arithmetic questions like `4 + 5` or `var0 * 2`.
#[derive(Default)]
pub struct ExpressionInterpreter;

impl ExpressionInterpreter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Interpreter for ExpressionInterpreter {
    fn name(&self) -> &str {
        "expression"
    }

    async fn answer(&self, question: &Question) -> Result<Value, InterpretError> {
        let scope = Scope::from_snapshot(question.variables());
        let result = eval_expression(question.text(), &scope)?;
        Ok(Value::Number(result))
    }
}
