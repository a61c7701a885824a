//! Full-stack session test: scripted console, real interpreters, fixed
//! reference time and preloaded rates.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use onebox_application::{
    Console, ConsoleError, Interpreter, ReadOutcome, ReplParams, ResolveAnswerUseCase,
    RunReplUseCase,
};
use onebox_infrastructure::{
    CurrencyInterpreter, DateTimeInterpreter, ExpressionInterpreter, StaticRates, UnitInterpreter,
};
use std::collections::VecDeque;
use std::sync::Arc;

/// Scripted console: feeds the question column and captures answers.
struct ScriptedConsole {
    inputs: VecDeque<String>,
    answers: Vec<String>,
}

impl ScriptedConsole {
    fn new(inputs: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            inputs: inputs.into_iter().map(String::from).collect(),
            answers: Vec::new(),
        }
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn prompt(&mut self, _text: &str) -> Result<(), ConsoleError> {
        Ok(())
    }

    async fn read_line(&mut self) -> Result<ReadOutcome, ConsoleError> {
        Ok(match self.inputs.pop_front() {
            Some(line) => ReadOutcome::Line(line),
            None => ReadOutcome::Eof,
        })
    }

    async fn write_answer(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.answers.push(text.to_string());
        Ok(())
    }
}

fn reference_time() -> DateTime<FixedOffset> {
    "2020-08-29T00:00:00+00:00".parse().unwrap()
}

fn session() -> RunReplUseCase {
    let rates = Arc::new(
        StaticRates::empty()
            .with_rate("USD", "GBP", 0.79)
            .with_rate("GBP", "USD", 1.2658),
    );
    let interpreters: Vec<Arc<dyn Interpreter>> = vec![
        Arc::new(ExpressionInterpreter::new()),
        Arc::new(CurrencyInterpreter::new(rates)),
        Arc::new(DateTimeInterpreter::with_reference(reference_time())),
        Arc::new(UnitInterpreter::new()),
    ];
    RunReplUseCase::new(ResolveAnswerUseCase::new(interpreters), ReplParams::default())
}

#[tokio::test]
async fn transcript() {
    let expected: &[(&str, &str)] = &[
        ("4 + 5", "9"),
        ("var0 + 3", "12"),
        ("now", "2020-08-29 00:00:00 +00:00"),
        ("bangkok time", "2020-08-29 07:00:00 +07:00"),
        ("12pm bangkok time to tokyo time", "2020-08-29 14:00:00 +09:00"),
        ("-PI", "-3.141592653589793"),
        ("10 miles to kilometers", "16.0934"),
        ("77 F to C", "25"),
        ("GBP", "£ British pound (GBP)"),
        ("GBP to USD", "$ 1.27 USD"),
        ("10 USD to GBP", "£ 7.90 GBP"),
        ("var10 * 2", "15.8"),
    ];

    let mut console = ScriptedConsole::new(
        expected
            .iter()
            .map(|(question, _)| *question)
            .chain(std::iter::once("exit")),
    );

    let summary = session().execute(&mut console).await.unwrap();

    assert_eq!(summary.turns, expected.len() as u64);
    let actual: Vec<(&str, &str)> = expected
        .iter()
        .map(|(question, _)| *question)
        .zip(console.answers.iter().map(String::as_str))
        .collect();
    assert_eq!(actual, expected.to_vec());
}

#[tokio::test]
async fn unanswerable_question_reports_every_interpreter_in_chain_order() {
    let mut console = ScriptedConsole::new(["colorless green ideas", "exit"]);

    let summary = session().execute(&mut console).await.unwrap();

    assert_eq!(summary.turns, 1);
    let diagnostic = &console.answers[0];
    let lines: Vec<&str> = diagnostic.lines().collect();
    assert_eq!(lines[0], "I don't know how to answer that!");
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("expression: "));
    assert!(lines[2].starts_with("currency: "));
    assert!(lines[3].starts_with("datetime: "));
    assert!(lines[4].starts_with("unit: "));
}

#[tokio::test]
async fn diagnostic_turns_keep_history_in_lockstep() {
    // turn 0 fails, turn 1 references the diagnostic's slot number
    let mut console = ScriptedConsole::new(["gibberish here", "var0", "exit"]);

    let summary = session().execute(&mut console).await.unwrap();

    assert_eq!(summary.turns, 2);
    // var0 holds the diagnostic text, which no interpreter can evaluate
    // further, so turn 1 is itself a diagnostic mentioning var0's content
    assert!(console.answers[0].starts_with("I don't know how to answer that!"));
    assert!(console.answers[1].starts_with("I don't know how to answer that!"));
}
