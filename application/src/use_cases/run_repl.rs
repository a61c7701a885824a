//! Run REPL use case: the conversation state machine.
//!
//! One cycle (a *turn*) is prompt → read → dispatch → store → display.
//! The loop owns the only mutable reference to the history; questions see
//! it through snapshots taken at construction time, so substitution can
//! only ever reference turns strictly earlier than the current one. Turns
//! run strictly sequentially: an interpreter may suspend the current turn
//! (network etc.), but no second turn is ever in flight.

use crate::config::ReplParams;
use crate::ports::console::{Console, ConsoleError, ReadOutcome};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use crate::use_cases::resolve_answer::ResolveAnswerUseCase;
use onebox_domain::util::truncate_str;
use onebox_domain::{History, Question};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can end a session abnormally.
///
/// Interpreter failures never surface here; the chain converts them to a
/// diagnostic answer. Only environmental I/O failure escapes the loop.
#[derive(Error, Debug)]
pub enum ReplError {
    #[error("console failure: {0}")]
    Console(#[from] ConsoleError),
}

/// What a finished session looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplSummary {
    /// Number of turns that were dispatched, stored, and displayed.
    pub turns: u64,
}

/// Use case for running the interactive conversation loop.
pub struct RunReplUseCase {
    chain: ResolveAnswerUseCase,
    params: ReplParams,
    transcript: Arc<dyn TranscriptLogger>,
}

impl RunReplUseCase {
    pub fn new(chain: ResolveAnswerUseCase, params: ReplParams) -> Self {
        Self {
            chain,
            params,
            transcript: Arc::new(NoTranscriptLogger),
        }
    }

    /// Attach a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// Drive the loop until the exit command or end of input.
    ///
    /// The turn index is a `u64`; wrap-around would take longer than any
    /// process lifetime, so the increment is unchecked by design.
    pub async fn execute(&self, console: &mut dyn Console) -> Result<ReplSummary, ReplError> {
        let mut history = History::new();
        let mut turn: u64 = 0;

        loop {
            console.prompt(&self.params.prompt_for(turn)).await?;

            let line = match console.read_line().await? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Eof => break,
            };
            let text = line.trim();

            // The sentinel is checked before question construction so it
            // never produces interpreter failure records.
            if text == self.params.exit_command {
                break;
            }

            // Blank input re-prompts without consuming a turn.
            if text.is_empty() {
                continue;
            }

            let question = Question::new(text, history.snapshot());
            info!("turn {}: {}", turn, truncate_str(question.text(), 100));

            let resolution = self.chain.execute(&question).await;
            let display = resolution.value.display_string();

            history.append(resolution.value.to_computable());

            self.transcript.log(TranscriptEvent::new(
                "turn",
                serde_json::json!({
                    "turn": turn,
                    "question": question.text(),
                    "answered_by": resolution.answered_by,
                    "answer": display,
                    "failures": resolution.failures.len(),
                }),
            ));

            console.write_answer(&display).await?;
            turn += 1;
        }

        info!("session ended after {} turns", turn);
        Ok(ReplSummary { turns: turn })
    }
}
