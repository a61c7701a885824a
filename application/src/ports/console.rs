//! Console port: the three I/O effects that drive the REPL.
//!
//! The loop never touches a terminal directly; it emits prompts, reads
//! lines, and writes answers through this port. A test harness substitutes
//! a scripted sequence here with no change to dispatch or substitution
//! behavior.

use async_trait::async_trait;
use thiserror::Error;

/// Environmental failure of the I/O effects themselves.
///
/// Unlike interpreter failures these are not recoverable inside the loop;
/// they propagate to the caller, which decides process-level behavior.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("console error: {0}")]
    Other(String),
}

/// Result of one line-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of input, without the trailing newline.
    Line(String),
    /// End of input; the loop exits cleanly.
    Eof,
}

/// The only points where the core touches an external environment.
#[async_trait]
pub trait Console: Send {
    /// Emit the turn-indexed prompt. Prompts are not part of the
    /// historical transcript.
    async fn prompt(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Read the next line of input.
    async fn read_line(&mut self) -> Result<ReadOutcome, ConsoleError>;

    /// Display one answer.
    async fn write_answer(&mut self, text: &str) -> Result<(), ConsoleError>;
}
