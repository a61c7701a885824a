//! Application layer for onebox
//!
//! This crate contains the answer-resolution use cases and the ports they
//! drive. It depends only on the domain layer.
//!
//! Two use cases form the core:
//!
//! - [`ResolveAnswerUseCase`] — the evaluator chain: tries interpreters in
//!   a fixed order, first success wins, and aggregates every failure into
//!   a synthetic diagnostic answer when nobody can answer.
//! - [`RunReplUseCase`] — the conversation loop: prompt, read, dispatch,
//!   store, display, repeat. All I/O goes through the [`Console`] port so
//!   a scripted transcript can drive the same state machine in tests.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ReplParams;
pub use ports::{
    console::{Console, ConsoleError, ReadOutcome},
    interpreter::{FailureRecord, InterpretError, Interpreter},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::resolve_answer::{NO_ANSWER_MESSAGE, Resolution, ResolveAnswerUseCase};
pub use use_cases::run_repl::{ReplError, ReplSummary, RunReplUseCase};
