//! CLI entrypoint for onebox
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use onebox_application::{
    NoTranscriptLogger, ResolveAnswerUseCase, RunReplUseCase, TranscriptLogger,
};
use onebox_domain::{HistorySnapshot, Question};
use onebox_infrastructure::{ConfigLoader, JsonlTranscriptLogger, build_interpreters};
use onebox_presentation::{Cli, TerminalConsole, welcome_banner};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting onebox");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
    };

    // === Dependency Injection ===
    // Build the interpreter chain in the configured order
    let interpreters = build_interpreters(&config)?;
    let chain = ResolveAnswerUseCase::new(interpreters);
    info!("Interpreter chain: {}", chain.interpreter_names().join(", "));

    // One-shot mode: resolve a single question against an empty history
    if let Some(question) = cli.question {
        let question = Question::new(question, HistorySnapshot::empty());
        let resolution = chain.execute(&question).await;
        println!("{}", resolution.value.display_string());
        return Ok(());
    }

    let transcript: Arc<dyn TranscriptLogger> = match config
        .logging
        .transcript_file
        .as_deref()
        .and_then(JsonlTranscriptLogger::new)
    {
        Some(logger) => {
            info!("Transcript: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoTranscriptLogger),
    };

    if !cli.quiet {
        println!("{}", welcome_banner());
    }

    let repl =
        RunReplUseCase::new(chain, config.repl.to_params()).with_transcript_logger(transcript);
    let mut console = TerminalConsole::new(config.repl.history_file.as_deref())?;

    let summary = repl.execute(&mut console).await?;
    println!("Bye!");
    info!("Session ended after {} turns", summary.turns);

    Ok(())
}
