//! Interactive terminal console backed by rustyline.
//!
//! Implements the application's [`Console`] port against a real terminal:
//! the prompt text is buffered and handed to the line editor on the next
//! read, answers go to stdout, and line history persists under the user
//! data directory (or the configured path).

use async_trait::async_trait;
use onebox_application::{Console, ConsoleError, ReadOutcome};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

/// Console adapter for a live terminal session.
pub struct TerminalConsole {
    editor: DefaultEditor,
    pending_prompt: String,
    history_path: Option<PathBuf>,
}

impl TerminalConsole {
    /// Create a console, loading line history if available.
    ///
    /// `history_file` overrides the default location under the user data
    /// directory. History here is line-editing history, unrelated to the
    /// session's variable store.
    pub fn new(history_file: Option<&str>) -> Result<Self, ConsoleError> {
        let mut editor =
            DefaultEditor::new().map_err(|e| ConsoleError::Other(e.to_string()))?;

        let history_path = history_file
            .map(PathBuf::from)
            .or_else(|| dirs::data_dir().map(|dir| dir.join("onebox").join("history.txt")));

        if let Some(path) = &history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            pending_prompt: String::new(),
            history_path,
        })
    }
}

#[async_trait]
impl Console for TerminalConsole {
    async fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        // rustyline renders the prompt itself; keep it for the next read
        self.pending_prompt = text.to_string();
        Ok(())
    }

    async fn read_line(&mut self) -> Result<ReadOutcome, ConsoleError> {
        println!();
        match self.editor.readline(&self.pending_prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(ReadOutcome::Line(line))
            }
            // ^C abandons the line; the loop re-prompts on blank input
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Line(String::new())),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(ReadlineError::Io(e)) => Err(ConsoleError::Io(e)),
            Err(e) => Err(ConsoleError::Other(e.to_string())),
        }
    }

    async fn write_answer(&mut self, text: &str) -> Result<(), ConsoleError> {
        println!("{text}");
        Ok(())
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        if let Some(path) = &self.history_path {
            let _ = self.editor.save_history(path);
        }
    }
}
