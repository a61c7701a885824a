//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for onebox
#[derive(Parser, Debug)]
#[command(name = "onebox")]
#[command(author, version, about = "Ask anything, get one answer")]
#[command(long_about = r#"
onebox answers free-text questions by trying a chain of interpreters
(arithmetic expressions, currency, date/time, unit conversion) until one
of them produces an answer. Every answer is kept as a numbered history
variable (var0, var1, ...) that later questions can reference.

Without a question it starts an interactive session; type `exit` to leave.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./onebox.toml       Project-level config
3. ~/.config/onebox/config.toml   Global config

Example:
  onebox "10 miles to kilometers"
  onebox
  0> 4 + 5
  9
  1> var0 * 2
  18
"#)]
pub struct Cli {
    /// Answer a single question and exit (omit to start the REPL)
    pub question: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
