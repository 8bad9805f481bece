//! CLI module for the LittleDuck checker
//!
//! ## Commands
//!
//! - `<file>` - Check a source file (default action)
//! - `check <file>` / `check -c "<source>"` - Check a file or inline source
//! - `lex <file>` - Print the token stream
//! - `grammar` - Print the canonical grammar
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::frontend::config::{DEFAULT_MAX_NESTING_DEPTH, SyntaxConfig};
use crate::frontend::diagnostics::{ErrorFormat, RenderOptions};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Syntax checker for the LittleDuck language
#[derive(Parser, Debug)]
#[command(name = "littleduck")]
#[command(version = VERSION)]
#[command(about = "Syntax checker for the LittleDuck language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub options: CheckOptions,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that a program is syntactically valid
    Check {
        /// Source file to check
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Check inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE")]
        command: Option<String>,
    },

    /// Print the token stream of a source file
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the canonical grammar
    Grammar,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct CheckOptions {
    /// Accept CRLF line endings (`\r` is otherwise an illegal character)
    #[arg(long = "accept-crlf", global = true)]
    pub accept_crlf: bool,

    /// Stop at the first lexical error instead of skipping it
    #[arg(long = "fatal-lexical", global = true)]
    pub fatal_lexical: bool,

    /// Maximum nesting of blocks and parentheses
    #[arg(long = "max-depth", value_name = "N", global = true, default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    pub max_depth: usize,

    /// Diagnostic style
    #[arg(long = "error-format", value_enum, global = true, default_value_t = ErrorFormatArg::Human)]
    pub error_format: ErrorFormatArg,

    /// Disable colors in diagnostics
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormatArg {
    /// Report with source context
    Human,
    /// One line per error: `file:LINE: kind: message`
    Short,
}

impl CheckOptions {
    pub fn syntax_config(&self) -> SyntaxConfig {
        SyntaxConfig::new()
            .with_carriage_returns(self.accept_crlf)
            .with_lexical_errors_fatal(self.fatal_lexical)
            .with_max_nesting_depth(self.max_depth)
    }

    pub fn render_options(&self) -> RenderOptions {
        let format = match self.error_format {
            ErrorFormatArg::Human => ErrorFormat::Human,
            ErrorFormatArg::Short => ErrorFormat::Short,
        };
        RenderOptions {
            format,
            color: !self.no_color,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.options.syntax_config();
    let render = cli.options.render_options();
    tracing::debug!(?config, ?render, "resolved options");

    match cli.command {
        Some(Command::Check { file, command }) => execute_check(file, command, &config, &render),
        Some(Command::Lex { file }) => commands::lex_file(&file.to_string_lossy(), &config, &render),
        Some(Command::Grammar) => commands::print_grammar(),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy(), &config, &render)
            } else {
                Err(CliError::failure("Error: no input file (try `littleduck --help`)"))
            }
        }
    }
}

/// Handle the `check` subcommand with its two forms.
fn execute_check(
    file: Option<PathBuf>,
    code: Option<String>,
    config: &SyntaxConfig,
    render: &RenderOptions,
) -> CliResult<ExitCode> {
    if let Some(code) = code {
        if code.is_empty() {
            return Err(CliError::failure("Error: -c/--command requires source code string"));
        }
        commands::check_inline(&code, config, render)
    } else if let Some(file) = file {
        commands::check_file(&file.to_string_lossy(), config, render)
    } else {
        Err(CliError::failure("Error: check requires a file path or -c \"code\""))
    }
}

// ============================================================================
// Tests
// ============================================================================
