//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use crate::frontend::config::SyntaxConfig;
use crate::frontend::diagnostics::{self, CompileError, RenderOptions};
use crate::frontend::grammar;
use crate::frontend::lexer::{Lexer, Token};
use crate::frontend::parser;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (16 MiB)
///
/// Files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Display name used for `check -c` sources.
pub const INLINE_SOURCE_NAME: &str = "<command>";

/// Read a source file with a size limit.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed or is not valid UTF-8
/// - The file exceeds `MAX_SOURCE_SIZE` (16 MiB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Check a source file.
pub fn check_file(file_path: &str, config: &SyntaxConfig, render: &RenderOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    check_source(file_path, &source, config, render)
}

/// Check source passed on the command line.
pub fn check_inline(code: &str, config: &SyntaxConfig, render: &RenderOptions) -> CliResult<ExitCode> {
    check_source(INLINE_SOURCE_NAME, code, config, render)
}

/// Recognize `source`, printing `<name>: ok` on acceptance.
pub fn check_source(name: &str, source: &str, config: &SyntaxConfig, render: &RenderOptions) -> CliResult<ExitCode> {
    match parser::parse_source_with_config(source, config) {
        Ok(()) => {
            println!("{name}: ok");
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => Err(CliError::failure(render_errors(name, source, &errors, render))),
    }
}

/// Print the token stream of a file, then fail if any lexical error was found.
pub fn lex_file(file_path: &str, config: &SyntaxConfig, render: &RenderOptions) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let (dump, errors) = dump_tokens(&source, config);
    print!("{dump}");

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(render_errors(file_path, &source, &errors, render)))
    }
}

/// Print the canonical grammar.
pub fn print_grammar() -> CliResult<ExitCode> {
    print!("{}", grammar::listing());
    Ok(ExitCode::SUCCESS)
}

/// Lex `source` into a printable dump (one token per line) and the lexical errors met.
pub fn dump_tokens(source: &str, config: &SyntaxConfig) -> (String, Vec<CompileError>) {
    let mut dump = String::new();
    let mut errors = Vec::new();
    for item in Lexer::with_config(source, config) {
        match item {
            Ok(token) => {
                dump.push_str(&format_token(&token));
                dump.push('\n');
            }
            Err(err) => errors.push(err.into()),
        }
    }
    (dump, errors)
}

/// `LINE  KIND  VALUE`, with the value omitted for `EOF`.
pub fn format_token(token: &Token) -> String {
    let line = format!("{:<4}  {:<8}  {}", token.line, token.terminal().name(), token.kind.spelling());
    line.trim_end().to_string()
}

/// Render every error, one diagnostic after another.
fn render_errors(name: &str, source: &str, errors: &[CompileError], render: &RenderOptions) -> String {
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&diagnostics::render(name, source, err, render));
        if !msg.ends_with('\n') {
            msg.push('\n');
        }
    }
    msg.trim_end().to_string()
}
