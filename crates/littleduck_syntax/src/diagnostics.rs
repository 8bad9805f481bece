//! Diagnostics for the LittleDuck front end.
//!
//! Two error families exist:
//! - [`LexicalError`]: a character (or digit run) matches no token rule. The lexer reports it and keeps scanning.
//! - [`SyntaxError`]: the lookahead token is not one the grammar allows at the current position. The parse stops.
//!
//! Both derive `miette::Diagnostic`, so they can be rendered with source context via [`format_error`], or as a
//! single line via [`format_short`].

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use thiserror::Error;

use crate::grammar::{Terminal, TerminalSet};
use crate::lexer::{Span, Token};

// ============================================================================
// Lexical errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexicalErrorKind {
    #[error("illegal character '{}'", printable(.0))]
    IllegalCharacter(char),
    #[error("integer literal {0} does not fit in 64 bits")]
    IntegerOverflow(String),
    #[error("float literal {0} is out of range")]
    FloatOverflow(String),
}

/// Control characters are shown escaped (`'\r'`); everything else as itself.
fn printable(c: &char) -> String {
    if c.is_control() {
        c.escape_debug().to_string()
    } else {
        c.to_string()
    }
}

/// A lexical error with its 1-based line and source span.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(littleduck::lexical))]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    pub line: usize,
    #[label("not a valid token")]
    pub span: Span,
}

impl LexicalError {
    pub fn illegal_character(character: char, line: usize, span: Span) -> Self {
        Self {
            kind: LexicalErrorKind::IllegalCharacter(character),
            line,
            span,
        }
    }

    pub fn integer_overflow(digits: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind: LexicalErrorKind::IntegerOverflow(digits.into()),
            line,
            span,
        }
    }

    pub fn float_overflow(digits: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind: LexicalErrorKind::FloatOverflow(digits.into()),
            line,
            span,
        }
    }
}

// ============================================================================
// Syntax errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxErrorKind {
    #[error("expected one of {{{expected}}}, found {found}")]
    Unexpected { expected: TerminalSet, found: Terminal },
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// The first syntax error of a parse, located at the offending lookahead token.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(littleduck::syntax))]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub line: usize,
    #[label("unexpected here")]
    pub span: Span,
    #[help]
    pub help: Option<String>,
}

impl SyntaxError {
    /// `found` did not belong to `expected`.
    pub fn unexpected(expected: TerminalSet, found: &Token) -> Self {
        let found_terminal = found.terminal();
        let help = if found.is_eof() {
            Some("the input ended before the program was complete".to_string())
        } else if expected.len() == 1 && expected.contains(Terminal::Semicolon) {
            Some("statements and declarations end with ';'".to_string())
        } else {
            None
        };
        Self {
            kind: SyntaxErrorKind::Unexpected {
                expected,
                found: found_terminal,
            },
            line: found.line,
            span: found.span,
            help,
        }
    }

    pub fn nesting_too_deep(limit: usize, at: &Token) -> Self {
        Self {
            kind: SyntaxErrorKind::NestingTooDeep { limit },
            line: at.line,
            span: at.span,
            help: None,
        }
    }

    /// Terminals the parser would have accepted, if this is an unexpected-token error.
    pub fn expected(&self) -> Option<&TerminalSet> {
        match &self.kind {
            SyntaxErrorKind::Unexpected { expected, .. } => Some(expected),
            SyntaxErrorKind::NestingTooDeep { .. } => None,
        }
    }

    /// Terminal actually found, if this is an unexpected-token error.
    pub fn found(&self) -> Option<Terminal> {
        match &self.kind {
            SyntaxErrorKind::Unexpected { found, .. } => Some(*found),
            SyntaxErrorKind::NestingTooDeep { .. } => None,
        }
    }
}

// ============================================================================
// Umbrella error
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Any error the front end reports.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Lexical(_) => ErrorKind::Lexical,
            CompileError::Syntax(_) => ErrorKind::Syntax,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            CompileError::Lexical(e) => e.line,
            CompileError::Syntax(e) => e.line,
        }
    }

    /// Message text without the file, line or error family.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// How diagnostics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorFormat {
    /// Multi-line report with the offending source line underlined.
    #[default]
    Human,
    /// `file:LINE: kind: message`
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub format: ErrorFormat,
    pub color: bool,
}

/// Render `error` according to `options`.
pub fn render(file_name: &str, source: &str, error: &CompileError, options: &RenderOptions) -> String {
    match options.format {
        ErrorFormat::Human => format_error(file_name, source, error, options.color),
        ErrorFormat::Short => format_short(file_name, error),
    }
}

/// Render a single-line diagnostic: `file:LINE: kind: message`.
pub fn format_short(file_name: &str, error: &CompileError) -> String {
    format!("{}:{}: {}: {}", file_name, error.line(), error.kind(), error.message())
}

/// Render a diagnostic with source context through miette's graphical handler.
pub fn format_error(file_name: &str, source: &str, error: &CompileError, color: bool) -> String {
    let theme = if color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let handler = GraphicalReportHandler::new_themed(theme);
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));

    let mut out = String::new();
    if handler.render_report(&mut out, &*report).is_err() {
        return format_short(file_name, error);
    }
    out
}
