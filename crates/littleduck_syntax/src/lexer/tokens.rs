//! Token types for the LittleDuck lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for `=`, comparators and arithmetic operators
//! - `Punctuation(PunctuationId)` for `{ } : , ; ( )`
//!
//! ## Notes
//! - Use `crate::token_helpers` for ergonomic token matching and for mapping a token to its grammar terminal.

use littleduck_core::lang::keywords::{self, KeywordId};
use littleduck_core::lang::operators::OperatorId;
use littleduck_core::lang::punctuation::PunctuationId;

/// Byte range `start..end` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(i64),
    Float(f64),
    /// String literal spelling, surrounding quotes included.
    Literal(String),

    // ========== Special ==========
    Eof,
}

/// A token with its kind, source span and 1-based starting line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, line: usize) -> Self {
        Self { kind, span, line }
    }

    /// Construct the end-of-stream sentinel.
    pub fn eof(offset: usize, line: usize) -> Self {
        Self::new(TokenKind::Eof, Span::new(offset, offset), line)
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
