//! Lexer for the LittleDuck language
//!
//! Handles tokenization including:
//! - Keywords (program, var, if, else, print, int, float)
//! - Identifiers and literals (int, float, string)
//! - Operators (`=`, `<`, `>`, `<>`, `+`, `-`, `*`, `/`) and punctuation (`{ } : , ; ( )`)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Span)
//! - `numbers` - Numeric literal scanning
//! - `strings` - String literal scanning
//! - `buffer` - The `TokenSource` seam the parser pulls from
//!
//! ## Notes
//! - Scanning is lazy: [`Lexer::next_token`] does only the work needed for the next token.
//! - Blanks and newlines are never tokens; each `\n` advances the line counter.
//! - An illegal character is reported as a [`LexicalError`] and skipped; the next call resumes after it.

mod buffer;
mod numbers;
mod strings;
pub mod tokens;

pub use buffer::{TokenBuffer, TokenSource};
pub use tokens::{Span, Token, TokenKind, keyword_id};

use crate::config::SyntaxConfig;
use crate::diagnostics::LexicalError;
use littleduck_core::lang::operators::OperatorId;
use littleduck_core::lang::punctuation;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for LittleDuck source code.
///
/// Converts source text into a stream of tokens on demand. Once the input is exhausted every further call to
/// [`Lexer::next_token`] returns the same `Eof` sentinel.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    accept_carriage_returns: bool,
    /// Set once the iterator has yielded `Eof`.
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, &SyntaxConfig::default())
    }

    /// Create a lexer with explicit options.
    pub fn with_config(source: &'a str, config: &SyntaxConfig) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            accept_carriage_returns: config.accept_carriage_returns,
            exhausted: false,
        }
    }

    /// Current 1-based line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scan the next token.
    ///
    /// ## Errors
    /// Returns a [`LexicalError`] when the input at the current position matches no token rule. The offending
    /// input has already been consumed, so calling again continues with the rest of the source.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        self.skip_blanks();

        let start = self.current_pos;
        let line = self.line;

        let Some(c) = self.advance() else {
            return Ok(Token::eof(self.current_pos, self.line));
        };

        let result = match c {
            '"' => self.scan_literal(start, line),
            '0'..='9' => self.scan_number(start, line),
            _ if is_ident_start(c) => Ok(self.scan_identifier(start, line)),

            '<' => {
                if self.match_char('>') {
                    Ok(self.make_op(OperatorId::NotEq, start, line))
                } else {
                    Ok(self.make_op(OperatorId::Lt, start, line))
                }
            }
            '>' => Ok(self.make_op(OperatorId::Gt, start, line)),
            '+' => Ok(self.make_op(OperatorId::Plus, start, line)),
            '-' => Ok(self.make_op(OperatorId::Minus, start, line)),
            '*' => Ok(self.make_op(OperatorId::Star, start, line)),
            '/' => Ok(self.make_op(OperatorId::Slash, start, line)),
            '=' => Ok(self.make_op(OperatorId::Assign, start, line)),

            _ => match punctuation::from_char(c) {
                Some(id) => Ok(self.make_token(TokenKind::Punctuation(id), start, line)),
                None => Err(LexicalError::illegal_character(
                    c,
                    line,
                    Span::new(start, self.current_pos),
                )),
            },
        };

        match &result {
            Ok(token) => tracing::trace!(kind = ?token.kind, line = token.line, "token"),
            Err(err) => tracing::warn!(line = err.line, "{err}"),
        }
        result
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip spaces, tabs and newlines (and `\r` when configured), counting lines.
    fn skip_blanks(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' => {}
                '\r' if self.accept_carriage_returns => {}
                '\n' => self.line += 1,
                _ => break,
            }
            self.advance();
        }
    }

    fn make_token(&self, kind: TokenKind, start: usize, line: usize) -> Token {
        Token::new(kind, Span::new(start, self.current_pos), line)
    }

    fn make_op(&self, id: OperatorId, start: usize, line: usize) -> Token {
        self.make_token(TokenKind::Operator(id), start, line)
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, line: usize) -> Token {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // Look up identifier spelling in the reserved-word registry (no allocation for keywords).
        if let Some(id) = keyword_id(spelling) {
            self.make_token(TokenKind::Keyword(id), start, line)
        } else {
            self.make_token(TokenKind::Ident(spelling.to_string()), start, line)
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexicalError>;

    /// Yields every token up to and including `Eof`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.next_token();
        if matches!(&item, Ok(token) if token.is_eof()) {
            self.exhausted = true;
        }
        Some(item)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (`[a-zA-Z]`).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character can continue an identifier (`[a-zA-Z0-9_]`).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Create a lazy lexer over `source`.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Lex a whole source string eagerly.
///
/// The returned token vector always ends with an `Eof` token. On failure every lexical error found in the pass is
/// returned, in source order.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<LexicalError>> {
    lex_with_config(source, &SyntaxConfig::default())
}

/// [`lex`] with explicit options.
pub fn lex_with_config(source: &str, config: &SyntaxConfig) -> Result<Vec<Token>, Vec<LexicalError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for item in Lexer::with_config(source, config) {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }
    if errors.is_empty() { Ok(tokens) } else { Err(errors) }
}

// ============================================================================
// TESTS
// ============================================================================
