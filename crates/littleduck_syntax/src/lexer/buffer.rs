//! Token sources the parser can pull from.
//!
//! The parser asks for one token at a time through [`TokenSource`]. A [`Lexer`] scans lazily; a [`TokenBuffer`]
//! replays tokens that were lexed up front.

use super::Lexer;
use super::tokens::Token;
use crate::diagnostics::LexicalError;

/// A pull-based, non-restartable stream of tokens ending in an idempotent `Eof`.
pub trait TokenSource {
    /// Produce the next token, or the lexical error found while looking for it.
    ///
    /// After an error the source has moved past the offending input; calling again continues the scan.
    fn next_token(&mut self) -> Result<Token, LexicalError>;
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Result<Token, LexicalError> {
        Lexer::next_token(self)
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Result<Token, LexicalError> {
        (**self).next_token()
    }
}

/// Replays a pre-lexed token slice.
///
/// If the slice does not end in `Eof`, one is synthesized just past the last token.
#[derive(Debug, Clone)]
pub struct TokenBuffer<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenBuffer<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn synthetic_eof(&self) -> Token {
        match self.tokens.last() {
            Some(last) => Token::eof(last.span.end, last.line),
            None => Token::eof(0, 1),
        }
    }
}

impl TokenSource for TokenBuffer<'_> {
    fn next_token(&mut self) -> Result<Token, LexicalError> {
        let Some(token) = self.tokens.get(self.pos) else {
            return Ok(self.synthetic_eof());
        };
        // Park on a trailing Eof so repeated calls keep returning it.
        if !token.is_eof() {
            self.pos += 1;
        }
        Ok(token.clone())
    }
}
