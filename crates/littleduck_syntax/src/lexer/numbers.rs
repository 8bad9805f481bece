//! Number scanning for the LittleDuck lexer
//!
//! `\d+\.\d+` is a float; otherwise `\d+` is an integer. The float form is tried first, so `3.14` is one token.
//! A literal whose value cannot be represented (`i64` for integers, a finite `f64` for floats) is a lexical error.

use super::Lexer;
use super::tokens::{Span, Token, TokenKind};
use crate::diagnostics::LexicalError;

impl<'a> Lexer<'a> {
    /// Scan a numeric literal whose first digit (at `start`) has already been consumed.
    pub(super) fn scan_number(&mut self, start: usize, line: usize) -> Result<Token, LexicalError> {
        self.consume_digits();

        // A fractional part needs at least one digit after the dot.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume .
            self.consume_digits();
            let text = &self.source[start..self.current_pos];
            // `\d+\.\d+` always parses; only the magnitude can be out of range.
            return match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(self.make_token(TokenKind::Float(value), start, line)),
                _ => Err(LexicalError::float_overflow(
                    text,
                    line,
                    Span::new(start, self.current_pos),
                )),
            };
        }

        let text = &self.source[start..self.current_pos];
        match text.parse::<i64>() {
            Ok(value) => Ok(self.make_token(TokenKind::Int(value), start, line)),
            Err(_) => Err(LexicalError::integer_overflow(
                text,
                line,
                Span::new(start, self.current_pos),
            )),
        }
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}
