//! String literal scanning for the LittleDuck lexer
//!
//! A literal runs from `"` to the next `"` on the same line. There are no escapes; the token keeps both quotes.

use super::Lexer;
use super::tokens::{Span, Token, TokenKind};
use crate::diagnostics::LexicalError;

impl<'a> Lexer<'a> {
    /// Scan a string literal whose opening quote (at `start`) has already been consumed.
    ///
    /// Without a closing quote before the end of the line the quote itself is the error; nothing past it is
    /// consumed.
    pub(super) fn scan_literal(&mut self, start: usize, line: usize) -> Result<Token, LexicalError> {
        let rest = &self.source[self.current_pos..];
        let line_end = rest.find('\n').unwrap_or(rest.len());
        let Some(close) = rest[..line_end].find('"') else {
            return Err(LexicalError::illegal_character(
                '"',
                line,
                Span::new(start, self.current_pos),
            ));
        };

        let end = self.current_pos + close + 1;
        while self.current_pos < end {
            self.advance();
        }
        let text = self.source[start..end].to_string();
        Ok(self.make_token(TokenKind::Literal(text), start, line))
    }
}
