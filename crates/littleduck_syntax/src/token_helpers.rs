//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers map ID-based tokens onto grammar terminals and back to their source spelling.

use crate::grammar::Terminal;
use crate::lexer::{Token, TokenKind};
use littleduck_core::lang::{keywords, operators, punctuation};

impl TokenKind {
    /// Grammar terminal this token kind is matched as.
    pub fn terminal(&self) -> Terminal {
        match self {
            TokenKind::Keyword(id) => Terminal::from_keyword(*id),
            TokenKind::Operator(id) => Terminal::from_operator(*id),
            TokenKind::Punctuation(id) => Terminal::from_punctuation(*id),
            TokenKind::Ident(_) => Terminal::Id,
            TokenKind::Int(_) => Terminal::Int,
            TokenKind::Float(_) => Terminal::Float,
            TokenKind::Literal(_) => Terminal::Literal,
            TokenKind::Eof => Terminal::Eof,
        }
    }

    /// Source-like rendering of the token's value (empty for `Eof`).
    pub fn spelling(&self) -> String {
        match self {
            TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
            TokenKind::Operator(id) => operators::as_str(*id).to_string(),
            TokenKind::Punctuation(id) => punctuation::as_str(*id).to_string(),
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Int(v) => v.to_string(),
            TokenKind::Float(v) => format!("{v:?}"),
            TokenKind::Literal(text) => text.clone(),
            TokenKind::Eof => String::new(),
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.terminal()`.
    pub fn terminal(&self) -> Terminal {
        self.kind.terminal()
    }

    /// Return `true` if this is the end-of-stream sentinel.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
