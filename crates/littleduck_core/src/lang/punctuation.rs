//! Punctuation vocabulary.
//!
//! The single-character delimiters and separators of LittleDuck. Each is its own terminal kind.
//!
//! ## Examples
//! ```rust
//! use littleduck_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char(';'), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::LBrace), "{");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PunctuationId {
    LBrace,
    RBrace,
    Colon,
    Comma,
    Semicolon,
    LParen,
    RParen,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub spelling: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LBrace, '{', "{"),
    info(PunctuationId::RBrace, '}', "}"),
    info(PunctuationId::Colon, ':', ":"),
    info(PunctuationId::Comma, ',', ","),
    info(PunctuationId::Semicolon, ';', ";"),
    info(PunctuationId::LParen, '(', "("),
    info(PunctuationId::RParen, ')', ")"),
];

/// Source spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).spelling
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: every PunctuationId has a PUNCTUATION entry")
}

/// Resolve a single character to a punctuation id.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

/// Resolve a spelling to a punctuation id.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.spelling == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: char, spelling: &'static str) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        spelling,
    }
}
