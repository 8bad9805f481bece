//! Define the reserved keyword vocabulary for LittleDuck.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and token kind names.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Program` is an identifier, `program` is a keyword.
//! - Type names (`int`, `float`) are reserved words, not identifiers.
//!
//! ## Examples
//! ```rust
//! use littleduck_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::from_str("If"), None);
//! assert_eq!(keywords::as_str(KeywordId::TFloat), "float");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordId {
    // Program structure
    Program,
    Var,

    // Statements
    If,
    Else,
    Print,

    // Type names
    TInt,
    TFloat,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `token_name` is the upper-case token kind used in grammar listings and diagnostics (e.g. `T_INT`).
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub token_name: &'static str,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Program, "program", "PROGRAM"),
    info(KeywordId::Var, "var", "VAR"),
    info(KeywordId::If, "if", "IF"),
    info(KeywordId::Else, "else", "ELSE"),
    info(KeywordId::Print, "print", "PRINT"),
    info(KeywordId::TInt, "int", "T_INT"),
    info(KeywordId::TFloat, "float", "T_FLOAT"),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Upper-case token kind name (`PROGRAM`, `T_INT`, ...).
pub fn token_name(id: KeywordId) -> &'static str {
    info_for(id).token_name
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a KEYWORDS entry")
}

/// Resolve a spelling to a keyword id.
///
/// ## Returns
/// - `Some(KeywordId)` when `s` is exactly a reserved spelling, otherwise `None`.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, token_name: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        token_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_are_keywords() {
        assert_eq!(from_str("int"), Some(KeywordId::TInt));
        assert_eq!(from_str("float"), Some(KeywordId::TFloat));
        assert_eq!(token_name(KeywordId::TInt), "T_INT");
        assert_eq!(token_name(KeywordId::TFloat), "T_FLOAT");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("PRINT"), None);
        assert_eq!(from_str("Var"), None);
        assert_eq!(from_str("variable"), None);
    }
}
