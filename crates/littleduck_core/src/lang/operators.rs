//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the token class each operator is lexed as
//! (`ASSIGN`, `COMPOP`, `EXPOP`, `TERMOP`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact; `<>` is a single operator, never `<` followed by `>`.
//! - Binding strength lives in the grammar (`expression`, `additive`, `term`), not in this table.
//!
//! ## Examples
//! ```rust
//! use littleduck_core::lang::operators::{self, OperatorClass, OperatorId};
//!
//! assert_eq!(operators::from_str("<>"), Some(OperatorId::NotEq));
//! assert_eq!(operators::class(OperatorId::Minus), OperatorClass::Additive);
//! ```

/// Token class an operator is lexed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `=` (`ASSIGN`)
    Assignment,
    /// `<`, `>`, `<>` (`COMPOP`)
    Comparison,
    /// `+`, `-` (`EXPOP`)
    Additive,
    /// `*`, `/` (`TERMOP`)
    Multiplicative,
}

impl OperatorClass {
    /// Upper-case token kind name used in grammar listings and diagnostics.
    pub fn token_name(self) -> &'static str {
        match self {
            OperatorClass::Assignment => "ASSIGN",
            OperatorClass::Comparison => "COMPOP",
            OperatorClass::Additive => "EXPOP",
            OperatorClass::Multiplicative => "TERMOP",
        }
    }
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorId {
    Assign,

    // Comparison
    Lt,
    Gt,
    NotEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub class: OperatorClass,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Assign, "=", OperatorClass::Assignment),
    op(OperatorId::Lt, "<", OperatorClass::Comparison),
    op(OperatorId::Gt, ">", OperatorClass::Comparison),
    op(OperatorId::NotEq, "<>", OperatorClass::Comparison),
    op(OperatorId::Plus, "+", OperatorClass::Additive),
    op(OperatorId::Minus, "-", OperatorClass::Additive),
    op(OperatorId::Star, "*", OperatorClass::Multiplicative),
    op(OperatorId::Slash, "/", OperatorClass::Multiplicative),
];

/// Source spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Token class the operator is lexed as.
pub fn class(id: OperatorId) -> OperatorClass {
    info_for(id).class
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has an OPERATORS entry")
}

/// Resolve an exact spelling to an operator id.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

const fn op(id: OperatorId, spelling: &'static str, class: OperatorClass) -> OperatorInfo {
    OperatorInfo { id, spelling, class }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signs_are_additive() {
        assert_eq!(class(OperatorId::Plus), OperatorClass::Additive);
        assert_eq!(class(OperatorId::Minus), OperatorClass::Additive);
        assert_eq!(class(OperatorId::Star), OperatorClass::Multiplicative);
    }

    #[test]
    fn test_comparisons_share_one_class() {
        let comparisons: Vec<_> = OPERATORS
            .iter()
            .filter(|o| o.class == OperatorClass::Comparison)
            .map(|o| o.spelling)
            .collect();
        assert_eq!(comparisons, ["<", ">", "<>"]);
    }

    #[test]
    fn test_not_equal_is_exact() {
        assert_eq!(from_str("<>"), Some(OperatorId::NotEq));
        assert_eq!(from_str("<>="), None);
        assert_eq!(from_str("!="), None);
    }
}
