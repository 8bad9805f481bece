//! LittleDuck front end
//!
//! - `lexer`: on-demand tokenization of source text
//! - `parser`: the LL(1) recognizer
//! - `grammar`: terminals, non-terminals and first-sets
//! - `diagnostics`: lexical/syntax errors and their rendering
//! - `config`: options shared by the lexer and parser

// Syntax components are provided by the littleduck_syntax crate.
pub use littleduck_syntax::{config, diagnostics, grammar, lexer, parser, token_helpers};

// Vocabulary registries (keywords, operators, punctuation).
pub use littleduck_core::lang;
