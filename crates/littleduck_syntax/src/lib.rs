//! Syntax frontend for LittleDuck: lexer, grammar tables, parser, diagnostics.
//!
//! This crate is a *recognizer*: it decides whether source text is a syntactically valid LittleDuck program and,
//! if not, where the first problem is. It builds no syntax tree.
//!
//! ## Notes
//! - Lexical errors are reported and skipped; the first syntax error ends the parse.
//! - All state is per call (lexer offset/line, parser lookahead), so independent sources can be checked concurrently.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `littleduck_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use littleduck_syntax::{lexer, parser};
//!
//! let source = "program demo;\nvar x : int;\n{ x = 1 + 2; }\n";
//! assert!(parser::parse(lexer::tokenize(source)).is_ok());
//! ```

pub mod config;
pub mod diagnostics;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

pub use config::SyntaxConfig;
pub use lexer::Span;
