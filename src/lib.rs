#![forbid(unsafe_code)]
//! LittleDuck front end
//!
//! LittleDuck is a small teaching language: a program header, typed variable declarations and a block of
//! assignments, conditionals and print statements. This crate bundles the syntax front end (lexer and LL(1)
//! recognizer) with the `littleduck` command-line checker.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a front-end bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod frontend;

pub use frontend::config;
pub use frontend::diagnostics;
pub use frontend::grammar;
pub use frontend::lexer;
pub use frontend::parser;

pub use frontend::config::SyntaxConfig;
pub use frontend::diagnostics::CompileError;
