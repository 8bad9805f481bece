//! Canonical language vocabulary for the LittleDuck front end.
//!
//! This crate is intentionally small and dependency-free. It holds the registry tables that both the lexer
//! (spelling → id) and diagnostics/tooling (id → spelling, classification) rely on.
//!
//! ## Notes
//!
//! - No IO, no global state, no syntax-crate types.
//! - The lexer/parser own syntactic legality; registries only describe vocabulary.

pub mod lang;
