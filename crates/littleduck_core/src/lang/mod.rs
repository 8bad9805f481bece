//! LittleDuck language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators, and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry
//! tables instead of comparing strings.
//!
//! ## Examples
//! ```rust
//! use littleduck_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("program"), Some(KeywordId::Program));
//! assert_eq!(keywords::as_str(KeywordId::Program), "program");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
