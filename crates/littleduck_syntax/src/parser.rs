//! Parser for the LittleDuck language
//!
//! A single-token-lookahead recursive-descent recognizer for the canonical grammar in [`crate::grammar`]. It pulls
//! tokens on demand from a [`TokenSource`], never re-scans text and builds no tree: the outcome is acceptance, or
//! the lexical errors seen plus the first syntax error.
//!
//! ## Examples
//!
//! ```rust
//! use littleduck_syntax::{lexer, parser};
//!
//! let source = "program p;\n{\n  print(\"hi\", 1 + 2);\n}\n";
//! assert!(parser::parse(lexer::tokenize(source)).is_ok());
//!
//! let errors = parser::parse_source("program p;\n{\n  x = 1\n}\n").unwrap_err();
//! assert_eq!(errors[0].line(), 4);
//! ```

use crate::config::SyntaxConfig;
use crate::diagnostics::{CompileError, LexicalError, SyntaxError};
use crate::grammar::{NonTerminal, Terminal, TerminalSet};
use crate::lexer::{Lexer, Token, TokenBuffer, TokenSource};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each grammar area in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
