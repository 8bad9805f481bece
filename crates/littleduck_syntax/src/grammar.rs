//! Grammar tables for the canonical LittleDuck grammar.
//!
//! Terminals and non-terminals are plain enums; the parser in [`crate::parser`] is a recursive-descent
//! recognizer with one method per [`NonTerminal`], and uses the first-sets here both to choose alternatives and to
//! describe what it expected when it rejects input.
//!
//! ```text
//! program      := PROGRAM ID ';' [ decls ] block
//! decls        := VAR declgroup+
//! declgroup    := idlist ':' type ';'
//! idlist       := ID (',' ID)*
//! type         := T_INT | T_FLOAT
//! block        := '{' statement* '}'
//! statement    := assignment | conditional | writing
//! assignment   := ID ASSIGN expression ';'
//! conditional  := IF '(' expression ')' block [ ELSE block ] ';'
//! writing      := PRINT '(' printitem (',' printitem)* ')' ';'
//! printitem    := expression | LITERAL
//! expression   := additive [ COMPOP additive ]
//! additive     := [ EXPOP ] term ( EXPOP term )*
//! term         := factor ( TERMOP factor )*
//! factor       := '(' expression ')' | ID | INT | FLOAT
//! ```
//!
//! ## Notes
//! - The grammar is LL(1): alternatives of a non-terminal never share a first terminal. The tests in this module
//!   check that against [`NonTerminal::alternatives`].

use std::collections::BTreeSet;
use std::fmt;

use littleduck_core::lang::keywords::{self, KeywordId};
use littleduck_core::lang::operators::{self, OperatorClass, OperatorId};
use littleduck_core::lang::punctuation::PunctuationId;

// ============================================================================
// Terminals
// ============================================================================

/// Token kinds as the grammar sees them.
///
/// Operator tokens collapse into their class: `+` and `-` are both [`Terminal::ExpOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terminal {
    // Keywords
    Program,
    Var,
    If,
    Else,
    Print,
    TInt,
    TFloat,

    // Identifiers and literals
    Id,
    Int,
    Float,
    Literal,

    // Operators
    Assign,
    CompOp,
    ExpOp,
    TermOp,

    // Punctuation
    LBrace,
    RBrace,
    Colon,
    Comma,
    Semicolon,
    LParen,
    RParen,

    Eof,
}

impl Terminal {
    pub fn from_keyword(id: KeywordId) -> Self {
        match id {
            KeywordId::Program => Terminal::Program,
            KeywordId::Var => Terminal::Var,
            KeywordId::If => Terminal::If,
            KeywordId::Else => Terminal::Else,
            KeywordId::Print => Terminal::Print,
            KeywordId::TInt => Terminal::TInt,
            KeywordId::TFloat => Terminal::TFloat,
        }
    }

    pub fn from_operator(id: OperatorId) -> Self {
        match operators::class(id) {
            OperatorClass::Assignment => Terminal::Assign,
            OperatorClass::Comparison => Terminal::CompOp,
            OperatorClass::Additive => Terminal::ExpOp,
            OperatorClass::Multiplicative => Terminal::TermOp,
        }
    }

    pub fn from_punctuation(id: PunctuationId) -> Self {
        match id {
            PunctuationId::LBrace => Terminal::LBrace,
            PunctuationId::RBrace => Terminal::RBrace,
            PunctuationId::Colon => Terminal::Colon,
            PunctuationId::Comma => Terminal::Comma,
            PunctuationId::Semicolon => Terminal::Semicolon,
            PunctuationId::LParen => Terminal::LParen,
            PunctuationId::RParen => Terminal::RParen,
        }
    }

    /// Display name used in grammar listings and diagnostics.
    ///
    /// Keyword and operator names come from their registries.
    pub fn name(self) -> &'static str {
        match self {
            Terminal::Program => keywords::token_name(KeywordId::Program),
            Terminal::Var => keywords::token_name(KeywordId::Var),
            Terminal::If => keywords::token_name(KeywordId::If),
            Terminal::Else => keywords::token_name(KeywordId::Else),
            Terminal::Print => keywords::token_name(KeywordId::Print),
            Terminal::TInt => keywords::token_name(KeywordId::TInt),
            Terminal::TFloat => keywords::token_name(KeywordId::TFloat),
            Terminal::Id => "ID",
            Terminal::Int => "INT",
            Terminal::Float => "FLOAT",
            Terminal::Literal => "LITERAL",
            Terminal::Assign => OperatorClass::Assignment.token_name(),
            Terminal::CompOp => OperatorClass::Comparison.token_name(),
            Terminal::ExpOp => OperatorClass::Additive.token_name(),
            Terminal::TermOp => OperatorClass::Multiplicative.token_name(),
            Terminal::LBrace => "'{'",
            Terminal::RBrace => "'}'",
            Terminal::Colon => "':'",
            Terminal::Comma => "','",
            Terminal::Semicolon => "';'",
            Terminal::LParen => "'('",
            Terminal::RParen => "')'",
            Terminal::Eof => "EOF",
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered set of terminals, displayed as `A, B, C`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TerminalSet(BTreeSet<Terminal>);

impl TerminalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, terminal: Terminal) -> bool {
        self.0.insert(terminal)
    }

    pub fn extend_from(&mut self, terminals: &[Terminal]) {
        self.0.extend(terminals.iter().copied());
    }

    pub fn contains(&self, terminal: Terminal) -> bool {
        self.0.contains(&terminal)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Terminal> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Terminal> for TerminalSet {
    fn from_iter<I: IntoIterator<Item = Terminal>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[Terminal]> for TerminalSet {
    fn from(terminals: &[Terminal]) -> Self {
        terminals.iter().copied().collect()
    }
}

impl fmt::Display for TerminalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(t.name())?;
        }
        Ok(())
    }
}

// ============================================================================
// Non-terminals
// ============================================================================

/// One variant per rule of the canonical grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NonTerminal {
    Program,
    Decls,
    DeclGroup,
    IdList,
    Type,
    Block,
    Statement,
    Assignment,
    Conditional,
    Writing,
    PrintItem,
    Expression,
    Additive,
    Term,
    Factor,
}

const FACTOR_FIRST: &[Terminal] = &[Terminal::Id, Terminal::Int, Terminal::Float, Terminal::LParen];
const EXPRESSION_FIRST: &[Terminal] = &[
    Terminal::Id,
    Terminal::Int,
    Terminal::Float,
    Terminal::ExpOp,
    Terminal::LParen,
];
const PRINT_ITEM_FIRST: &[Terminal] = &[
    Terminal::Id,
    Terminal::Int,
    Terminal::Float,
    Terminal::Literal,
    Terminal::ExpOp,
    Terminal::LParen,
];
const STATEMENT_FIRST: &[Terminal] = &[Terminal::If, Terminal::Print, Terminal::Id];
const TYPE_FIRST: &[Terminal] = &[Terminal::TInt, Terminal::TFloat];

impl NonTerminal {
    /// Every non-terminal, in rule order.
    pub const ALL: &'static [NonTerminal] = &[
        NonTerminal::Program,
        NonTerminal::Decls,
        NonTerminal::DeclGroup,
        NonTerminal::IdList,
        NonTerminal::Type,
        NonTerminal::Block,
        NonTerminal::Statement,
        NonTerminal::Assignment,
        NonTerminal::Conditional,
        NonTerminal::Writing,
        NonTerminal::PrintItem,
        NonTerminal::Expression,
        NonTerminal::Additive,
        NonTerminal::Term,
        NonTerminal::Factor,
    ];

    /// Rule name as written in the grammar.
    pub fn name(self) -> &'static str {
        match self {
            NonTerminal::Program => "program",
            NonTerminal::Decls => "decls",
            NonTerminal::DeclGroup => "declgroup",
            NonTerminal::IdList => "idlist",
            NonTerminal::Type => "type",
            NonTerminal::Block => "block",
            NonTerminal::Statement => "statement",
            NonTerminal::Assignment => "assignment",
            NonTerminal::Conditional => "conditional",
            NonTerminal::Writing => "writing",
            NonTerminal::PrintItem => "printitem",
            NonTerminal::Expression => "expression",
            NonTerminal::Additive => "additive",
            NonTerminal::Term => "term",
            NonTerminal::Factor => "factor",
        }
    }

    /// Right-hand side of the rule.
    pub fn production(self) -> &'static str {
        match self {
            NonTerminal::Program => "PROGRAM ID ';' [ decls ] block",
            NonTerminal::Decls => "VAR declgroup+",
            NonTerminal::DeclGroup => "idlist ':' type ';'",
            NonTerminal::IdList => "ID ( ',' ID )*",
            NonTerminal::Type => "T_INT | T_FLOAT",
            NonTerminal::Block => "'{' statement* '}'",
            NonTerminal::Statement => "assignment | conditional | writing",
            NonTerminal::Assignment => "ID ASSIGN expression ';'",
            NonTerminal::Conditional => "IF '(' expression ')' block [ ELSE block ] ';'",
            NonTerminal::Writing => "PRINT '(' printitem ( ',' printitem )* ')' ';'",
            NonTerminal::PrintItem => "expression | LITERAL",
            NonTerminal::Expression => "additive [ COMPOP additive ]",
            NonTerminal::Additive => "[ EXPOP ] term ( EXPOP term )*",
            NonTerminal::Term => "factor ( TERMOP factor )*",
            NonTerminal::Factor => "'(' expression ')' | ID | INT | FLOAT",
        }
    }

    /// Terminals that may begin a derivation of this non-terminal.
    ///
    /// None of the rules derive the empty string, so first-sets never contain `EOF`.
    pub fn first(self) -> &'static [Terminal] {
        match self {
            NonTerminal::Program => &[Terminal::Program],
            NonTerminal::Decls => &[Terminal::Var],
            NonTerminal::DeclGroup | NonTerminal::IdList | NonTerminal::Assignment => &[Terminal::Id],
            NonTerminal::Type => TYPE_FIRST,
            NonTerminal::Block => &[Terminal::LBrace],
            NonTerminal::Statement => STATEMENT_FIRST,
            NonTerminal::Conditional => &[Terminal::If],
            NonTerminal::Writing => &[Terminal::Print],
            NonTerminal::PrintItem => PRINT_ITEM_FIRST,
            NonTerminal::Expression | NonTerminal::Additive => EXPRESSION_FIRST,
            NonTerminal::Term | NonTerminal::Factor => FACTOR_FIRST,
        }
    }

    /// First-set of each alternative at this rule's choice point.
    ///
    /// Rules without a choice have a single alternative equal to [`NonTerminal::first`]. For `additive` the two
    /// alternatives are "leading sign" and "no sign".
    pub fn alternatives(self) -> &'static [&'static [Terminal]] {
        match self {
            NonTerminal::Type => &[&[Terminal::TInt], &[Terminal::TFloat]],
            NonTerminal::Statement => &[&[Terminal::Id], &[Terminal::If], &[Terminal::Print]],
            NonTerminal::PrintItem => &[EXPRESSION_FIRST, &[Terminal::Literal]],
            NonTerminal::Additive => &[&[Terminal::ExpOp], FACTOR_FIRST],
            NonTerminal::Factor => &[&[Terminal::LParen], &[Terminal::Id], &[Terminal::Int], &[Terminal::Float]],
            NonTerminal::Program => &[&[Terminal::Program]],
            NonTerminal::Decls => &[&[Terminal::Var]],
            NonTerminal::DeclGroup | NonTerminal::IdList | NonTerminal::Assignment => &[&[Terminal::Id]],
            NonTerminal::Block => &[&[Terminal::LBrace]],
            NonTerminal::Conditional => &[&[Terminal::If]],
            NonTerminal::Writing => &[&[Terminal::Print]],
            NonTerminal::Expression => &[EXPRESSION_FIRST],
            NonTerminal::Term => &[FACTOR_FIRST],
        }
    }

    /// `true` if `terminal` can begin this non-terminal.
    pub fn starts_with(self, terminal: Terminal) -> bool {
        self.first().contains(&terminal)
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render the whole grammar, one rule per line.
pub fn listing() -> String {
    let width = NonTerminal::ALL.iter().map(|n| n.name().len()).max().unwrap_or(0);
    let mut out = String::new();
    for nt in NonTerminal::ALL {
        out.push_str(&format!("{:<width$} := {}\n", nt.name(), nt.production(), width = width));
    }
    out
}
