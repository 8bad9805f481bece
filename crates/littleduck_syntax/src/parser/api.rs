// ============================================================================
// Public API
// ============================================================================

/// Recognize a program from any token source with the default options.
///
/// ## Errors
/// Every lexical error met (in source order), then the first syntax error if there is one.
#[tracing::instrument(skip_all)]
pub fn parse<S: TokenSource>(source: S) -> Result<(), Vec<CompileError>> {
    Parser::new(source).parse()
}

/// [`parse`] with explicit options.
#[tracing::instrument(skip_all)]
pub fn parse_with_config<S: TokenSource>(source: S, config: &SyntaxConfig) -> Result<(), Vec<CompileError>> {
    Parser::with_config(source, config.clone()).parse()
}

/// Lex and recognize `source` in one lazy pass.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> Result<(), Vec<CompileError>> {
    parse_source_with_config(source, &SyntaxConfig::default())
}

/// [`parse_source`] with explicit options; the lexer honours them too.
pub fn parse_source_with_config(source: &str, config: &SyntaxConfig) -> Result<(), Vec<CompileError>> {
    Parser::with_config(Lexer::with_config(source, config), config.clone()).parse()
}

/// Recognize an already-lexed token slice. A missing trailing `Eof` is supplied.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_tokens(tokens: &[Token]) -> Result<(), Vec<CompileError>> {
    Parser::new(TokenBuffer::new(tokens)).parse()
}

/// Recognize a single grammar symbol spanning the whole input, e.g. one expression.
#[tracing::instrument(skip_all, fields(symbol = %symbol))]
pub fn parse_symbol<S: TokenSource>(symbol: NonTerminal, source: S) -> Result<(), Vec<CompileError>> {
    Parser::new(source).parse_as(symbol)
}
