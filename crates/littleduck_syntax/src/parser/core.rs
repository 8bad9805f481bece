/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its constructors and the top-level `parse()` / `parse_as()`
/// entrypoints, plus the internal `Halt` type the grammar methods propagate with `?`.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Why a parse stopped early.
#[derive(Debug)]
enum Halt {
    /// The first syntax error; it ends the parse.
    Syntax(SyntaxError),
    /// A lexical error under `lexical_errors_fatal`; it is already in `lexical_errors`.
    Lexical,
}

impl From<SyntaxError> for Halt {
    fn from(err: SyntaxError) -> Self {
        Halt::Syntax(err)
    }
}

type PResult<T = ()> = Result<T, Halt>;

/// Parser state.
///
/// ## Notes
/// - `expected` holds every terminal tested at the current position since the last shift; it is what a rejection
///   reports as "expected one of".
/// - There is no recovery: the first syntax error ends the parse.
pub struct Parser<S: TokenSource> {
    source: S,
    lookahead: Token,
    expected: TerminalSet,
    lexical_errors: Vec<LexicalError>,
    config: SyntaxConfig,
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Create a new parser with the default [`SyntaxConfig`].
    pub fn new(source: S) -> Self {
        Self::with_config(source, SyntaxConfig::default())
    }

    /// Create a parser with explicit options. The first token is pulled immediately.
    pub fn with_config(mut source: S, config: SyntaxConfig) -> Self {
        let mut lexical_errors = Vec::new();
        let lookahead = pull(&mut source, &mut lexical_errors, config.lexical_errors_fatal);
        Self {
            source,
            lookahead,
            expected: TerminalSet::new(),
            lexical_errors,
            config,
            depth: 0,
        }
    }

    /// Recognize a complete program followed by end of input.
    ///
    /// ## Errors
    /// Returns every lexical error met (in source order) followed by the first syntax error, if any.
    pub fn parse(self) -> Result<(), Vec<CompileError>> {
        self.parse_as(NonTerminal::Program)
    }

    /// Recognize a single `start` non-terminal followed by end of input.
    pub fn parse_as(mut self, start: NonTerminal) -> Result<(), Vec<CompileError>> {
        let outcome = self.run(start);
        self.finish(outcome)
    }

    fn run(&mut self, start: NonTerminal) -> PResult {
        self.check_lexical()?;
        self.symbol(start)?;
        self.expect(Terminal::Eof)
    }

    /// Dispatch to the method recognizing `nt`.
    fn symbol(&mut self, nt: NonTerminal) -> PResult {
        match nt {
            NonTerminal::Program => self.program(),
            NonTerminal::Decls => self.decls(),
            NonTerminal::DeclGroup => self.decl_group(),
            NonTerminal::IdList => self.id_list(),
            NonTerminal::Type => self.type_name(),
            NonTerminal::Block => self.block(),
            NonTerminal::Statement => self.statement(),
            NonTerminal::Assignment => self.assignment(),
            NonTerminal::Conditional => self.conditional(),
            NonTerminal::Writing => self.writing(),
            NonTerminal::PrintItem => self.print_item(),
            NonTerminal::Expression => self.expression(),
            NonTerminal::Additive => self.additive(),
            NonTerminal::Term => self.term(),
            NonTerminal::Factor => self.factor(),
        }
    }

    fn finish(self, outcome: PResult) -> Result<(), Vec<CompileError>> {
        let mut errors: Vec<CompileError> = self.lexical_errors.into_iter().map(CompileError::from).collect();
        if let Err(Halt::Syntax(err)) = outcome {
            tracing::debug!(line = err.line, "rejected: {err}");
            errors.push(err.into());
        }

        if errors.is_empty() {
            tracing::debug!("accepted");
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Pull the next token, collecting lexical errors on the way.
///
/// In fatal mode the first error stops the pull and a stand-in `Eof` is returned; callers must check
/// `lexical_errors` before using it.
fn pull<S: TokenSource>(source: &mut S, errors: &mut Vec<LexicalError>, fatal: bool) -> Token {
    loop {
        match source.next_token() {
            Ok(token) => return token,
            Err(err) => {
                let stand_in = Token::eof(err.span.end, err.line);
                errors.push(err);
                if fatal {
                    return stand_in;
                }
            }
        }
    }
}
