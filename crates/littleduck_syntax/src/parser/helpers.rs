/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Shifting the lookahead (`bump`)
/// - Testing / consuming / expecting terminals (`check`, `eat`, `eat_any`, `expect`)
/// - Building the rejection (`unexpected`)
/// - Nesting depth accounting (`open`, `close`)
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current lookahead token without consuming it.
    fn peek(&self) -> &Token {
        &self.lookahead
    }

    /// Replace the lookahead with the next token from the source.
    fn bump(&mut self) -> PResult {
        self.lookahead = pull(&mut self.source, &mut self.lexical_errors, self.config.lexical_errors_fatal);
        self.expected.clear();
        self.check_lexical()
    }

    /// Stop if a lexical error has been seen and lexical errors are fatal.
    fn check_lexical(&self) -> PResult {
        if self.config.lexical_errors_fatal && !self.lexical_errors.is_empty() {
            Err(Halt::Lexical)
        } else {
            Ok(())
        }
    }

    /// Return `true` if the lookahead is `terminal`, recording it as expected here.
    fn check(&mut self, terminal: Terminal) -> bool {
        self.expected.insert(terminal);
        self.peek().terminal() == terminal
    }

    /// If the lookahead is `terminal`, consume it.
    fn eat(&mut self, terminal: Terminal) -> PResult<bool> {
        if self.check(terminal) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// If the lookahead is any of `terminals`, consume it.
    fn eat_any(&mut self, terminals: &[Terminal]) -> PResult<bool> {
        self.expected.extend_from(terminals);
        if terminals.contains(&self.peek().terminal()) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume `terminal` or reject.
    fn expect(&mut self, terminal: Terminal) -> PResult {
        if self.eat(terminal)? {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Reject the lookahead against everything tested at this position, plus `also`.
    fn unexpected_with(&mut self, also: &[Terminal]) -> Halt {
        self.expected.extend_from(also);
        self.unexpected()
    }

    /// Reject the lookahead against everything tested at this position.
    fn unexpected(&mut self) -> Halt {
        let expected = std::mem::take(&mut self.expected);
        Halt::Syntax(SyntaxError::unexpected(expected, self.peek()))
    }

    /// Consume an opening delimiter and enter one nesting level.
    fn open(&mut self, terminal: Terminal) -> PResult {
        if !self.check(terminal) {
            return Err(self.unexpected());
        }
        if self.depth >= self.config.max_nesting_depth {
            return Err(SyntaxError::nesting_too_deep(self.config.max_nesting_depth, self.peek()).into());
        }
        self.depth += 1;
        self.bump()
    }

    /// Consume a closing delimiter and leave one nesting level.
    fn close(&mut self, terminal: Terminal) -> PResult {
        self.expect(terminal)?;
        self.depth -= 1;
        Ok(())
    }
}
