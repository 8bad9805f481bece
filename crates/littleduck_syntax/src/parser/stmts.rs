/// Blocks and statements.
///
/// Every statement starts with a distinct terminal (`ID`, `IF` or `PRINT`), so one token of lookahead picks the
/// production. Every statement, including a conditional, ends with `';'`.
impl<S: TokenSource> Parser<S> {
    fn block(&mut self) -> PResult {
        self.open(Terminal::LBrace)?;
        while !self.check(Terminal::RBrace) {
            self.statement()?;
        }
        self.close(Terminal::RBrace)
    }

    fn statement(&mut self) -> PResult {
        match self.peek().terminal() {
            Terminal::Id => self.assignment(),
            Terminal::If => self.conditional(),
            Terminal::Print => self.writing(),
            _ => Err(self.unexpected_with(NonTerminal::Statement.first())),
        }
    }

    fn assignment(&mut self) -> PResult {
        self.expect(Terminal::Id)?;
        self.expect(Terminal::Assign)?;
        self.expression()?;
        self.expect(Terminal::Semicolon)
    }

    fn conditional(&mut self) -> PResult {
        self.expect(Terminal::If)?;
        self.expect(Terminal::LParen)?;
        self.expression()?;
        self.expect(Terminal::RParen)?;
        self.block()?;
        if self.eat(Terminal::Else)? {
            self.block()?;
        }
        self.expect(Terminal::Semicolon)
    }

    fn writing(&mut self) -> PResult {
        self.expect(Terminal::Print)?;
        self.expect(Terminal::LParen)?;
        self.print_item()?;
        while self.eat(Terminal::Comma)? {
            self.print_item()?;
        }
        self.expect(Terminal::RParen)?;
        self.expect(Terminal::Semicolon)
    }

    fn print_item(&mut self) -> PResult {
        if self.eat(Terminal::Literal)? {
            return Ok(());
        }
        if NonTerminal::Expression.starts_with(self.peek().terminal()) {
            self.expression()
        } else {
            Err(self.unexpected_with(NonTerminal::PrintItem.first()))
        }
    }
}
