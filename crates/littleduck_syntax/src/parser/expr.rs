/// Expressions.
///
/// ```text
/// expression := additive [ COMPOP additive ]
/// additive   := [ EXPOP ] term ( EXPOP term )*
/// term       := factor ( TERMOP factor )*
/// factor     := '(' expression ')' | ID | INT | FLOAT
/// ```
///
/// ## Notes
/// - At most one comparison: `a < b < c` is rejected at the second comparator.
/// - A sign is only allowed at the start of an `additive`, so `- - 1` and `2 * -3` are rejected; `(-3)` is fine.
/// - Each `'('` counts against `max_nesting_depth`.
impl<S: TokenSource> Parser<S> {
    fn expression(&mut self) -> PResult {
        self.additive()?;
        if self.eat(Terminal::CompOp)? {
            self.additive()?;
        }
        Ok(())
    }

    fn additive(&mut self) -> PResult {
        self.eat(Terminal::ExpOp)?;
        self.term()?;
        while self.eat(Terminal::ExpOp)? {
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> PResult {
        self.factor()?;
        while self.eat(Terminal::TermOp)? {
            self.factor()?;
        }
        Ok(())
    }

    fn factor(&mut self) -> PResult {
        if self.check(Terminal::LParen) {
            self.open(Terminal::LParen)?;
            self.expression()?;
            return self.close(Terminal::RParen);
        }
        if self.eat_any(&[Terminal::Id, Terminal::Int, Terminal::Float])? {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }
}
