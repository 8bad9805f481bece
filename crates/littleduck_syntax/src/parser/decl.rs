/// Program header and variable declarations.
///
/// ```text
/// program    := PROGRAM ID ';' [ decls ] block
/// decls      := VAR declgroup+
/// declgroup  := idlist ':' type ';'
/// idlist     := ID ( ',' ID )*
/// type       := T_INT | T_FLOAT
/// ```
impl<S: TokenSource> Parser<S> {
    fn program(&mut self) -> PResult {
        self.expect(Terminal::Program)?;
        self.expect(Terminal::Id)?;
        self.expect(Terminal::Semicolon)?;
        if self.check(Terminal::Var) {
            self.decls()?;
        }
        self.block()
    }

    /// `var` is followed by one or more groups; the next non-`ID` token ends the section.
    fn decls(&mut self) -> PResult {
        self.expect(Terminal::Var)?;
        self.decl_group()?;
        while self.check(Terminal::Id) {
            self.decl_group()?;
        }
        Ok(())
    }

    fn decl_group(&mut self) -> PResult {
        self.id_list()?;
        self.expect(Terminal::Colon)?;
        self.type_name()?;
        self.expect(Terminal::Semicolon)
    }

    fn id_list(&mut self) -> PResult {
        self.expect(Terminal::Id)?;
        while self.eat(Terminal::Comma)? {
            self.expect(Terminal::Id)?;
        }
        Ok(())
    }

    fn type_name(&mut self) -> PResult {
        if self.eat_any(NonTerminal::Type.first())? {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }
}
