#[cfg(test)]
/// Parser unit tests.
///
/// These cover acceptance of each grammar form and the exact shape of the single syntax error the recognizer
/// reports on rejection.
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<(), Vec<CompileError>> {
        parse(lexer::tokenize(source))
    }

    /// Parse `source` and return its only error, which must be a syntax error.
    fn syntax_error(source: &str) -> CompileError {
        let errors = parse_str(source).expect_err("source should be rejected");
        assert_eq!(errors.len(), 1, "expected exactly one error, got {errors:?}");
        assert_eq!(errors[0].kind(), ErrorKind::Syntax);
        errors.into_iter().next().unwrap()
    }

    fn wrap(body: &str) -> String {
        format!("program p;\n{{\n{body}\n}}\n")
    }

    const ROUND_TRIP: &str = r#"program test;
var x, y : int;
{
  x = 5;
  y = x + 3 * 2;
  if (y > 10) { print("big", y); } else { print("small"); };
}
"#;

    #[test]
    fn test_round_trip_program_is_accepted() {
        let tokens = lexer::lex(ROUND_TRIP).unwrap();
        let names: Vec<&str> = tokens.iter().map(|t| t.terminal().name()).collect();
        assert_eq!(
            names.join(" "),
            "PROGRAM ID ';' VAR ID ',' ID ':' T_INT ';' '{' ID ASSIGN INT ';' ID ASSIGN ID EXPOP INT TERMOP INT ';' \
             IF '(' ID COMPOP INT ')' '{' PRINT '(' LITERAL ',' ID ')' ';' '}' ELSE '{' PRINT '(' LITERAL ')' ';' \
             '}' ';' '}' EOF"
        );
        assert_eq!(parse_tokens(&tokens), Ok(()));
        assert_eq!(parse_str(ROUND_TRIP), Ok(()));
    }

    #[test]
    fn test_minimal_program() {
        assert_eq!(parse_str("program p; { }"), Ok(()));
        assert_eq!(parse_str("program p;{}"), Ok(()));
    }

    #[test]
    fn test_declaration_groups() {
        let source = "program p;\nvar a, b, c : int;\n    d : float;\n    e : int;\n{\n}\n";
        assert_eq!(parse_str(source), Ok(()));
    }

    #[test]
    fn test_statements() {
        for body in [
            "x = 1;",
            "x = 1.5;",
            "x = (a + b) * c / 2 - 1;",
            "x = -a;",
            "x = +3 * (-4);",
            "x = a <> b;",
            "print(x);",
            "print(\"a\", 1, \"b\", x * 2);",
            "if (a < b) { };",
            "if (a) { x = 1; } else { x = 2; };",
            "if (a > 1) { if (b) { print(\"deep\"); }; };",
        ] {
            assert_eq!(parse_str(&wrap(body)), Ok(()), "body should parse: {body}");
        }
    }

    #[test]
    fn test_missing_header_points_at_line_one() {
        let err = syntax_error("var x : int;\n{\n}\n");
        assert_eq!(err.line(), 1);
        assert_eq!(err.message(), "expected one of {PROGRAM}, found VAR");
    }

    #[test]
    fn test_missing_semicolon_lists_every_continuation() {
        let err = syntax_error("program p;\n{\n  x = 1\n}");
        assert_eq!(err.line(), 4);
        assert_eq!(err.message(), "expected one of {COMPOP, EXPOP, TERMOP, ';'}, found '}'");
    }

    #[test]
    fn test_missing_closing_brace_points_at_end() {
        let err = syntax_error("program p;\n{\n  x = 1;");
        assert_eq!(err.line(), 3);
        assert_eq!(err.message(), "expected one of {IF, PRINT, ID, '}'}, found EOF");
        let CompileError::Syntax(inner) = err else { unreachable!() };
        assert!(inner.help.is_some());
    }

    #[test]
    fn test_header_must_be_followed_by_decls_or_block() {
        let err = syntax_error("program p;\nx = 1;\n");
        assert_eq!(err.line(), 2);
        assert_eq!(err.message(), "expected one of {VAR, '{'}, found ID");
    }

    #[test]
    fn test_var_needs_a_group() {
        let err = syntax_error("program p;\nvar\n{\n}\n");
        assert_eq!(err.line(), 3);
        assert_eq!(err.message(), "expected one of {ID}, found '{'");
    }

    #[test]
    fn test_missing_type() {
        let err = syntax_error("program p;\nvar x : ;\n{}");
        assert_eq!(err.line(), 2);
        assert_eq!(err.message(), "expected one of {T_INT, T_FLOAT}, found ';'");
    }

    #[test]
    fn test_conditional_requires_trailing_semicolon() {
        let err = syntax_error("program p;\n{\n  if (x) { }\n}");
        assert_eq!(err.line(), 4);
        assert_eq!(err.message(), "expected one of {ELSE, ';'}, found '}'");
    }

    #[test]
    fn test_empty_print_is_rejected() {
        let err = syntax_error(&wrap("print();"));
        assert_eq!(
            err.message(),
            "expected one of {ID, INT, FLOAT, LITERAL, EXPOP, '('}, found ')'"
        );
    }

    #[test]
    fn test_trailing_comma_in_print_is_rejected() {
        let err = syntax_error(&wrap("print(x,);"));
        assert!(err.message().ends_with("found ')'"), "{}", err.message());
    }

    #[test]
    fn test_sign_only_leads_an_additive() {
        let err = syntax_error(&wrap("x = - - 1;"));
        assert_eq!(err.message(), "expected one of {ID, INT, FLOAT, '('}, found EXPOP");
        let err = syntax_error(&wrap("x = 2 * -3;"));
        assert_eq!(err.message(), "expected one of {ID, INT, FLOAT, '('}, found EXPOP");
    }

    #[test]
    fn test_chained_comparison_is_rejected() {
        let result = parse_symbol(NonTerminal::Expression, lexer::tokenize("a < b < c"));
        let errors = result.expect_err("chained comparison must be rejected");
        assert_eq!(errors[0].message(), "expected one of {EXPOP, TERMOP, EOF}, found COMPOP");

        let err = syntax_error(&wrap("x = a < b < c;"));
        assert_eq!(err.message(), "expected one of {EXPOP, TERMOP, ';'}, found COMPOP");
    }

    #[test]
    fn test_parse_symbol_requires_whole_input() {
        assert_eq!(parse_symbol(NonTerminal::Expression, lexer::tokenize("(a + 1) * 2")), Ok(()));
        assert_eq!(parse_symbol(NonTerminal::Statement, lexer::tokenize("print(\"x\");")), Ok(()));
        assert_eq!(parse_symbol(NonTerminal::Type, lexer::tokenize("float")), Ok(()));
        let errors = parse_symbol(NonTerminal::Factor, lexer::tokenize("a b")).unwrap_err();
        assert_eq!(errors[0].message(), "expected one of {EOF}, found ID");
    }

    #[test]
    fn test_trailing_tokens_after_program() {
        let err = syntax_error("program p;\n{\n}\nx");
        assert_eq!(err.line(), 4);
        assert_eq!(err.message(), "expected one of {EOF}, found ID");
    }

    #[test]
    fn test_first_syntax_error_only() {
        // Both statements are broken; only the first is reported.
        let err = syntax_error(&wrap("x = ;\ny = ;"));
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_lexical_error_does_not_stop_parse() {
        let errors = parse_str(&wrap("  x = 1 @ ;")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), ErrorKind::Lexical);
        assert_eq!(errors[0].line(), 3);
        assert_eq!(errors[0].message(), "illegal character '@'");
    }

    #[test]
    fn test_lexical_errors_come_before_syntax_error() {
        let errors = parse_str(&wrap("  x = @;\n  y = #;")).unwrap_err();
        let kinds: Vec<ErrorKind> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![ErrorKind::Lexical, ErrorKind::Syntax]);
        assert_eq!(errors[1].line(), 3);
        assert_eq!(errors[1].message(), "expected one of {ID, INT, FLOAT, EXPOP, '('}, found ';'");
    }

    #[test]
    fn test_fatal_lexical_errors_halt_the_parse() {
        let config = SyntaxConfig::new().with_lexical_errors_fatal(true);
        let errors = parse_source_with_config(&wrap("  x = @;\n  y = #;"), &config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), ErrorKind::Lexical);
        assert_eq!(errors[0].message(), "illegal character '@'");

        assert_eq!(parse_source_with_config(&wrap("x = 1;"), &config), Ok(()));
    }

    #[test]
    fn test_nesting_limit() {
        let config = SyntaxConfig::new().with_max_nesting_depth(3);
        assert_eq!(parse_source_with_config(&wrap("x = ((1));"), &config), Ok(()));

        let errors = parse_source_with_config(&wrap("x = (((1)));"), &config).unwrap_err();
        assert_eq!(errors[0].message(), "nesting exceeds the limit of 3 levels");

        let errors = parse_source_with_config(&wrap("if (a) { if (b) { if (c) { }; }; };"), &config).unwrap_err();
        assert_eq!(errors[0].message(), "nesting exceeds the limit of 3 levels");
    }

    #[test]
    fn test_deep_nesting_within_default_limit() {
        let depth = 200;
        let expr = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_str(&wrap(&expr)), Ok(()));

        let expr = format!("x = {}1{};", "(".repeat(1000), ")".repeat(1000));
        let err = syntax_error(&wrap(&expr));
        assert!(err.message().starts_with("nesting exceeds"));
    }

    #[test]
    fn test_parse_tokens_without_eof() {
        let mut tokens = lexer::lex("program p; { x = 1; }").unwrap();
        tokens.pop();
        assert_eq!(parse_tokens(&tokens), Ok(()));

        let errors = parse_tokens(&tokens[..tokens.len() - 1]).unwrap_err();
        assert_eq!(errors[0].message(), "expected one of {IF, PRINT, ID, '}'}, found EOF");
    }

    #[test]
    fn test_empty_input() {
        let err = syntax_error("");
        assert_eq!(err.line(), 1);
        assert_eq!(err.message(), "expected one of {PROGRAM}, found EOF");
    }
}
