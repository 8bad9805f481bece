//! Integration tests for the LittleDuck front end

use std::fs;
use std::path::{Path, PathBuf};

use littleduck::diagnostics::{self, CompileError, ErrorKind};
use littleduck::{lexer, parser};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map(|e| e == "ld").unwrap_or(false))
        .collect();
    paths.sort();
    paths
}

/// Helper to run the full front end on a source file
fn check_file(path: &Path) -> Result<(), Vec<CompileError>> {
    let source = fs::read_to_string(path).unwrap();
    parser::parse(lexer::tokenize(&source))
}

fn short_diagnostics(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invalid").join(name);
    let errors = check_file(&path).expect_err("fixture should be rejected");
    errors
        .iter()
        .map(|e| diagnostics::format_short(name, e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Test that all valid fixtures are accepted
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());
    for path in paths {
        let result = check_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to be accepted, got errors: {:?}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());
    for path in paths {
        let result = check_file(&path);
        assert!(result.is_err(), "Expected {} to be rejected, but it was accepted", path.display());
    }
}

#[test]
fn test_invalid_fixture_diagnostics() {
    let cases = [
        ("missing_header.ld", "missing_header.ld:1: syntax error: expected one of {PROGRAM}, found VAR"),
        (
            "missing_brace.ld",
            "missing_brace.ld:6: syntax error: expected one of {IF, PRINT, ID, '}'}, found EOF",
        ),
        (
            "missing_semicolon.ld",
            "missing_semicolon.ld:4: syntax error: expected one of {COMPOP, EXPOP, TERMOP, ';'}, found ID",
        ),
        (
            "chained_comparison.ld",
            "chained_comparison.ld:3: syntax error: expected one of {EXPOP, TERMOP, ')'}, found COMPOP",
        ),
        (
            "illegal_character.ld",
            "illegal_character.ld:3: lexical error: illegal character '@'\n\
             illegal_character.ld:3: syntax error: expected one of {COMPOP, EXPOP, TERMOP, ';'}, found INT",
        ),
        (
            "unterminated_literal.ld",
            "unterminated_literal.ld:3: lexical error: illegal character '\"'\n\
             unterminated_literal.ld:3: syntax error: expected one of {COMPOP, EXPOP, TERMOP, ',', ')'}, found ID",
        ),
        (
            "double_sign.ld",
            "double_sign.ld:3: syntax error: expected one of {ID, INT, FLOAT, '('}, found EXPOP",
        ),
        (
            "conditional_without_semicolon.ld",
            "conditional_without_semicolon.ld:4: syntax error: expected one of {ELSE, ';'}, found '}'",
        ),
        (
            "empty_print.ld",
            "empty_print.ld:3: syntax error: expected one of {ID, INT, FLOAT, LITERAL, EXPOP, '('}, found ')'",
        ),
        (
            "var_without_group.ld",
            "var_without_group.ld:3: syntax error: expected one of {ID}, found '{'",
        ),
    ];
    for (name, expected) in cases {
        assert_eq!(short_diagnostics(name), expected, "diagnostics for {name}");
    }
}

/// CRLF sources only lex once carriage returns are opted into.
#[test]
fn test_crlf_fixture() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/crlf/crlf.ld");
    let errors = check_file(&path).unwrap_err();
    assert_eq!(errors.len(), 5);
    assert!(errors.iter().all(|e| e.kind() == ErrorKind::Lexical));
    assert_eq!(errors.iter().map(|e| e.line()).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);

    let source = fs::read_to_string(&path).unwrap();
    let config = littleduck::config::SyntaxConfig::new().with_carriage_returns(true);
    assert_eq!(parser::parse_source_with_config(&source, &config), Ok(()));
}

/// Lexical errors come first, then at most one syntax error.
#[test]
fn test_every_invalid_fixture_has_one_syntax_error_at_most() {
    for path in fixtures("invalid") {
        let errors = check_file(&path).unwrap_err();
        let syntax = errors.iter().filter(|e| e.kind() == ErrorKind::Syntax).count();
        assert!(syntax <= 1, "{} reported {syntax} syntax errors", path.display());
        if let Some(last_lexical) = errors.iter().rposition(|e| e.kind() == ErrorKind::Lexical) {
            let first_syntax = errors.iter().position(|e| e.kind() == ErrorKind::Syntax);
            assert!(first_syntax.map(|i| i > last_lexical).unwrap_or(true));
        }
    }
}

#[test]
fn test_round_trip_scenario() {
    let source = fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/round_trip.ld"))
        .unwrap();
    let tokens = lexer::lex(&source).unwrap();
    let kinds: Vec<&str> = tokens.iter().map(|t| t.terminal().name()).collect();
    assert_eq!(
        kinds,
        [
            "PROGRAM", "ID", "';'", "VAR", "ID", "','", "ID", "':'", "T_INT", "';'", "'{'", "ID", "ASSIGN", "INT",
            "';'", "ID", "ASSIGN", "ID", "EXPOP", "INT", "TERMOP", "INT", "';'", "IF", "'('", "ID", "COMPOP", "INT",
            "')'", "'{'", "PRINT", "'('", "LITERAL", "','", "ID", "')'", "';'", "'}'", "ELSE", "'{'", "PRINT", "'('",
            "LITERAL", "')'", "';'", "'}'", "';'", "'}'", "EOF",
        ]
    );
    assert_eq!(parser::parse_tokens(&tokens), Ok(()));
    assert_eq!(parser::parse_source(&source), Ok(()));
}

/// Test specific lexer behavior through the public API
mod lexer_tests {
    use littleduck::lexer::{TokenKind, lex};

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_float_is_one_token() {
        let tokens = lex("3.14").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Float(3.14));
    }

    #[test]
    fn test_not_equal_is_one_token() {
        let tokens = lex("<>").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind.spelling(), "<>");
    }

    #[test]
    fn test_illegal_character_line_and_continuation() {
        let errors = lex("program p;\n\n  x @ y").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 3);

        let tokens: Vec<_> = littleduck::lexer::tokenize("x @ y").filter_map(Result::ok).collect();
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[1].kind, TokenKind::Ident(name) if name == "y"));
    }
}

/// Command-level behavior, driven through the same entry point as the binary
mod cli_tests {
    use clap::Parser;
    use littleduck::cli::{Cli, ExitCode, execute};

    fn fixture(path: &str) -> String {
        format!("{}/tests/fixtures/{path}", env!("CARGO_MANIFEST_DIR"))
    }

    fn run(args: &[&str]) -> Result<ExitCode, littleduck::cli::CliError> {
        let mut argv = vec!["littleduck"];
        argv.extend_from_slice(args);
        execute(Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_check_valid_file() {
        assert_eq!(run(&[fixture("valid/hello.ld").as_str()]).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(&["check", fixture("valid/declarations.ld").as_str()]).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_check_invalid_file_fails_with_short_diagnostic() {
        let path = fixture("invalid/missing_header.ld");
        let err = run(&["--error-format", "short", path.as_str()]).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(
            err.message,
            format!("{path}:1: syntax error: expected one of {{PROGRAM}}, found VAR")
        );
    }

    #[test]
    fn test_check_inline() {
        assert!(run(&["check", "-c", "program p; { x = 1; }"]).is_ok());
        let err = run(&["check", "-c", "program p; { x = 1 }", "--error-format", "short"]).unwrap_err();
        assert!(err.message.starts_with("<command>:1: syntax error:"), "{}", err.message);
    }

    #[test]
    fn test_fatal_lexical_flag() {
        let path = fixture("invalid/illegal_character.ld");
        let err = run(&["check", path.as_str(), "--fatal-lexical", "--error-format", "short"]).unwrap_err();
        assert_eq!(err.message.lines().count(), 1);
        assert!(err.message.contains("lexical error"));
    }

    #[test]
    fn test_accept_crlf_flag() {
        let path = fixture("crlf/crlf.ld");
        let err = run(&["--error-format", "short", path.as_str()]).unwrap_err();
        assert_eq!(err.message.lines().count(), 5, "{}", err.message);
        assert!(err.message.lines().all(|l| l.ends_with("lexical error: illegal character '\\r'")));
        assert_eq!(run(&["--accept-crlf", path.as_str()]).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_max_depth_flag() {
        let path = fixture("valid/nested_conditionals.ld");
        assert!(run(&["--max-depth", "3", path.as_str()]).is_ok());
        let err = run(&["--max-depth", "2", "--error-format", "short", path.as_str()]).unwrap_err();
        assert!(err.message.contains("nesting exceeds the limit of 2 levels"), "{}", err.message);
    }

    #[test]
    fn test_lex_and_grammar_commands() {
        assert_eq!(run(&["lex", fixture("valid/hello.ld").as_str()]).unwrap(), ExitCode::SUCCESS);
        assert!(run(&["lex", fixture("invalid/illegal_character.ld").as_str()]).is_err());
        assert_eq!(run(&["grammar"]).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_missing_file() {
        let err = run(&["does-not-exist.ld"]).unwrap_err();
        assert!(err.message.starts_with("Cannot access file"));
    }
}
