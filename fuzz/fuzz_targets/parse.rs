#![no_main]

use libfuzzer_sys::fuzz_target;
use littleduck::{SyntaxConfig, lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The lazy pipeline and the eager one must agree
        let lazy = parser::parse(lexer::tokenize(s));
        if let Ok(tokens) = lexer::lex(s) {
            assert_eq!(parser::parse_tokens(&tokens), lazy);
        }

        let strict = SyntaxConfig::new().with_lexical_errors_fatal(true).with_max_nesting_depth(16);
        let _ = parser::parse_source_with_config(s, &strict);
    }
});
