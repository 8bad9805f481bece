//! Front-end configuration.

/// Default limit for nested parentheses and blocks.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Options shared by the lexer and parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxConfig {
    /// Treat `\r` as a blank (CRLF line endings). Off by default, so `\r` is an illegal character.
    pub accept_carriage_returns: bool,
    /// Stop at the first lexical error instead of skipping the character and continuing.
    pub lexical_errors_fatal: bool,
    /// Maximum nesting of parenthesized expressions and blocks.
    pub max_nesting_depth: usize,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            accept_carriage_returns: false,
            lexical_errors_fatal: false,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl SyntaxConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `\r` is accepted as whitespace
    pub fn with_carriage_returns(mut self, accept: bool) -> Self {
        self.accept_carriage_returns = accept;
        self
    }

    /// Set whether lexical errors abort the parse
    pub fn with_lexical_errors_fatal(mut self, fatal: bool) -> Self {
        self.lexical_errors_fatal = fatal;
        self
    }

    /// Set the nesting limit (values below 1 are raised to 1)
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SyntaxConfig::default();
        assert!(!config.accept_carriage_returns);
        assert!(!config.lexical_errors_fatal);
        assert_eq!(config.max_nesting_depth, DEFAULT_MAX_NESTING_DEPTH);
    }

    #[test]
    fn test_builder_chain() {
        let config = SyntaxConfig::new()
            .with_carriage_returns(true)
            .with_lexical_errors_fatal(true)
            .with_max_nesting_depth(8);
        assert!(config.accept_carriage_returns);
        assert!(config.lexical_errors_fatal);
        assert_eq!(config.max_nesting_depth, 8);
    }

    #[test]
    fn test_zero_depth_is_clamped() {
        assert_eq!(SyntaxConfig::new().with_max_nesting_depth(0).max_nesting_depth, 1);
    }
}
