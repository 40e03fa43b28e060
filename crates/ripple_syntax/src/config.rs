//! Syntax configuration for the Ripple tokenizer and parser.
//!
//! The only knob today is the shape of `for` loops. Range loops (`for i in 0 to n:`) need `to` to be a reserved
//! word; iterator loops (`for x in xs:`) leave `to` free as an identifier. Hand the same config to both
//! [`crate::lexer::lex_with_config`] and [`crate::parser::parse_with_config`].

/// Which `for` loop grammar is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForLoopSyntax {
    /// `for i in start to end:`; `to` is a keyword.
    #[default]
    Range,
    /// `for x in iterable:`; `to` is an ordinary identifier.
    Iter,
}

/// Tokenizer/parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxConfig {
    /// Accepted `for` loop form
    pub for_loop: ForLoopSyntax,
}

impl SyntaxConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accepted `for` loop form
    pub fn with_for_loop(mut self, for_loop: ForLoopSyntax) -> Self {
        self.for_loop = for_loop;
        self
    }

    /// Whether `to` is lexed as a keyword under this config.
    pub fn reserves_to(&self) -> bool {
        self.for_loop == ForLoopSyntax::Range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_range_loops() {
        let config = SyntaxConfig::default();
        assert_eq!(config.for_loop, ForLoopSyntax::Range);
        assert!(config.reserves_to());
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(SyntaxConfig::new(), SyntaxConfig::default());
    }

    #[test]
    fn test_with_for_loop_iter() {
        let config = SyntaxConfig::new().with_for_loop(ForLoopSyntax::Iter);
        assert_eq!(config.for_loop, ForLoopSyntax::Iter);
        assert!(!config.reserves_to());
    }

    #[test]
    fn test_builder_override() {
        let config = SyntaxConfig::new()
            .with_for_loop(ForLoopSyntax::Iter)
            .with_for_loop(ForLoopSyntax::Range);
        assert_eq!(config.for_loop, ForLoopSyntax::Range); // Last value wins
    }
}
