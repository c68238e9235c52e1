//! Parser configuration.

/// Default bound on nested parentheses and nested list literals.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of parenthesised groups and list literals before the
    /// parse is aborted with `NestingTooDeep`.
    pub max_depth: usize,
}

impl ParserConfig {
    pub fn new() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
