//! Matcher backed by the `regex` crate.
//!
//! Matching is leftmost-first: among matches starting at the earliest
//! position, earlier alternatives win over longer ones, so `a|ab` against
//! `"ab"` reports `"a"`. Matching time is linear in the word length for every
//! pattern the crate accepts.

use regex::{Regex, RegexBuilder};

use crate::config::MatcherConfig;
use crate::error::{GrepError, Result};
use crate::matcher::{Matcher, PatternCompiler, Span};

/// A compiled regular expression.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// Compile with default limits.
    pub fn new(pattern: &str) -> Result<Self> {
        RegexCompiler::default().compile(pattern)
    }

    /// Borrow the underlying regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl Matcher for RegexMatcher {
    #[inline]
    fn find_first(&self, word: &str) -> Option<Span> {
        self.regex.find(word).map(|m| Span::new(m.start(), m.end()))
    }

    #[inline]
    fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compiles patterns in the `regex` crate dialect, enforcing size limits.
#[derive(Debug, Clone, Default)]
pub struct RegexCompiler {
    config: MatcherConfig,
}

impl RegexCompiler {
    /// Create a compiler with the given limits.
    pub fn new(config: MatcherConfig) -> Self {
        RegexCompiler { config }
    }

    /// Get the compiler configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }
}

impl PatternCompiler for RegexCompiler {
    type Matcher = RegexMatcher;

    fn compile(&self, pattern: &str) -> Result<RegexMatcher> {
        let regex = RegexBuilder::new(pattern)
            .size_limit(self.config.size_limit)
            .dfa_size_limit(self.config.size_limit)
            .nest_limit(self.config.nest_limit)
            .case_insensitive(self.config.case_insensitive)
            .build()
            .map_err(|e| GrepError::invalid_pattern(e.to_string()))?;

        Ok(RegexMatcher { regex })
    }
}
