//! Shell-style wildcard patterns for users who do not want regex syntax.
//!
//! Supports the following wildcards:
//! - `*` matches zero or more characters
//! - `?` matches exactly one character
//! - `\*` and `\?` match literal `*` and `?` characters
//!
//! A wildcard pattern must match the whole word.

use crate::config::MatcherConfig;
use crate::error::Result;
use crate::matcher::{PatternCompiler, RegexCompiler, RegexMatcher};

/// Compiles wildcard patterns by translating them into anchored regexes.
#[derive(Debug, Clone, Default)]
pub struct WildcardCompiler {
    inner: RegexCompiler,
}

impl WildcardCompiler {
    /// Create a wildcard compiler with the given limits.
    pub fn new(config: MatcherConfig) -> Self {
        WildcardCompiler {
            inner: RegexCompiler::new(config),
        }
    }

    /// Translate a wildcard pattern into regex syntax.
    pub fn to_regex(pattern: &str) -> String {
        let mut regex_pattern = String::with_capacity(pattern.len() + 8);
        regex_pattern.push('^');

        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => push_literal(&mut regex_pattern, escaped),
                    None => push_literal(&mut regex_pattern, '\\'),
                },
                '*' => regex_pattern.push_str(".*"),
                '?' => regex_pattern.push('.'),
                c => push_literal(&mut regex_pattern, c),
            }
        }

        regex_pattern.push('$');
        regex_pattern
    }
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

impl PatternCompiler for WildcardCompiler {
    type Matcher = RegexMatcher;

    fn compile(&self, pattern: &str) -> Result<RegexMatcher> {
        self.inner.compile(&Self::to_regex(pattern))
    }
}
