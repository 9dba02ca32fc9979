//! Pattern compilation behind a swappable matcher interface.
//!
//! The scan in [`crate::grep`] only needs two things from a pattern engine:
//! compile a string into something that can search a word, and report the
//! first match in that word. [`PatternCompiler`] and [`Matcher`] capture
//! exactly that, so the regex engine can be replaced without touching the
//! scan.

pub mod regex_matcher;
pub mod wildcard;

use std::fmt::Debug;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Result;

// Re-export commonly used types
pub use regex_matcher::*;
pub use wildcard::*;

/// Half-open byte range `[start, end)` of a match inside a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span matched the empty string.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// A compiled pattern.
///
/// Spans returned by [`Matcher::find_first`] must lie on `char` boundaries
/// of the searched word.
pub trait Matcher: Send + Sync + Debug {
    /// Locate the first match in `word`, if any.
    fn find_first(&self, word: &str) -> Option<Span>;

    /// Check whether `word` contains a match.
    fn is_match(&self, word: &str) -> bool {
        self.find_first(word).is_some()
    }

    /// The source pattern this matcher was compiled from.
    fn pattern(&self) -> &str;
}

/// Turns untrusted pattern strings into [`Matcher`]s.
pub trait PatternCompiler: Send + Sync + Debug {
    type Matcher: Matcher;

    /// Compile `pattern`, failing with [`crate::error::GrepError::InvalidPattern`]
    /// when it is malformed or exceeds configured limits.
    fn compile(&self, pattern: &str) -> Result<Self::Matcher>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basics() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.range(), 2..5);
        assert_eq!(Span::from(4..4), Span::new(4, 4));
        assert!(Span::from(4..4).is_empty());
    }
}
