//! Match records produced by a scan.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::matcher::Span;

/// Shape of the records a scan produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrepMode {
    /// Emit each matching word as-is.
    #[default]
    Plain,
    /// Split each matching word around its first match.
    Segmented,
}

impl GrepMode {
    /// Segmented when highlighting was requested, plain otherwise.
    pub fn from_highlight(highlight: bool) -> Self {
        if highlight {
            GrepMode::Segmented
        } else {
            GrepMode::Plain
        }
    }
}

/// One word that satisfied the pattern.
///
/// Serializes as a bare string in plain mode and as
/// `{"before": .., "match": .., "after": ..}` in segmented mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchRecord {
    /// The whole matching word.
    Plain(String),
    /// The word split around its first match; the three parts concatenate
    /// back to the word.
    Segmented {
        before: String,
        #[serde(rename = "match")]
        matched: String,
        after: String,
    },
}

impl MatchRecord {
    /// Build a record for `word` whose first match is `span`.
    ///
    /// `span` must lie on char boundaries of `word`.
    pub fn from_match(word: &str, span: Span, mode: GrepMode) -> Self {
        match mode {
            GrepMode::Plain => MatchRecord::Plain(word.to_string()),
            GrepMode::Segmented => MatchRecord::Segmented {
                before: word[..span.start].to_string(),
                matched: word[span.range()].to_string(),
                after: word[span.end..].to_string(),
            },
        }
    }

    /// Build a segmented record from its parts.
    pub fn segmented<B, M, A>(before: B, matched: M, after: A) -> Self
    where
        B: Into<String>,
        M: Into<String>,
        A: Into<String>,
    {
        MatchRecord::Segmented {
            before: before.into(),
            matched: matched.into(),
            after: after.into(),
        }
    }

    /// The full matching word.
    pub fn word(&self) -> Cow<'_, str> {
        match self {
            MatchRecord::Plain(word) => Cow::Borrowed(word),
            MatchRecord::Segmented {
                before,
                matched,
                after,
            } => Cow::Owned(format!("{before}{matched}{after}")),
        }
    }

    /// The `(before, match, after)` parts, if segmented.
    pub fn segments(&self) -> Option<(&str, &str, &str)> {
        match self {
            MatchRecord::Plain(_) => None,
            MatchRecord::Segmented {
                before,
                matched,
                after,
            } => Some((before, matched, after)),
        }
    }

    /// Which mode produced this record.
    pub fn mode(&self) -> GrepMode {
        match self {
            MatchRecord::Plain(_) => GrepMode::Plain,
            MatchRecord::Segmented { .. } => GrepMode::Segmented,
        }
    }
}

impl From<&str> for MatchRecord {
    fn from(word: &str) -> Self {
        MatchRecord::Plain(word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmentation() {
        let record = MatchRecord::from_match("catalog", Span::new(0, 3), GrepMode::Segmented);
        assert_eq!(record.segments(), Some(("", "cat", "alog")));
        assert_eq!(record.word(), "catalog");
        assert_eq!(record.mode(), GrepMode::Segmented);
    }

    #[test]
    fn test_plain_record_keeps_word() {
        let record = MatchRecord::from_match("catalog", Span::new(0, 3), GrepMode::Plain);
        assert_eq!(record, MatchRecord::from("catalog"));
        assert_eq!(record.segments(), None);
    }

    #[test]
    fn test_empty_span_segmentation() {
        let record = MatchRecord::from_match("word", Span::new(0, 0), GrepMode::Segmented);
        assert_eq!(record.segments(), Some(("", "", "word")));
    }

    #[test]
    fn test_json_shapes() {
        let plain = serde_json::to_value(MatchRecord::from("cat")).unwrap();
        assert_eq!(plain, serde_json::json!("cat"));

        let segmented = serde_json::to_value(MatchRecord::segmented("", "cat", "alog")).unwrap();
        assert_eq!(
            segmented,
            serde_json::json!({"before": "", "match": "cat", "after": "alog"})
        );

        let back: MatchRecord = serde_json::from_value(segmented).unwrap();
        assert_eq!(back, MatchRecord::segmented("", "cat", "alog"));
    }

    #[test]
    fn test_mode_from_highlight() {
        assert_eq!(GrepMode::from_highlight(true), GrepMode::Segmented);
        assert_eq!(GrepMode::from_highlight(false), GrepMode::Plain);
    }
}
