//! Immutable, shareable word list snapshot.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

/// An ordered, immutable sequence of words in file order.
///
/// Cloning is cheap: all clones share the same allocation, so a cached list
/// can be handed to any number of concurrent scans without copying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Arc<[String]>,
}

impl WordList {
    /// Read one word per line from `reader`.
    ///
    /// Lines end at `\n` or `\r\n`; the terminator is stripped and nothing else
    /// is trimmed. Empty lines and duplicates are kept. A missing final newline
    /// does not produce an extra empty word.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let words = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
        Ok(Self::from(words))
    }

    /// Read a word list file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a word list held in memory, with the same line rules as
    /// [`WordList::from_reader`].
    pub fn parse_from_str(contents: &str) -> Self {
        Self::from(contents.lines().map(str::to_string).collect::<Vec<_>>())
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the word at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Iterate over the words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Whether two lists share the same underlying snapshot.
    pub fn ptr_eq(&self, other: &WordList) -> bool {
        Arc::ptr_eq(&self.words, &other.words)
    }
}

impl Deref for WordList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.words
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self {
            words: words.into(),
        }
    }
}

impl From<&[&str]> for WordList {
    fn from(words: &[&str]) -> Self {
        Self::from(words.iter().map(|w| w.to_string()).collect::<Vec<_>>())
    }
}

impl<const N: usize> From<[&str; N]> for WordList {
    fn from(words: [&str; N]) -> Self {
        Self::from(&words[..])
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
