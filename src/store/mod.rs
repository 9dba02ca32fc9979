//! Word list loading and caching.
//!
//! [`WordList`] is the immutable snapshot that scans read from; [`WordStore`]
//! loads it once from disk and hands out shared clones.

pub mod word_list;
pub mod word_store;

// Re-export commonly used types
pub use word_list::*;
pub use word_store::*;
