//! # wordgrep
//!
//! Regular-expression search over a dictionary held in memory.
//!
//! ## Features
//!
//! - Word list loaded once and shared across concurrent requests
//! - Safe compilation of untrusted patterns with size limits
//! - Plain or highlighted (before/match/after) results in word-list order
//! - Pluggable pattern engines (regex, wildcard)
//! - Optional parallel scanning for large lists
//!
//! ## Example
//!
//! ```
//! use wordgrep::grep::{grep, GrepMode, MatchRecord};
//! use wordgrep::store::WordList;
//!
//! let words = WordList::from(["cat", "dog", "catalog"]);
//! let matches = grep("cat", &words, GrepMode::Segmented).unwrap();
//! assert_eq!(matches[1], MatchRecord::segmented("", "cat", "alog"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod grep;
pub mod matcher;
pub mod service;
pub mod store;

pub mod prelude {
    pub use crate::config::WordgrepConfig;
    pub use crate::error::{GrepError, Result};
    pub use crate::grep::{GrepMode, Grepper, MatchRecord, grep};
    pub use crate::matcher::{Matcher, PatternCompiler, RegexCompiler, Span};
    pub use crate::service::{GrepRequest, GrepResponse, GrepService};
    pub use crate::store::{WordList, WordStore};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
