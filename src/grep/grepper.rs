//! Compile-and-scan over a word list.

use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::config::{GrepConfig, MatcherConfig};
use crate::error::{GrepError, Result};
use crate::grep::record::{GrepMode, MatchRecord};
use crate::matcher::{Matcher, PatternCompiler, RegexCompiler};

/// Compile `pattern` with default limits and scan `words`.
///
/// Records come back in word-list order, one per word that contains a match.
/// A valid pattern that matches nothing yields an empty vector.
pub fn grep(pattern: &str, words: &[String], mode: GrepMode) -> Result<Vec<MatchRecord>> {
    let matcher = RegexCompiler::default().compile(pattern)?;
    Ok(scan(&matcher, words, mode))
}

/// Scan `words` in order with an already compiled matcher.
pub fn scan<M: Matcher + ?Sized>(matcher: &M, words: &[String], mode: GrepMode) -> Vec<MatchRecord> {
    words
        .iter()
        .filter_map(|word| record_for(matcher, word, mode))
        .collect()
}

#[inline]
fn record_for<M: Matcher + ?Sized>(matcher: &M, word: &str, mode: GrepMode) -> Option<MatchRecord> {
    matcher
        .find_first(word)
        .map(|span| MatchRecord::from_match(word, span, mode))
}

/// Reusable match engine with a pluggable pattern compiler.
///
/// With parallel scanning enabled, lists at or above the configured threshold
/// are split across a dedicated thread pool. The output is identical to the
/// sequential scan, order included.
#[derive(Debug)]
pub struct Grepper<C: PatternCompiler = RegexCompiler> {
    compiler: C,
    config: GrepConfig,
    thread_pool: Option<Arc<ThreadPool>>,
}

impl Grepper<RegexCompiler> {
    /// Sequential grepper using the regex dialect with default limits.
    pub fn new() -> Self {
        Grepper {
            compiler: RegexCompiler::default(),
            config: GrepConfig::default(),
            thread_pool: None,
        }
    }

    /// Regex grepper built from configuration.
    pub fn from_config(matcher: MatcherConfig, config: GrepConfig) -> Result<Self> {
        Self::with_compiler(RegexCompiler::new(matcher), config)
    }
}

impl Default for Grepper<RegexCompiler> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PatternCompiler> Grepper<C> {
    /// Create a grepper around a custom compiler.
    pub fn with_compiler(compiler: C, config: GrepConfig) -> Result<Self> {
        let thread_pool = if config.parallel {
            let pool = ThreadPoolBuilder::new()
                .num_threads(config.threads())
                .thread_name(|i| format!("wordgrep-scan-{i}"))
                .build()
                .map_err(|e| {
                    GrepError::thread_pool(format!("Failed to create thread pool: {e}"))
                })?;
            Some(Arc::new(pool))
        } else {
            None
        };

        Ok(Grepper {
            compiler,
            config,
            thread_pool,
        })
    }

    /// Get the pattern compiler.
    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    /// Get the scan configuration.
    pub fn config(&self) -> &GrepConfig {
        &self.config
    }

    /// Compile `pattern` and scan `words`.
    pub fn grep(&self, pattern: &str, words: &[String], mode: GrepMode) -> Result<Vec<MatchRecord>> {
        let matcher = self.compiler.compile(pattern)?;
        Ok(self.scan(&matcher, words, mode))
    }

    /// Scan with an already compiled matcher.
    pub fn scan(&self, matcher: &C::Matcher, words: &[String], mode: GrepMode) -> Vec<MatchRecord> {
        match &self.thread_pool {
            Some(pool) if words.len() >= self.config.parallel_threshold => pool.install(|| {
                words
                    .par_iter()
                    .filter_map(|word| record_for(matcher, word, mode))
                    .collect()
            }),
            _ => scan(matcher, words, mode),
        }
    }
}
