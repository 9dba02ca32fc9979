//! Configuration for the word store, the pattern compiler and the scanner.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GrepError, Result};

/// Default word list file name.
pub const DEFAULT_WORD_LIST: &str = "en_GB-large.txt";

/// Configuration for the word store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordStoreConfig {
    /// Path of the newline-delimited word list.
    pub path: PathBuf,
}

impl Default for WordStoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_WORD_LIST),
        }
    }
}

impl WordStoreConfig {
    /// Create a configuration reading from the given path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

/// Limits and flags applied when compiling untrusted patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Approximate upper bound in bytes on the compiled program.
    pub size_limit: usize,

    /// Maximum nesting depth of the pattern's syntax tree.
    pub nest_limit: u32,

    /// Match letters case-insensitively.
    pub case_insensitive: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            size_limit: 1024 * 1024, // 1MB
            nest_limit: 100,
            case_insensitive: false,
        }
    }
}

/// Configuration for scanning the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrepConfig {
    /// Scan in parallel when the word list is large enough.
    pub parallel: bool,

    /// Minimum number of words before a parallel scan is used.
    pub parallel_threshold: usize,

    /// Thread pool size for parallel scans.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for GrepConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 50_000,
            thread_pool_size: None,
        }
    }
}

impl GrepConfig {
    /// Effective number of scanning threads.
    pub fn threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }
}

/// Top-level configuration, loadable from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordgrepConfig {
    pub store: WordStoreConfig,
    pub matcher: MatcherConfig,
    pub grep: GrepConfig,
}

impl WordgrepConfig {
    /// Create a new builder for WordgrepConfig.
    pub fn builder() -> WordgrepConfigBuilder {
        WordgrepConfigBuilder::default()
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: WordgrepConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every compile or scan fail.
    pub fn validate(&self) -> Result<()> {
        if self.store.path.as_os_str().is_empty() {
            return Err(GrepError::invalid_config("word list path is empty"));
        }
        if self.matcher.size_limit == 0 {
            return Err(GrepError::invalid_config("size_limit must be positive"));
        }
        if self.matcher.nest_limit == 0 {
            return Err(GrepError::invalid_config("nest_limit must be positive"));
        }
        if self.grep.thread_pool_size == Some(0) {
            return Err(GrepError::invalid_config(
                "thread_pool_size must be positive",
            ));
        }
        Ok(())
    }
}

/// Builder for [`WordgrepConfig`].
#[derive(Debug, Default)]
pub struct WordgrepConfigBuilder {
    config: WordgrepConfig,
}

impl WordgrepConfigBuilder {
    /// Set the word list path.
    pub fn word_list<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.store.path = path.into();
        self
    }

    /// Set the compiled program size limit.
    pub fn size_limit(mut self, limit: usize) -> Self {
        self.config.matcher.size_limit = limit;
        self
    }

    /// Set the pattern nesting limit.
    pub fn nest_limit(mut self, limit: u32) -> Self {
        self.config.matcher.nest_limit = limit;
        self
    }

    /// Match case-insensitively.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.config.matcher.case_insensitive = yes;
        self
    }

    /// Enable parallel scanning.
    pub fn parallel(mut self, yes: bool) -> Self {
        self.config.grep.parallel = yes;
        self
    }

    /// Set the word count at which parallel scanning kicks in.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.grep.parallel_threshold = threshold;
        self
    }

    /// Set the scanning thread pool size.
    pub fn thread_pool_size(mut self, size: usize) -> Self {
        self.config.grep.thread_pool_size = Some(size);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<WordgrepConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
