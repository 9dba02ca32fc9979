//! Request handling on top of the word store and the match engine.
//!
//! This is the seam an HTTP or HTML front end plugs into: it turns a pattern
//! and a highlight flag into a response that is either results, a user-facing
//! pattern error, or (via `Err`) a server fault.

use std::sync::Arc;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::config::WordgrepConfig;
use crate::error::{GrepError, Result};
use crate::grep::{GrepMode, Grepper, MatchRecord};
use crate::matcher::{PatternCompiler, RegexCompiler};
use crate::store::{WordList, WordStore};

/// A single search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrepRequest {
    /// Pattern to search for; empty means no search was asked for.
    pub pattern: String,
    /// Split matches into before/match/after for highlighting.
    pub highlight: bool,
}

impl GrepRequest {
    /// Create a new request.
    pub fn new<S: Into<String>>(pattern: S) -> Self {
        GrepRequest {
            pattern: pattern.into(),
            highlight: false,
        }
    }

    /// Request highlighted (segmented) results.
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }
}

/// Result of handling a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrepResponse {
    pub pattern: String,
    /// `None` when no search ran (empty pattern or invalid pattern).
    pub matches: Option<Vec<MatchRecord>>,
    /// Pattern compile message to show to the user.
    pub error: Option<String>,
    pub highlight: bool,
}

impl GrepResponse {
    /// Number of matches, zero when no search ran.
    pub fn match_count(&self) -> usize {
        self.matches.as_ref().map_or(0, Vec::len)
    }
}

/// Composition of a shared [`WordStore`] and a [`Grepper`].
#[derive(Debug)]
pub struct GrepService<C: PatternCompiler = RegexCompiler> {
    store: Arc<WordStore>,
    grepper: Grepper<C>,
}

impl GrepService<RegexCompiler> {
    /// Build a service, its store and its grepper from configuration.
    pub fn from_config(config: &WordgrepConfig) -> Result<Self> {
        config.validate()?;
        let store = Arc::new(WordStore::with_config(config.store.clone()));
        let grepper = Grepper::from_config(config.matcher.clone(), config.grep.clone())?;
        Ok(GrepService::new(store, grepper))
    }
}

impl<C: PatternCompiler> GrepService<C> {
    /// Create a service over an injected store.
    pub fn new(store: Arc<WordStore>, grepper: Grepper<C>) -> Self {
        GrepService { store, grepper }
    }

    /// The word store backing this service.
    pub fn store(&self) -> &Arc<WordStore> {
        &self.store
    }

    /// The match engine.
    pub fn grepper(&self) -> &Grepper<C> {
        &self.grepper
    }

    /// Load the word list ahead of the first request.
    pub fn warm_up(&self) -> Result<WordList> {
        self.store.get_words().inspect_err(|e| {
            error!("failed to load word list {}: {e}", self.store.path().display());
        })
    }

    /// Handle one request.
    ///
    /// Returns `Err` only for server faults. An invalid pattern produces an
    /// `Ok` response with `error` set.
    pub fn handle(&self, request: &GrepRequest) -> Result<GrepResponse> {
        let words = self.warm_up()?;

        let mut response = GrepResponse {
            pattern: request.pattern.clone(),
            matches: None,
            error: None,
            highlight: request.highlight,
        };

        if request.pattern.is_empty() {
            return Ok(response);
        }

        let mode = GrepMode::from_highlight(request.highlight);
        match self.grepper.grep(&request.pattern, &words, mode) {
            Ok(matches) => {
                debug!(
                    "pattern {:?} matched {} of {} words",
                    request.pattern,
                    matches.len(),
                    words.len()
                );
                response.matches = Some(matches);
            }
            Err(GrepError::InvalidPattern(msg)) => {
                debug!("rejected pattern {:?}", request.pattern);
                response.error = Some(msg);
            }
            Err(e) => return Err(e),
        }

        Ok(response)
    }
}
