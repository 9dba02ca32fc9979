//! Lazily populated word list cache.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{debug, info};
use parking_lot::{Mutex, RwLock};

use crate::config::WordStoreConfig;
use crate::error::Result;
use crate::store::word_list::WordList;

/// Cache of the dictionary, loaded from disk on first use.
///
/// The store is an explicit object owned by whoever composes the service, not
/// a process global. Concurrent first calls to [`WordStore::get_words`]
/// collapse into a single read of the backing file; every caller gets the
/// same snapshot. A failed load leaves the cache empty so the next call
/// retries.
#[derive(Debug)]
pub struct WordStore {
    config: WordStoreConfig,
    cache: RwLock<Option<WordList>>,
    /// Serializes loads; held across check-and-populate.
    load_lock: Mutex<()>,
    loads: AtomicUsize,
}

impl WordStore {
    /// Create a store reading from `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(WordStoreConfig::new(path.as_ref()))
    }

    /// Create a store from a configuration.
    pub fn with_config(config: WordStoreConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(None),
            load_lock: Mutex::new(()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Create a store whose cache is already populated.
    ///
    /// The configured path is only read again after [`WordStore::invalidate`].
    pub fn preloaded(config: WordStoreConfig, words: WordList) -> Self {
        let store = Self::with_config(config);
        *store.cache.write() = Some(words);
        store
    }

    /// Path of the backing word list.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Return the cached word list, loading it on first use.
    pub fn get_words(&self) -> Result<WordList> {
        if let Some(words) = self.cached() {
            return Ok(words);
        }

        let _guard = self.load_lock.lock();

        // Another caller may have finished loading while we waited.
        if let Some(words) = self.cached() {
            debug!("word list loaded by concurrent caller");
            return Ok(words);
        }

        let words = self.load()?;
        *self.cache.write() = Some(words.clone());
        Ok(words)
    }

    /// Drop the cached list; the next [`WordStore::get_words`] reloads it.
    pub fn invalidate(&self) {
        let _guard = self.load_lock.lock();
        if self.cache.write().take().is_some() {
            debug!("invalidated word list cache for {}", self.path().display());
        }
    }

    /// Discard the cached list and load it again.
    ///
    /// On failure the cache is left empty.
    pub fn reload(&self) -> Result<WordList> {
        let _guard = self.load_lock.lock();
        self.cache.write().take();

        let words = self.load()?;
        *self.cache.write() = Some(words.clone());
        Ok(words)
    }

    /// Whether the cache currently holds a word list.
    pub fn is_loaded(&self) -> bool {
        self.cache.read().is_some()
    }

    /// Number of successful reads of the backing file so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    fn cached(&self) -> Option<WordList> {
        self.cache.read().clone()
    }

    fn load(&self) -> Result<WordList> {
        let start = Instant::now();
        let words = WordList::load_from_file(&self.config.path)?;
        self.loads.fetch_add(1, Ordering::SeqCst);

        info!(
            "loaded {} words from {} in {:?}",
            words.len(),
            self.path().display(),
            start.elapsed()
        );
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::GrepError;

    fn word_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_once_and_caches() {
        let file = word_file("cat\ndog\ncatalog\n");
        let store = WordStore::new(file.path());
        assert!(!store.is_loaded());

        let first = store.get_words().unwrap();
        let second = store.get_words().unwrap();

        assert_eq!(first.len(), 3);
        assert!(first.ptr_eq(&second));
        assert_eq!(store.load_count(), 1);
        assert!(store.is_loaded());
    }

    #[test]
    fn test_cached_list_survives_file_changes() {
        let file = word_file("one\n");
        let store = WordStore::new(file.path());
        store.get_words().unwrap();

        std::fs::write(file.path(), "one\ntwo\n").unwrap();
        assert_eq!(store.get_words().unwrap().len(), 1);

        let reloaded = store.reload().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(store.load_count(), 2);
    }

    #[test]
    fn test_missing_file_does_not_poison_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let store = WordStore::new(&path);

        assert!(matches!(store.get_words(), Err(GrepError::Io(_))));
        assert!(!store.is_loaded());
        assert_eq!(store.load_count(), 0);

        std::fs::write(&path, "retry\n").unwrap();
        let words = store.get_words().unwrap();
        assert_eq!(words.get(0), Some("retry"));
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let file = word_file("a\n");
        let store = WordStore::new(file.path());
        store.get_words().unwrap();

        store.invalidate();
        assert!(!store.is_loaded());

        store.get_words().unwrap();
        assert_eq!(store.load_count(), 2);
    }

    #[test]
    fn test_failed_reload_leaves_cache_empty() {
        let file = word_file("a\n");
        let path = file.path().to_path_buf();
        let store = WordStore::new(&path);
        store.get_words().unwrap();

        drop(file);
        assert!(store.reload().is_err());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_preloaded_store_skips_io() {
        let store = WordStore::preloaded(
            WordStoreConfig::new("/nonexistent/words.txt"),
            WordList::from(["x", "y"]),
        );

        assert_eq!(store.get_words().unwrap().len(), 2);
        assert_eq!(store.load_count(), 0);
    }
}
