//! Explicit dataset cache for hosts that reload extracts between refreshes.
//!
//! Entries are keyed by source identity and stamped with a version (an ETag,
//! file mtime, or extract date). A lookup with a different version misses and
//! the reload replaces the stale entry. Nothing here is global: the host
//! constructs a cache and passes it where it is needed.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey {
    pub source: String,
    pub version: String,
}

impl SourceKey {
    pub fn new(source: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            version: version.into(),
        }
    }
}

struct CachedEntry<T> {
    version: String,
    value: Arc<T>,
}

pub struct DatasetCache<T> {
    entries: RwLock<HashMap<String, CachedEntry<T>>>,
}

impl<T> Default for DatasetCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DatasetCache<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The cached value for `key`, if present at exactly that version.
    pub fn get(&self, key: &SourceKey) -> Option<Arc<T>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&key.source)
            .filter(|e| e.version == key.version)
            .map(|e| Arc::clone(&e.value))
    }

    /// Return the cached value for `key`, or run `load` and cache its result.
    ///
    /// The loader runs without holding the lock. Loader errors are returned
    /// as-is and leave the cache untouched. If the entry for the source
    /// changes while the loader runs, the entry stored meanwhile is kept: an
    /// equal version is returned in place of the fresh load, and any other
    /// change leaves the fresh load uncached.
    pub fn get_or_load<E, F>(&self, key: &SourceKey, load: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let seen = {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            match entries.get(&key.source) {
                Some(e) if e.version == key.version => {
                    tracing::debug!(source = %key.source, version = %key.version, "dataset cache hit");
                    return Ok(Arc::clone(&e.value));
                }
                entry => entry.map(|e| e.version.clone()),
            }
        };

        tracing::debug!(source = %key.source, version = %key.version, "dataset cache miss");
        let value = Arc::new(load()?);

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        match entries.get(&key.source) {
            Some(e) if e.version == key.version => return Ok(Arc::clone(&e.value)),
            current if current.map(|e| &e.version) != seen.as_ref() => {
                tracing::debug!(
                    source = %key.source,
                    version = %key.version,
                    "dataset cache entry changed during load; not caching"
                );
                return Ok(value);
            }
            _ => {}
        }
        entries.insert(
            key.source.clone(),
            CachedEntry {
                version: key.version.clone(),
                value: Arc::clone(&value),
            },
        );
        Ok(value)
    }

    /// Drop the entry for `source`. Returns whether one was cached.
    pub fn invalidate(&self, source: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let removed = entries.remove(source).is_some();
        if removed {
            tracing::debug!(source, "dataset cache entry invalidated");
        }
        removed
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
