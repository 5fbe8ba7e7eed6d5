// src/cache.rs
//! Memoized extraction results, keyed by document path and extraction kind.
//!
//! Entries are never invalidated automatically: a document edited on disk keeps
//! serving the cached result until [`ExtractionCache::invalidate`] or
//! [`ExtractionCache::clear`] is called. Failures are not cached.

use crate::extractors::{tables_from_docx, BulletExtractor, Table};
use crate::utils::error::ExtractError;
use moka::sync::Cache;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Upper bound per extraction kind; least recently used entries go first.
const MAX_ENTRIES: u64 = 256;

static GLOBAL_CACHE: Lazy<ExtractionCache> = Lazy::new(ExtractionCache::new);

/// Key of one bullet extraction: document, section marker and boundary grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BulletsKey {
    pub path: PathBuf,
    pub marker: String,
    pub heading_pattern: String,
}

/// Shared, read-mostly cache of extraction results.
///
/// Values are handed out as `Arc`s and never mutated. Concurrent misses on one
/// key run the extraction once; the other callers wait for its result.
#[derive(Debug, Clone)]
pub struct ExtractionCache {
    tables: Cache<PathBuf, Arc<Vec<Table>>>,
    bullets: Cache<BulletsKey, Arc<Vec<String>>>,
    // Caller spelling -> canonical path, so entries stay reachable after the file goes away
    aliases: Cache<PathBuf, PathBuf>,
}

impl Default for ExtractionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionCache {
    pub fn new() -> Self {
        Self {
            tables: Cache::builder().max_capacity(MAX_ENTRIES).build(),
            bullets: Cache::builder().max_capacity(MAX_ENTRIES).build(),
            aliases: Cache::builder().max_capacity(MAX_ENTRIES * 2).build(),
        }
    }

    /// Process-wide cache instance.
    pub fn global() -> &'static ExtractionCache {
        &GLOBAL_CACHE
    }

    /// Tables of the document at `path`, parsed at most once until invalidated.
    pub fn tables(&self, path: &Path) -> Result<Arc<Vec<Table>>, ExtractError> {
        let key = self.resolve(path);
        if self.tables.contains_key(&key) {
            tracing::debug!("Cache hit: tables for {}", path.display());
        }

        self.tables
            .try_get_with(key, || {
                tracing::debug!("Cache miss: tables for {}", path.display());
                tables_from_docx(path).map(Arc::new)
            })
            .map_err(unshare)
    }

    /// Bullets of one section, using the default heading grammar.
    pub fn bullets(&self, path: &Path, marker: &str) -> Result<Arc<Vec<String>>, ExtractError> {
        self.bullets_with(&BulletExtractor::default(), path, marker)
    }

    /// Bullets of one section; the extractor's heading pattern is part of the key.
    pub fn bullets_with(
        &self,
        extractor: &BulletExtractor,
        path: &Path,
        marker: &str,
    ) -> Result<Arc<Vec<String>>, ExtractError> {
        let key = BulletsKey {
            path: self.resolve(path),
            marker: marker.to_string(),
            heading_pattern: extractor.heading_pattern().to_string(),
        };
        if self.bullets.contains_key(&key) {
            tracing::debug!("Cache hit: bullets '{}' for {}", marker, path.display());
        }

        self.bullets
            .try_get_with(key, || {
                tracing::debug!("Cache miss: bullets '{}' for {}", marker, path.display());
                extractor.extract_from_docx(path, marker).map(Arc::new)
            })
            .map_err(unshare)
    }

    /// Drops every entry derived from `path`. Returns how many were removed.
    ///
    /// Works for any spelling of the path used in an earlier lookup, even after
    /// the document itself was moved or deleted.
    pub fn invalidate(&self, path: &Path) -> usize {
        let mut targets = vec![normalize(path)];
        if let Some(canonical) = self.aliases.get(path) {
            targets.push(canonical);
        }

        let stale_tables: Vec<Arc<PathBuf>> = self
            .tables
            .iter()
            .filter(|(key, _)| targets.contains(key))
            .map(|(key, _)| key)
            .collect();
        let stale_bullets: Vec<Arc<BulletsKey>> = self
            .bullets
            .iter()
            .filter(|(key, _)| targets.contains(&key.path))
            .map(|(key, _)| key)
            .collect();

        let stale_aliases: Vec<Arc<PathBuf>> = self
            .aliases
            .iter()
            .filter(|(_, canonical)| targets.contains(canonical))
            .map(|(alias, _)| alias)
            .collect();

        for key in &stale_tables {
            self.tables.invalidate(key.as_ref());
        }
        for key in &stale_bullets {
            self.bullets.invalidate(key.as_ref());
        }
        for alias in &stale_aliases {
            self.aliases.invalidate(alias.as_ref());
        }

        let removed = stale_tables.len() + stale_bullets.len();
        tracing::debug!("Invalidated {} cache entries for {}", removed, path.display());
        removed
    }

    pub fn clear(&self) {
        self.tables.invalidate_all();
        self.bullets.invalidate_all();
        self.aliases.invalidate_all();
        self.tables.run_pending_tasks();
        self.bullets.run_pending_tasks();
        self.aliases.run_pending_tasks();
    }

    pub fn len(&self) -> usize {
        self.tables.iter().count() + self.bullets.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        let canonical = normalize(path);
        self.aliases.insert(path.to_path_buf(), canonical.clone());
        canonical
    }
}

// Equivalent spellings of one existing file share entries
fn normalize(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

// Waiters on a failed load share its error; the loading caller usually holds the only reference
fn unshare(err: Arc<ExtractError>) -> ExtractError {
    Arc::try_unwrap(err).unwrap_or_else(ExtractError::Shared)
}
