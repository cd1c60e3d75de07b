// Per-source memo of completed searches
use crate::search::SearchResult;
use crate::vertex::VertexId;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
struct CacheEntry {
    valid: bool,
    result: SearchResult,
}

/// Hit/miss counters for path queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub invalidations: u64,
}

/// Memoized search results keyed by source vertex.
///
/// Any topology change invalidates every entry: a new edge `x -> y` can
/// shorten paths from any source whose search reached `x`. Stale results
/// stay in place until the next `put` for that source replaces them.
#[derive(Debug, Clone, Default)]
pub struct SearchCache {
    entries: AHashMap<VertexId, CacheEntry>,
    stats: CacheStats,
}

impl SearchCache {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized result for `source` if it is still valid
    pub fn get(&mut self, source: VertexId) -> Option<&SearchResult> {
        match self.entries.get(&source) {
            Some(entry) if entry.valid => {
                self.stats.hits += 1;
                tracing::trace!(source = %source, "search cache hit");
                Some(&entry.result)
            }
            _ => {
                self.stats.misses += 1;
                None
            }
        }
    }

    #[inline]
    pub fn is_valid(&self, source: VertexId) -> bool {
        self.peek(source).is_some()
    }

    /// Like [`get`](Self::get) without touching the counters
    pub fn peek(&self, source: VertexId) -> Option<&SearchResult> {
        self.entries
            .get(&source)
            .filter(|entry| entry.valid)
            .map(|entry| &entry.result)
    }

    /// Store `result` for `source` and mark it valid
    pub fn put(&mut self, source: VertexId, result: SearchResult) {
        self.entries.insert(source, CacheEntry { valid: true, result });
    }

    /// Mark every entry stale
    pub fn invalidate_all(&mut self) {
        let mut cleared = 0usize;
        for entry in self.entries.values_mut() {
            if entry.valid {
                entry.valid = false;
                cleared += 1;
            }
        }
        self.stats.invalidations += 1;
        if cleared > 0 {
            tracing::debug!(cleared, "search cache invalidated");
        }
    }

    /// Number of sources with a valid result
    pub fn valid_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.valid).count()
    }

    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
