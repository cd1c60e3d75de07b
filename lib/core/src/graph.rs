use crate::cache::{CacheStats, SearchCache};
use crate::path::{Path, PathReconstructor};
use crate::search::PathFinder;
use crate::vertex::{VertexKey, VertexStore};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Human-readable label, used as the DOT graph name
    pub name: String,
    pub directed: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            name: "graph".to_string(),
            directed: false,
        }
    }
}

/// An in-memory graph over payloads of type `T` with cached shortest paths.
///
/// Path queries memoize the full search from their source; every insertion
/// invalidates all memoized searches.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    config: GraphConfig,
    store: VertexStore<T>,
    cache: SearchCache,
}

impl<T: VertexKey> Graph<T> {
    pub fn new(config: GraphConfig) -> Self {
        let store = VertexStore::new(config.directed);
        Self {
            config,
            store,
            cache: SearchCache::new(),
        }
    }

    /// Empty undirected graph
    pub fn undirected(name: impl Into<String>) -> Self {
        Self::new(GraphConfig {
            name: name.into(),
            directed: false,
        })
    }

    /// Empty directed graph
    pub fn directed(name: impl Into<String>) -> Self {
        Self::new(GraphConfig {
            name: name.into(),
            directed: true,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn contains_vertex(&self, payload: &T) -> bool {
        self.store.id_of(payload).is_some()
    }

    /// Add a vertex with no edges
    pub fn add_vertex(&mut self, payload: T) -> Result<()> {
        let id = self.store.insert_vertex(payload)?;
        self.cache.invalidate_all();
        tracing::debug!(graph = %self.config.name, vertex = %id, "vertex added");
        Ok(())
    }

    /// Add an edge between two existing vertices (mirrored when undirected).
    ///
    /// Self-loops are allowed.
    pub fn add_edge(&mut self, from: &T, to: &T) -> Result<()> {
        let (a, b) = self.store.insert_edge(from, to)?;
        self.cache.invalidate_all();
        tracing::debug!(graph = %self.config.name, from = %a, to = %b, "edge added");
        Ok(())
    }

    /// Shortest path from `from` to `to`, `Ok(None)` if there is none.
    ///
    /// If `from == to` this is the shortest cycle through that vertex, never
    /// the trivial zero-length path.
    pub fn get_path(&mut self, from: &T, to: &T) -> Result<Option<Path<T>>> {
        let source = self.store.require(from)?;
        let destination = self.store.require(to)?;

        if self.cache.get(source).is_none() {
            if let Some(result) = PathFinder::new(&self.store).run(source) {
                self.cache.put(source, result);
            }
        }

        Ok(self
            .cache
            .peek(source)
            .and_then(|result| PathReconstructor::new(&self.store, result).path(destination)))
    }

    /// Snapshot of all vertex payloads
    pub fn vertices(&self) -> HashSet<T> {
        self.store.vertices()
    }

    /// Outgoing neighbors of `payload` in edge-insertion order
    pub fn neighbors(&self, payload: &T) -> Result<Vec<&T>> {
        let id = self.store.require(payload)?;
        Ok(self
            .store
            .neighbors(id)
            .iter()
            .map(|&n| self.store.payload(n))
            .collect())
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub(crate) fn store(&self) -> &VertexStore<T> {
        &self.store
    }
}

impl<T: VertexKey> Default for Graph<T> {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}
