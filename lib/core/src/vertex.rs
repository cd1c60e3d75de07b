// Vertex storage - payload arena plus per-vertex adjacency lists
use crate::{Error, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Capability required of vertex payloads.
///
/// Vertex identity is payload equality; the graph never relies on
/// reference identity.
pub trait VertexKey: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> VertexKey for T {}

/// Dense index of a vertex, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Neighbor list; most small graphs have low out-degree
pub type Neighbors = SmallVec<[VertexId; 4]>;

/// Owns every vertex payload and its outgoing adjacency list.
///
/// Neighbor order is edge-insertion order. For undirected stores an edge
/// `(a, b)` is mirrored into both lists.
#[derive(Debug, Clone)]
pub struct VertexStore<T> {
    directed: bool,
    payloads: Vec<T>,
    index: AHashMap<T, VertexId>,
    adjacency: Vec<Neighbors>,
    edge_count: usize,
}

impl<T: VertexKey> VertexStore<T> {
    #[inline]
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            payloads: Vec::new(),
            index: AHashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Number of inserted edges (an undirected edge counts once)
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn id_of(&self, payload: &T) -> Option<VertexId> {
        self.index.get(payload).copied()
    }

    /// Look up a payload, failing with `VertexNotFound`
    pub fn require(&self, payload: &T) -> Result<VertexId> {
        self.id_of(payload)
            .ok_or_else(|| Error::vertex_not_found(payload))
    }

    /// Payload of `id`, or `None` for an id this store never issued
    #[inline]
    pub fn get(&self, id: VertexId) -> Option<&T> {
        self.payloads.get(id.0)
    }

    /// # Panics
    /// Panics if `id` was not issued by this store.
    #[inline]
    pub fn payload(&self, id: VertexId) -> &T {
        &self.payloads[id.0]
    }

    /// # Panics
    /// Panics if `id` was not issued by this store.
    #[inline]
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        &self.adjacency[id.0]
    }

    #[inline]
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(from.0)
            .map_or(false, |nbrs| nbrs.contains(&to))
    }

    /// Iterate vertices in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &T)> + '_ {
        self.payloads
            .iter()
            .enumerate()
            .map(|(i, p)| (VertexId(i), p))
    }

    /// Iterate every stored directed adjacency `(from, to)`
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, nbrs)| nbrs.iter().map(move |&to| (VertexId(i), to)))
    }

    /// Snapshot of all payloads
    pub fn vertices(&self) -> HashSet<T> {
        self.payloads.iter().cloned().collect()
    }

    pub fn insert_vertex(&mut self, payload: T) -> Result<VertexId> {
        if self.index.contains_key(&payload) {
            return Err(Error::vertex_exists(&payload));
        }

        let id = VertexId(self.payloads.len());
        self.index.insert(payload.clone(), id);
        self.payloads.push(payload);
        self.adjacency.push(Neighbors::new());
        Ok(id)
    }

    pub fn insert_edge(&mut self, from: &T, to: &T) -> Result<(VertexId, VertexId)> {
        let a = self.require(from)?;
        let b = self.require(to)?;

        if self.has_edge(a, b) || (!self.directed && self.has_edge(b, a)) {
            return Err(Error::edge_exists(from, to));
        }

        self.adjacency[a.0].push(b);
        // a self-loop is already present in its own list
        if !self.directed && a != b {
            self.adjacency[b.0].push(a);
        }
        self.edge_count += 1;
        Ok((a, b))
    }
}
