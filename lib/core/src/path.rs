use crate::search::SearchResult;
use crate::vertex::{VertexId, VertexKey, VertexStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// A sequence of vertex payloads from source to destination.
///
/// For a cycle query the first and last element are the same vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path<T> {
    vertices: Vec<T>,
}

impl<T> Path<T> {
    #[inline]
    #[must_use]
    pub fn new(vertices: Vec<T>) -> Self {
        Self { vertices }
    }

    /// Number of edges traversed
    #[inline]
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vertices
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.vertices
    }
}

impl<T: PartialEq> Path<T> {
    /// Whether the path starts and ends at the same vertex
    pub fn is_cycle(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => self.vertices.len() > 1 && first == last,
            _ => false,
        }
    }
}

impl<T> Deref for Path<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.vertices
    }
}

impl<T> From<Path<T>> for Vec<T> {
    fn from(path: Path<T>) -> Self {
        path.vertices
    }
}

impl<T> IntoIterator for Path<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

/// Walks predecessor links of a completed search to materialize paths
pub struct PathReconstructor<'a, T> {
    store: &'a VertexStore<T>,
    result: &'a SearchResult,
}

impl<'a, T: VertexKey> PathReconstructor<'a, T> {
    #[inline]
    #[must_use]
    pub fn new(store: &'a VertexStore<T>, result: &'a SearchResult) -> Self {
        Self { store, result }
    }

    /// Path from the search source to `destination`, or `None` if there is none.
    ///
    /// When `destination` is the source itself the answer is the cheapest
    /// closed walk through it: the reached vertex with an edge into the
    /// source and the smallest label is walked back to the source, and the
    /// source is appended. Without such a vertex there is no cycle.
    pub fn reconstruct(&self, destination: VertexId) -> Option<Vec<VertexId>> {
        if destination == self.result.source() {
            let closing = self.cheapest_predecessor(destination)?;
            let mut walk = self.walk_back(closing);
            walk.push(destination);
            return Some(walk);
        }

        self.result.label(destination)?;
        Some(self.walk_back(destination))
    }

    /// Same as [`reconstruct`](Self::reconstruct) but resolved to payloads.
    ///
    /// `None` also when the walk names a vertex the store does not hold.
    pub fn path(&self, destination: VertexId) -> Option<Path<T>> {
        self.reconstruct(destination)?
            .into_iter()
            .map(|id| self.store.get(id).cloned())
            .collect::<Option<Vec<T>>>()
            .map(Path::new)
    }

    /// Reached vertex with an edge into `target`, minimal by (label, id)
    fn cheapest_predecessor(&self, target: VertexId) -> Option<VertexId> {
        self.store
            .iter()
            .filter(|&(id, _)| self.store.has_edge(id, target))
            .filter_map(|(id, _)| self.result.label(id).map(|label| (label, id)))
            .min()
            .map(|(_, id)| id)
    }

    /// Source-first sequence ending at `end`; `end` must be reached
    fn walk_back(&self, end: VertexId) -> Vec<VertexId> {
        let mut walk = Vec::with_capacity(self.result.label(end).unwrap_or(0) + 1);
        let mut current = Some(end);
        while let Some(id) = current {
            walk.push(id);
            current = self.result.predecessor(id);
        }
        walk.reverse();
        walk
    }
}
