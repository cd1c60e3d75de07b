use crate::vertex::{VertexId, VertexKey, VertexStore};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Per-vertex scratch state of one search rooted at a single source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchInfo {
    /// Hop distance from the source; `None` means not reached
    pub label: Option<usize>,
    pub visited: bool,
    pub predecessor: Option<VertexId>,
}

impl SearchInfo {
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.label.is_some()
    }

    /// Whether `candidate` improves on the current label
    #[inline]
    fn improves(&self, candidate: usize) -> bool {
        self.label.map_or(true, |label| candidate < label)
    }
}

/// Distance/predecessor table for every vertex, rooted at `source`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    source: VertexId,
    infos: Vec<SearchInfo>,
}

impl SearchResult {
    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Scratch state of `id`; `None` for vertices the search never saw
    /// (inserted after it ran, or from another store)
    #[inline]
    pub fn info(&self, id: VertexId) -> Option<&SearchInfo> {
        self.infos.get(id.index())
    }

    #[inline]
    pub fn label(&self, id: VertexId) -> Option<usize> {
        self.info(id).and_then(|info| info.label)
    }

    #[inline]
    pub fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.info(id).and_then(|info| info.predecessor)
    }

    /// Number of vertices with a finite label (the source included)
    pub fn reached(&self) -> usize {
        self.infos.iter().filter(|info| info.is_reached()).count()
    }

    /// Number of vertices the search covered
    #[inline]
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }
}

/// Frontier entry ordered for a min-heap on label
#[derive(Clone, Copy, PartialEq, Eq)]
struct Candidate {
    id: VertexId,
    label: usize,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: smaller label first, then smaller id
        other
            .label
            .cmp(&self.label)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source uniform-cost search over a [`VertexStore`].
///
/// Every edge costs one hop. The frontier is a binary heap; among equal
/// labels the vertex inserted first is finalized first, so repeated runs on
/// the same topology return the same predecessors.
pub struct PathFinder<'a, T> {
    store: &'a VertexStore<T>,
}

impl<'a, T: VertexKey> PathFinder<'a, T> {
    #[inline]
    #[must_use]
    pub fn new(store: &'a VertexStore<T>) -> Self {
        Self { store }
    }

    /// Run a full search from `source`, labelling every vertex.
    ///
    /// Returns `None` if `source` does not belong to the store.
    pub fn run(&self, source: VertexId) -> Option<SearchResult> {
        if source.index() >= self.store.len() {
            return None;
        }

        let mut infos = vec![SearchInfo::default(); self.store.len()];
        let mut frontier = BinaryHeap::with_capacity(self.store.len());

        infos[source.index()].label = Some(0);
        frontier.push(Candidate { id: source, label: 0 });

        while let Some(Candidate { id: current, label }) = frontier.pop() {
            // Stale heap entries for already finalized vertices
            if infos[current.index()].visited {
                continue;
            }

            let candidate = label + 1;
            for &neighbor in self.store.neighbors(current) {
                let info = &mut infos[neighbor.index()];
                if !info.visited && info.improves(candidate) {
                    info.label = Some(candidate);
                    info.predecessor = Some(current);
                    frontier.push(Candidate { id: neighbor, label: candidate });
                }
            }

            infos[current.index()].visited = true;
        }

        let result = SearchResult { source, infos };
        tracing::debug!(
            source = %source,
            reached = result.reached(),
            total = result.len(),
            "search completed"
        );
        Some(result)
    }
}
