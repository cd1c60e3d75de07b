use crate::graph::Graph;
use crate::path::Path;
use crate::vertex::VertexKey;
use crate::Result;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Cloneable handle that serializes access to one [`Graph`].
///
/// `Graph` itself has no locking; path queries mutate its search cache, so
/// every operation here takes the same exclusive lock.
pub struct SharedGraph<T> {
    inner: Arc<Mutex<Graph<T>>>,
}

impl<T> Clone for SharedGraph<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: VertexKey> SharedGraph<T> {
    pub fn new(graph: Graph<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    pub fn add_vertex(&self, payload: T) -> Result<()> {
        self.inner.lock().add_vertex(payload)
    }

    pub fn add_edge(&self, from: &T, to: &T) -> Result<()> {
        self.inner.lock().add_edge(from, to)
    }

    pub fn get_path(&self, from: &T, to: &T) -> Result<Option<Path<T>>> {
        self.inner.lock().get_path(from, to)
    }

    pub fn vertices(&self) -> HashSet<T> {
        self.inner.lock().vertices()
    }

    /// Run `f` with exclusive access to the graph
    pub fn with<R>(&self, f: impl FnOnce(&mut Graph<T>) -> R) -> R {
        let mut graph = self.inner.lock();
        f(&mut *graph)
    }
}

impl<T: VertexKey> From<Graph<T>> for SharedGraph<T> {
    fn from(graph: Graph<T>) -> Self {
        Self::new(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_writers_and_readers() {
        let shared = SharedGraph::new(Graph::directed("chain"));
        for i in 0..8u32 {
            shared.add_vertex(i).unwrap();
        }

        thread::scope(|s| {
            for i in 0..7u32 {
                let handle = shared.clone();
                s.spawn(move || handle.add_edge(&i, &(i + 1)).unwrap());
            }
        });

        let path = shared.get_path(&0, &7).unwrap().unwrap();
        assert_eq!(path.into_vec(), (0..8).collect::<Vec<u32>>());
        assert_eq!(shared.with(|g| g.edge_count()), 7);
        assert_eq!(shared.vertices().len(), 8);
    }
}
