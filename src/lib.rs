//! # tinygraph
//!
//! A tiny in-memory graph container with cached shortest-path queries.
//!
//! Vertices are arbitrary payloads identified by equality and hashing; the
//! graph is directed or undirected, chosen at construction. Every edge costs
//! one hop.
//!
//! ## Quick Start
//!
//! ### As a Library
//!
//! ```rust
//! use tinygraph::prelude::*;
//!
//! let mut graph = Graph::undirected("ring");
//! for v in ["v1", "v2", "v3"] {
//!     graph.add_vertex(v).unwrap();
//! }
//! graph.add_edge(&"v1", &"v2").unwrap();
//! graph.add_edge(&"v2", &"v3").unwrap();
//!
//! let path = graph.get_path(&"v1", &"v3").unwrap().unwrap();
//! assert_eq!(path.as_slice(), ["v1", "v2", "v3"]);
//!
//! // Same source and destination asks for the shortest cycle through it
//! let cycle = graph.get_path(&"v1", &"v1").unwrap().unwrap();
//! assert!(cycle.is_cycle());
//! ```
//!
//! ### From the Command Line
//!
//! ```bash
//! tinygraph --directed --edge a,b --edge b,c --edge c,a --path a,c --path a,a --dot
//! ```
//!
//! ## Path Semantics
//!
//! - `Ok(None)` means "no path", it is not an error
//! - `Err(Error::VertexNotFound)` means an endpoint is not in the graph
//! - A query from a vertex to itself returns the cheapest closed walk through
//!   it, or `None` when there is no cycle
//! - Among several equally short paths the one returned is an implementation
//!   detail; only length and existence are guaranteed

// Re-export core types
pub use tinygraph_core::{
    Graph, GraphConfig,
    Path, SharedGraph,
    VertexKey, CacheStats,
    Error, Result,
};

/// Building blocks for callers that drive the search themselves
pub mod search {
    pub use tinygraph_core::{
        PathFinder, PathReconstructor, SearchCache, SearchInfo, SearchResult, VertexId, VertexStore,
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Graph, GraphConfig,
        Path, SharedGraph,
        VertexKey,
        Error, Result,
    };
}
