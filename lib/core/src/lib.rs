//! # tinygraph Core
//!
//! Core library for the tinygraph in-memory graph container.
//!
//! This crate provides the graph data structures and the shortest-path machinery:
//!
//! - [`Graph`] - Directed or undirected graph over any hashable payload
//! - [`VertexStore`] - Vertex arena and insertion-ordered adjacency lists
//! - [`PathFinder`] - Unit-weight single-source search (Dijkstra with hop costs)
//! - [`SearchCache`] - Per-source memo, invalidated by any insertion
//! - [`PathReconstructor`] - Predecessor walk, including cycle queries
//! - [`SharedGraph`] - Mutex-guarded handle for multi-threaded callers
//!
//! ## Example
//!
//! ```rust
//! use tinygraph_core::Graph;
//!
//! let mut graph = Graph::directed("deps");
//! graph.add_vertex("app").unwrap();
//! graph.add_vertex("lib").unwrap();
//! graph.add_edge(&"app", &"lib").unwrap();
//!
//! let path = graph.get_path(&"app", &"lib").unwrap().unwrap();
//! assert_eq!(path.to_string(), "app -> lib");
//!
//! // No edge back from "lib", so no path and no cycle
//! assert!(graph.get_path(&"lib", &"app").unwrap().is_none());
//! assert!(graph.get_path(&"app", &"app").unwrap().is_none());
//! ```

pub mod error;
pub mod vertex;
pub mod search;
pub mod cache;
pub mod path;
pub mod graph;
pub mod dot;
pub mod shared;

pub use error::{Error, Result};
pub use vertex::{VertexId, VertexKey, VertexStore};
pub use search::{PathFinder, SearchInfo, SearchResult};
pub use cache::{CacheStats, SearchCache};
pub use path::{Path, PathReconstructor};
pub use graph::{Graph, GraphConfig};
pub use shared::SharedGraph;
