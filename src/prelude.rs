//! # edgewise Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and functions from the edgewise library. Import this module to get quick
//! access to everything needed for building a graph and running the
//! algorithms.
//!
//! # Example
//!
//! ```rust
//! use edgewise::prelude::*;
//!
//! let mut graph = Graph::undirected();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! graph.add_edge(a, b, 1)?;
//!
//! assert_eq!(bfs(&graph, a)?, vec![a, b]);
//! # Ok::<(), edgewise::Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all edgewise operations
pub use crate::Error;

/// The result type used throughout edgewise
pub use crate::Result;

// ================================================================================================
// Graph Data Model
// ================================================================================================

/// The adjacency-list graph container
pub use crate::graph::Graph;

/// Key-addressed wrapper over the graph container
pub use crate::graph::KeyedGraph;

/// Strongly-typed vertex and edge handles
pub use crate::graph::{EdgeId, VertexId};

/// The edge record and its weight scalar
pub use crate::graph::{Edge, Weight};

/// Read-only traits the algorithm engines consume
pub use crate::graph::{Adjacency, EdgeList};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversal engines
pub use crate::algorithms::{bfs, dfs};

/// Shortest-path engine and its result types
pub use crate::algorithms::{shortest_paths, Distance, ShortestPaths};

/// Minimum-spanning-tree engine and its result type
pub use crate::algorithms::{minimum_spanning_tree, SpanningTree};

/// PageRank engine and its options
pub use crate::algorithms::{page_rank, PageRankOptions};
