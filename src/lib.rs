#![doc(html_no_source)]
#![deny(missing_docs)]

//! # edgewise
//!
//! [![Crates.io](https://img.shields.io/crates/v/edgewise.svg)](https://crates.io/crates/edgewise)
//! [![Documentation](https://docs.rs/edgewise/badge.svg)](https://docs.rs/edgewise)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/edgewise/blob/main/LICENSE)
//!
//! A compact graph-algorithms engine: breadth-first and depth-first traversal,
//! single-source shortest paths (Dijkstra), minimum spanning trees (Kruskal),
//! and PageRank, all over one adjacency-list representation with strongly-typed
//! vertex and edge handles.
//!
//! ## Features
//!
//! - **🧭 Ordered traversal** - BFS and DFS honor adjacency insertion order, so
//!   visit sequences are fully deterministic
//! - **📏 First-class unreachability** - shortest-path results carry a tagged
//!   infinite sentinel instead of magic values or errors
//! - **🌲 Deterministic spanning trees** - equal-weight edges tie-break by
//!   insertion order; disconnected graphs report "no tree" explicitly
//! - **🔑 Two identity notions** - dense [`VertexId`](graph::VertexId) handles
//!   on the core container, domain keys via [`KeyedGraph`](graph::KeyedGraph)
//! - **🛡️ Up-front validation** - malformed arguments are rejected before any
//!   traversal work begins, never partway through
//! - **🧵 Share-friendly** - algorithms take `&Graph` and keep all working
//!   state call-private, so read-only runs can share one graph across threads
//!
//! ## Quick Start
//!
//! Add `edgewise` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edgewise = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use edgewise::prelude::*;
//!
//! let mut graph = Graph::undirected();
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//! let c = graph.add_vertex("C");
//! graph.add_edge(a, b, 1)?;
//! graph.add_edge(b, c, 2)?;
//! graph.add_edge(a, c, 4)?;
//!
//! // Traversal honors insertion order and starts at the given vertex.
//! assert_eq!(bfs(&graph, a)?, vec![a, b, c]);
//!
//! // The two-hop route beats the direct edge.
//! let paths = shortest_paths(&graph, a)?;
//! assert_eq!(paths.distance(c), Distance::Finite(3));
//!
//! // The heavy edge is left out of the spanning tree.
//! let tree = minimum_spanning_tree(&graph)?.expect("graph is connected");
//! assert_eq!(tree.total_weight(), 3);
//! # Ok::<(), edgewise::Error>(())
//! ```
//!
//! ### Domain Keys
//!
//! ```rust
//! use edgewise::prelude::*;
//!
//! let mut graph: KeyedGraph<&str> = KeyedGraph::directed();
//! graph.add_edge("start", "mid", 1)?;
//! graph.add_edge("mid", "goal", 1)?;
//! graph.add_edge("start", "goal", 5)?;
//!
//! let distances = graph.shortest_paths(&"start")?;
//! assert_eq!(distances[&"goal"], Distance::Finite(2));
//! # Ok::<(), edgewise::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `edgewise` is organized into a small set of modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and functions
//! - [`graph`] - The data model: [`Graph`], handles, traits, and the keyed
//!   wrapper
//! - [`algorithms`] - The engines: traversal, shortest paths, spanning trees,
//!   and ranking
//! - [`Error`] and [`Result`] - Error handling
//!
//! Algorithms are written against the [`graph::Adjacency`] and
//! [`graph::EdgeList`] traits rather than the concrete container, so custom
//! representations can reuse the engines unchanged.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Every error is
//! an invalid-argument rejection detected before any work happens; outcomes
//! that merely describe the input - an unreachable vertex, a disconnected
//! graph handed to the spanning-tree engine - are ordinary results:
//!
//! ```rust
//! use edgewise::prelude::*;
//!
//! let mut graph = Graph::undirected();
//! let a = graph.add_vertex(());
//! let stranded = graph.add_vertex(());
//!
//! let paths = shortest_paths(&graph, a)?;
//! assert_eq!(paths.distance(stranded), Distance::Unreachable);
//!
//! assert_eq!(minimum_spanning_tree(&graph)?, None);
//! # Ok::<(), edgewise::Error>(())
//! ```
//!
//! ## Observability
//!
//! The algorithm entry points are instrumented with [`tracing`] spans carrying
//! vertex and edge counts. The crate never installs a subscriber; binaries
//! that want the telemetry install their own.

mod error;

/// Convenient re-exports of the most commonly used types and functions.
///
/// This module provides a curated selection of the most frequently used items
/// from across the edgewise library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use edgewise::prelude::*;
///
/// let mut graph = Graph::directed();
/// let a = graph.add_vertex(());
/// assert!(bfs(&graph, a)?.contains(&a));
/// # Ok::<(), edgewise::Error>(())
/// ```
pub mod prelude;

/// Adjacency-based graph representation.
///
/// The data model every algorithm operates on: the [`graph::Graph`] container
/// with opaque vertex payloads and weighted edges, the [`graph::VertexId`] and
/// [`graph::EdgeId`] handles, the [`graph::Adjacency`] and [`graph::EdgeList`]
/// read traits, and the key-addressed [`graph::KeyedGraph`] wrapper.
pub mod graph;

/// Graph algorithm engines.
///
/// Traversal ([`algorithms::bfs`], [`algorithms::dfs`]), shortest paths
/// ([`algorithms::shortest_paths`]), minimum spanning trees
/// ([`algorithms::minimum_spanning_tree`]), and ranking
/// ([`algorithms::page_rank`]). All engines read the graph through the traits
/// in [`graph`] and keep their working state private to each call.
pub mod algorithms;

/// `edgewise` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`]. This is used consistently throughout the crate for all
/// fallible operations.
///
/// # Examples
///
/// ```rust
/// use edgewise::{Graph, Result, VertexId};
/// use edgewise::algorithms::bfs;
///
/// fn reachable(graph: &Graph<()>, start: VertexId) -> Result<usize> {
///     Ok(bfs(graph, start)?.len())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `edgewise` Error type
///
/// The main error type for all operations in this crate. Every variant is an
/// invalid-argument rejection; see [`Error`] for the full taxonomy.
pub use error::Error;

/// Primary graph container.
///
/// See [`graph::Graph`] for the building API and representation details.
///
/// # Example
///
/// ```rust
/// use edgewise::Graph;
///
/// let mut graph: Graph<&str> = Graph::directed();
/// let a = graph.add_vertex("A");
/// assert_eq!(graph.payload(a), Some(&"A"));
/// ```
pub use graph::Graph;

/// Strongly-typed vertex handle.
///
/// See [`graph::VertexId`].
pub use graph::VertexId;
