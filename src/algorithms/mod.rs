//! Graph algorithm engines.
//!
//! Every engine in this module reads the graph through the traits in
//! [`crate::graph`] and keeps its working state private to the call: the graph
//! is never mutated, nothing is cached between calls, and concurrent read-only
//! runs over one shared graph are safe.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`] - Breadth-first search in adjacency order
//! - [`dfs`] - Depth-first search by recursive descent
//!
//! ## Shortest Paths
//!
//! - [`shortest_paths`] - Dijkstra's algorithm with a lazy-deletion priority
//!   queue; unreachable vertices surface as [`Distance::Unreachable`]
//!
//! ## Spanning Trees
//!
//! - [`minimum_spanning_tree`] - Kruskal's algorithm over a disjoint-set
//!   union; a disconnected graph yields `Ok(None)`
//!
//! ## Ranking
//!
//! - [`page_rank`] - Power-iteration PageRank with configurable damping and
//!   convergence ([`PageRankOptions`])
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS/DFS | O(V + E) | Reachability, visit order |
//! | Dijkstra | O((V + E) log V) | Cheapest routes from one vertex |
//! | Kruskal | O(E log E) | Cheapest fully-connecting edge subset |
//! | PageRank | O(rounds x (V + E)) | Relative vertex importance |
//!
//! # Examples
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
//! assert_eq!(bfs(&graph, a)?, vec![a, b, c]);
//! assert_eq!(shortest_paths(&graph, a)?.distance(c), Distance::Finite(3));
//! assert_eq!(minimum_spanning_tree(&graph)?.unwrap().total_weight(), 3);
//! # Ok::<(), edgewise::Error>(())
//! ```

mod dijkstra;
mod kruskal;
mod pagerank;
mod traversal;
mod union_find;

// Re-export all public items
pub use dijkstra::{shortest_paths, Distance, ShortestPaths};
pub use kruskal::{minimum_spanning_tree, SpanningTree};
pub use pagerank::{page_rank, PageRankOptions};
pub use traversal::{bfs, dfs};
