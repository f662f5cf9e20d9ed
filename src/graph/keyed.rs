//! Key-addressed graph wrapper for domain-typed vertices.
//!
//! This module provides [`KeyedGraph`], a convenience wrapper around
//! [`Graph`](crate::graph::Graph) for callers whose vertex identity lives in a
//! domain value (a name, an id, a coordinate) rather than in a dense handle.
//!
//! # Motivation
//!
//! When working with the algorithm engines, domain code often needs to:
//! 1. Build a graph from domain-specific keys
//! 2. Run algorithms that work with [`VertexId`]
//! 3. Map results back to the domain keys
//!
//! `KeyedGraph` encapsulates this pattern: the key is stored as the vertex
//! payload, a lookup map resolves keys to handles, and the algorithm
//! conveniences translate results back into keys.

use std::collections::HashMap;
use std::hash::Hash;

use crate::algorithms::{
    bfs, dfs, minimum_spanning_tree, page_rank, shortest_paths, Distance, PageRankOptions,
};
use crate::graph::{EdgeId, Graph, VertexId, Weight};
use crate::{Error, Result};

/// A graph whose vertices are addressed by domain keys instead of handles.
///
/// `KeyedGraph<K>` stores one vertex per distinct key (`K: Hash + Eq + Clone`)
/// and keeps the key as the vertex payload, making the payload the identity —
/// the complementary identity notion to the handle-based [`Graph`]. The mode
/// (directed or undirected) is fixed at construction, exactly as for the
/// underlying graph.
///
/// # Examples
///
/// ```rust
/// use edgewise::prelude::*;
///
/// let mut graph: KeyedGraph<&str> = KeyedGraph::undirected();
/// graph.add_edge("A", "B", 1)?;
/// graph.add_edge("B", "C", 2)?;
/// graph.add_edge("A", "C", 4)?;
///
/// // Results come back as keys, not handles.
/// assert_eq!(graph.bfs(&"A")?, vec!["A", "B", "C"]);
/// # Ok::<(), edgewise::Error>(())
/// ```
///
/// # Thread Safety
///
/// `KeyedGraph<K>` is [`Send`] and [`Sync`] when `K` is.
#[derive(Debug, Clone)]
pub struct KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    graph: Graph<K>,
    key_to_vertex: HashMap<K, VertexId>,
}

impl<K> KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty key-addressed graph with one-way edges.
    #[must_use]
    pub fn directed() -> Self {
        Self {
            graph: Graph::directed(),
            key_to_vertex: HashMap::new(),
        }
    }

    /// Creates an empty key-addressed graph with symmetric edges.
    #[must_use]
    pub fn undirected() -> Self {
        Self {
            graph: Graph::undirected(),
            key_to_vertex: HashMap::new(),
        }
    }

    /// Adds a vertex for `key`, or returns the existing handle if the key is
    /// already present.
    ///
    /// This method is idempotent: calling it repeatedly with the same key
    /// always returns the same handle.
    pub fn add_vertex(&mut self, key: K) -> VertexId {
        if let Some(&vertex) = self.key_to_vertex.get(&key) {
            return vertex;
        }

        let vertex = self.graph.add_vertex(key.clone());
        self.key_to_vertex.insert(key, vertex);
        vertex
    }

    /// Adds an edge between two keys, creating missing endpoint vertices
    /// automatically.
    ///
    /// # Errors
    ///
    /// Infallible in practice (endpoints are created on demand); the `Result`
    /// mirrors [`Graph::add_edge`](crate::graph::Graph::add_edge).
    pub fn add_edge(&mut self, from: K, to: K, weight: Weight) -> Result<EdgeId> {
        let source = self.add_vertex(from);
        let target = self.add_vertex(to);
        self.graph.add_edge(source, target, weight)
    }

    /// Returns the handle for `key`, if the key is present.
    #[must_use]
    pub fn vertex_id(&self, key: &K) -> Option<VertexId> {
        self.key_to_vertex.get(key).copied()
    }

    /// Returns the key stored at `vertex`, if the handle belongs to this
    /// graph.
    #[must_use]
    pub fn key(&self, vertex: VertexId) -> Option<&K> {
        self.graph.payload(vertex)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the number of logical edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns an iterator over all keys in the graph.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.key_to_vertex.keys()
    }

    /// Returns a reference to the underlying handle-addressed graph.
    ///
    /// Useful for passing to the algorithm engines directly when handles are
    /// preferable to keys.
    #[must_use]
    pub fn inner(&self) -> &Graph<K> {
        &self.graph
    }

    /// Maps a slice of handles back to cloned domain keys.
    ///
    /// Handles that do not belong to this graph are skipped.
    #[must_use]
    pub fn keys_for(&self, vertices: &[VertexId]) -> Vec<K> {
        vertices
            .iter()
            .filter_map(|&vertex| self.graph.payload(vertex).cloned())
            .collect()
    }

    fn resolve(&self, key: &K) -> Result<VertexId> {
        self.key_to_vertex.get(key).copied().ok_or(Error::KeyNotFound)
    }
}

// Algorithm convenience methods
impl<K> KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// Runs a breadth-first search from the vertex keyed by `start` and
    /// returns the visit order as keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `start` was never added.
    pub fn bfs(&self, start: &K) -> Result<Vec<K>> {
        let order = bfs(&self.graph, self.resolve(start)?)?;
        Ok(self.keys_for(&order))
    }

    /// Runs a depth-first search from the vertex keyed by `start` and returns
    /// the visit order as keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `start` was never added.
    pub fn dfs(&self, start: &K) -> Result<Vec<K>> {
        let order = dfs(&self.graph, self.resolve(start)?)?;
        Ok(self.keys_for(&order))
    }

    /// Computes shortest-path distances from the vertex keyed by `start`,
    /// keyed by destination.
    ///
    /// Every key of the graph appears in the result; unreachable destinations
    /// map to [`Distance::Unreachable`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if `start` was never added.
    pub fn shortest_paths(&self, start: &K) -> Result<HashMap<K, Distance>> {
        let paths = shortest_paths(&self.graph, self.resolve(start)?)?;
        Ok(paths
            .iter()
            .filter_map(|(vertex, distance)| {
                self.graph
                    .payload(vertex)
                    .map(|key| (key.clone(), distance))
            })
            .collect())
    }

    /// Computes a minimum spanning tree and returns its edges as
    /// `(from, to, weight)` key triples, or `None` if the graph is
    /// disconnected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequiresUndirected`] if this graph is directed.
    pub fn minimum_spanning_tree(&self) -> Result<Option<Vec<(K, K, Weight)>>> {
        let Some(tree) = minimum_spanning_tree(&self.graph)? else {
            return Ok(None);
        };

        let edges = tree
            .edges()
            .iter()
            .filter_map(|&id| {
                let edge = self.graph.edge(id)?;
                let from = self.graph.payload(edge.source)?.clone();
                let to = self.graph.payload(edge.target)?.clone();
                Some((from, to, edge.weight))
            })
            .collect();
        Ok(Some(edges))
    }

    /// Computes PageRank scores keyed by vertex key.
    #[must_use]
    pub fn page_rank(&self, options: &PageRankOptions) -> HashMap<K, f64> {
        let ranks = page_rank(&self.graph, options);
        ranks
            .into_iter()
            .enumerate()
            .filter_map(|(index, rank)| {
                self.graph
                    .payload(VertexId::new(index))
                    .map(|key| (key.clone(), rank))
            })
            .collect()
    }
}

impl<K> Default for KeyedGraph<K>
where
    K: Hash + Eq + Clone,
{
    /// The default keyed graph is directed, matching [`KeyedGraph::directed`].
    fn default() -> Self {
        Self::directed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_graph_basic() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::directed();

        let a = graph.add_vertex("A");
        let b = graph.add_vertex("B");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.vertex_id(&"A"), Some(a));
        assert_eq!(graph.vertex_id(&"B"), Some(b));
        assert_eq!(graph.key(a), Some(&"A"));
        assert_eq!(graph.key(b), Some(&"B"));
    }

    #[test]
    fn test_keyed_graph_idempotent_add() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::directed();

        let a1 = graph.add_vertex("A");
        let a2 = graph.add_vertex("A"); // Same key

        assert_eq!(a1, a2);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_keyed_graph_add_edge_creates_endpoints() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::directed();

        graph.add_edge("A", "B", 10).unwrap();
        graph.add_edge("B", "C", 20).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_keyed_graph_bfs_returns_keys() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::directed();
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("A", "C", 1).unwrap();
        graph.add_edge("B", "D", 1).unwrap();

        assert_eq!(graph.bfs(&"A").unwrap(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_keyed_graph_dfs_returns_keys() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::directed();
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("A", "C", 1).unwrap();
        graph.add_edge("B", "D", 1).unwrap();

        assert_eq!(graph.dfs(&"A").unwrap(), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn test_keyed_graph_unknown_start_key() {
        let graph: KeyedGraph<&str> = KeyedGraph::directed();

        assert_eq!(graph.bfs(&"missing"), Err(Error::KeyNotFound));
        assert_eq!(graph.dfs(&"missing"), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_keyed_graph_shortest_paths() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::directed();
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 1).unwrap();
        graph.add_edge("A", "C", 5).unwrap();

        let distances = graph.shortest_paths(&"A").unwrap();
        assert_eq!(distances[&"A"], Distance::Finite(0));
        assert_eq!(distances[&"B"], Distance::Finite(1));
        assert_eq!(distances[&"C"], Distance::Finite(2));
    }

    #[test]
    fn test_keyed_graph_minimum_spanning_tree() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::undirected();
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("A", "C", 2).unwrap();
        graph.add_edge("C", "D", 1).unwrap();

        let tree = graph.minimum_spanning_tree().unwrap().expect("connected");
        assert_eq!(tree, vec![("A", "B", 1), ("C", "D", 1), ("B", "C", 2)]);
    }

    #[test]
    fn test_keyed_graph_mst_disconnected() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::undirected();
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_vertex("isolated");

        assert_eq!(graph.minimum_spanning_tree().unwrap(), None);
    }

    #[test]
    fn test_keyed_graph_page_rank() {
        let mut graph: KeyedGraph<&str> = KeyedGraph::directed();
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "A", 1).unwrap();

        let ranks = graph.page_rank(&PageRankOptions::default());
        assert_eq!(ranks.len(), 2);
        assert!((ranks[&"A"] - 0.5).abs() < 1e-6);
        assert!((ranks[&"B"] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_keyed_graph_with_integer_keys() {
        let mut graph: KeyedGraph<u32> = KeyedGraph::directed();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.bfs(&1).unwrap(), vec![1, 2, 3]);
    }
}
