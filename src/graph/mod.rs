//! Adjacency-based graph representation.
//!
//! This module provides the data model the algorithm engines operate on:
//!
//! - [`Graph`] - the concrete container: vertices with opaque payloads, weighted
//!   edges, and per-vertex adjacency lists in insertion order
//! - [`VertexId`] / [`EdgeId`] - strongly-typed handles for vertices and edges
//! - [`Adjacency`] / [`EdgeList`] - the read-only traits the algorithms consume
//! - [`KeyedGraph`] - a wrapper that addresses vertices by domain key instead of
//!   by handle
//!
//! # Design
//!
//! A graph is exclusively directed or exclusively undirected; the mode is fixed
//! by the constructor and never changes. Adjacency order is insertion order and
//! is semantically significant: traversals visit neighbors in exactly that
//! order. Every logical edge is additionally recorded once in an arena, which
//! gives the spanning-tree engine a duplicate-free edge enumeration and gives
//! equal-weight edges a deterministic insertion-order tie-break.
//!
//! Algorithms treat the graph as immutable shared state: they take `&G`, keep
//! all working state private to the call, and never mutate the structure.
//! Concurrent read-only algorithm runs over one graph are therefore safe.

mod edge;
mod keyed;
mod vertex;

pub use edge::{Edge, EdgeId, Weight};
pub use keyed::KeyedGraph;
pub use vertex::VertexId;

use crate::{Error, Result};

/// Read-only access to an adjacency structure.
///
/// This is the seam between the algorithm engines and the graph representation:
/// traversal, shortest-path, and ranking code is written against this trait, so
/// alternative representations can reuse the engines unchanged. Implementations
/// must issue vertex handles densely in `0..vertex_count()`.
pub trait Adjacency {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns `true` if `vertex` is a handle this graph has issued.
    fn contains(&self, vertex: VertexId) -> bool;

    /// Returns the outgoing connections of `vertex` in insertion order.
    ///
    /// A vertex the graph never issued yields an empty iterator; callers that
    /// need the distinction should check [`contains`](Adjacency::contains)
    /// first, which is what the algorithm entry points do.
    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_;
}

/// Read-only access to a graph's logical edge set.
///
/// The spanning-tree engine consumes this in addition to [`Adjacency`]: it
/// needs each undirected connection exactly once, in insertion order, plus the
/// graph's mode. The arena enumeration provides both.
pub trait EdgeList {
    /// Returns `true` if edges are one-way.
    fn is_directed(&self) -> bool;

    /// Returns the number of logical edges (one per connection, not one per
    /// endpoint).
    fn edge_count(&self) -> usize;

    /// Looks up a single edge record, or `None` for a handle this graph never
    /// issued.
    fn edge(&self, edge: EdgeId) -> Option<Edge>;

    /// Returns all logical edges in insertion order.
    fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_;
}

/// An adjacency-list graph with opaque vertex payloads and weighted edges.
///
/// The graph is the single input to every algorithm in this crate. Callers
/// build it once through [`add_vertex`](Graph::add_vertex) and
/// [`add_edge`](Graph::add_edge), then run any number of algorithms against it;
/// no algorithm mutates the structure or holds state across calls.
///
/// # Type Parameters
///
/// * `V` - The vertex payload type. Payloads are opaque: they are never
///   consulted for identity or equality, which live entirely in [`VertexId`].
///
/// # Examples
///
/// ```rust
/// use edgewise::prelude::*;
///
/// let mut graph = Graph::directed();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
///
/// graph.add_edge(a, b, 1)?;
/// graph.add_edge(b, c, 1)?;
/// graph.add_edge(a, c, 5)?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// let first_hops: Vec<_> = graph.neighbors(a).collect();
/// assert_eq!(first_hops, vec![(b, 1), (c, 5)]);
/// # Ok::<(), edgewise::Error>(())
/// ```
///
/// # Thread Safety
///
/// `Graph<V>` is [`Send`] and [`Sync`] when `V` is; a shared `&Graph<V>` can
/// back concurrent algorithm runs as long as the owner is not mutating it.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    directed: bool,
    payloads: Vec<V>,
    adjacency: Vec<Vec<(VertexId, Weight)>>,
    edges: Vec<Edge>,
}

impl<V> Graph<V> {
    /// Creates an empty graph whose edges are one-way.
    #[must_use]
    pub fn directed() -> Self {
        Graph {
            directed: true,
            payloads: Vec::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates an empty graph whose edges connect both endpoints symmetrically.
    ///
    /// Each undirected edge is recorded once in the edge arena but appears in
    /// both endpoints' adjacency lists (once for a self-loop).
    #[must_use]
    pub fn undirected() -> Self {
        Graph {
            directed: false,
            payloads: Vec::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a vertex carrying `payload` and returns its handle.
    ///
    /// Handles are issued densely in insertion order; the first vertex is
    /// index 0.
    pub fn add_vertex(&mut self, payload: V) -> VertexId {
        let vertex = VertexId::new(self.payloads.len());
        self.payloads.push(payload);
        self.adjacency.push(Vec::new());
        vertex
    }

    /// Adds an edge between two existing vertices and returns its handle.
    ///
    /// For an undirected graph the connection is entered into both endpoints'
    /// adjacency lists; the arena records it once either way. Parallel edges
    /// are permitted and kept in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if either endpoint is not a vertex of
    /// this graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: Weight) -> Result<EdgeId> {
        if !self.contains(source) {
            return Err(Error::VertexNotFound(source));
        }
        if !self.contains(target) {
            return Err(Error::VertexNotFound(target));
        }

        self.adjacency[source.index()].push((target, weight));
        if !self.directed && source != target {
            self.adjacency[target.index()].push((source, weight));
        }

        let edge = EdgeId::new(self.edges.len());
        self.edges.push(Edge {
            source,
            target,
            weight,
        });
        Ok(edge)
    }

    /// Returns the payload of `vertex`, or `None` for a handle this graph never
    /// issued.
    #[must_use]
    pub fn payload(&self, vertex: VertexId) -> Option<&V> {
        self.payloads.get(vertex.index())
    }

    /// Returns `true` if edges are one-way.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.payloads.len()
    }

    /// Returns the number of logical edges (one per connection, not one per
    /// endpoint).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Returns `true` if `vertex` is a handle this graph has issued.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.payloads.len()
    }

    /// Returns the outgoing connections of `vertex` in insertion order.
    ///
    /// An unknown vertex yields an empty iterator.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.neighbor_slice(vertex).iter().copied()
    }

    /// Returns an iterator over every vertex handle, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.payloads.len()).map(VertexId::new)
    }

    /// Looks up a single edge record, or `None` for a handle this graph never
    /// issued.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<Edge> {
        self.edges.get(edge.index()).copied()
    }

    /// Returns all logical edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId::new(index), *edge))
    }

    fn neighbor_slice(&self, vertex: VertexId) -> &[(VertexId, Weight)] {
        self.adjacency
            .get(vertex.index())
            .map_or(&[], Vec::as_slice)
    }
}

impl<V> Adjacency for Graph<V> {
    fn vertex_count(&self) -> usize {
        self.payloads.len()
    }

    fn contains(&self, vertex: VertexId) -> bool {
        vertex.index() < self.payloads.len()
    }

    fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.neighbor_slice(vertex).iter().copied()
    }
}

impl<V> EdgeList for Graph<V> {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edge(&self, edge: EdgeId) -> Option<Edge> {
        self.edges.get(edge.index()).copied()
    }

    fn edges(&self) -> impl Iterator<Item = (EdgeId, Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeId::new(index), *edge))
    }
}
