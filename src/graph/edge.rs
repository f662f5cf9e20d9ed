//! Edge identifier and edge record for adjacency-based graphs.
//!
//! This module provides the [`EdgeId`] handle, the [`Edge`] record stored in a
//! graph's edge arena, and the [`Weight`] scalar carried by every connection.

use std::fmt;

use crate::graph::VertexId;

/// A non-negative traversal cost attached to every edge.
///
/// Non-negativity is enforced by the type, so the shortest-path and
/// spanning-tree engines never need to validate weights at run time. Unweighted
/// graphs conventionally use a weight of 1 on every edge.
pub type Weight = u64;

/// A strongly-typed identifier for edges within a graph.
///
/// `EdgeId` wraps a `usize` index into the graph's edge arena, assigned
/// sequentially starting from 0 as edges are added. Because issuance follows
/// insertion order, the ordering of `EdgeId` values doubles as the
/// deterministic tie-break used when the spanning-tree engine sorts edges of
/// equal weight.
///
/// # Usage
///
/// Edge IDs are created by [`Graph::add_edge`](crate::graph::Graph::add_edge)
/// and should not typically be constructed manually. They are used to:
///
/// - Look up the full edge record via [`Graph::edge`](crate::graph::Graph::edge)
/// - Identify the edges selected into a [`SpanningTree`](crate::algorithms::SpanningTree)
///
/// # Thread Safety
///
/// `EdgeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    ///
    /// Primarily intended for internal use and testing; normal usage should
    /// obtain `EdgeId` values from [`Graph::add_edge`](crate::graph::Graph::add_edge).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// A weighted connection between two vertices.
///
/// Each logical edge is stored exactly once in the owning graph's arena, in
/// insertion order, regardless of the graph's mode. For undirected graphs the
/// `source`/`target` naming merely records which endpoint was mentioned first
/// when the edge was added; the adjacency lists hold the connection from both
/// endpoints' perspectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The endpoint the edge leaves from (first endpoint for undirected graphs).
    pub source: VertexId,
    /// The endpoint the edge arrives at (second endpoint for undirected graphs).
    pub target: VertexId,
    /// The non-negative cost of traversing this edge.
    pub weight: Weight,
}

impl Edge {
    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is not
    /// an endpoint of this edge.
    ///
    /// For a self-loop both endpoints coincide and the vertex itself is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edgewise::prelude::*;
    ///
    /// let mut graph = Graph::undirected();
    /// let a = graph.add_vertex(());
    /// let b = graph.add_vertex(());
    /// let id = graph.add_edge(a, b, 7)?;
    ///
    /// let edge = graph.edge(id).unwrap();
    /// assert_eq!(edge.opposite(a), Some(b));
    /// assert_eq!(edge.opposite(b), Some(a));
    /// # Ok::<(), edgewise::Error>(())
    /// ```
    #[must_use]
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} [{}]", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_edge_id_new() {
        let edge = EdgeId::new(42);
        assert_eq!(edge.index(), 42);
    }

    #[test]
    fn test_edge_id_ordering_matches_insertion() {
        let e1 = EdgeId::new(1);
        let e2 = EdgeId::new(2);
        let e3 = EdgeId::new(3);

        let mut edges = vec![e3, e1, e2];
        edges.sort();
        assert_eq!(edges, vec![e1, e2, e3]);
    }

    #[test]
    fn test_edge_id_hash() {
        let mut set: HashSet<EdgeId> = HashSet::new();
        set.insert(EdgeId::new(1));
        set.insert(EdgeId::new(2));
        set.insert(EdgeId::new(1));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_edge_id_conversions() {
        let edge: EdgeId = 123usize.into();
        assert_eq!(edge.index(), 123);

        let back: usize = edge.into();
        assert_eq!(back, 123);
    }

    #[test]
    fn test_edge_id_formats() {
        let edge = EdgeId::new(42);
        assert_eq!(format!("{edge:?}"), "EdgeId(42)");
        assert_eq!(format!("{edge}"), "e42");
    }

    #[test]
    fn test_edge_id_distinct_from_vertex_id() {
        // EdgeId and VertexId share an underlying representation but are
        // distinct types; mixing them is a compile error.
        let vertex = VertexId::new(5);
        let edge = EdgeId::new(5);

        assert_eq!(vertex.index(), edge.index());
    }

    #[test]
    fn test_edge_opposite() {
        let edge = Edge {
            source: VertexId::new(0),
            target: VertexId::new(1),
            weight: 3,
        };

        assert_eq!(edge.opposite(VertexId::new(0)), Some(VertexId::new(1)));
        assert_eq!(edge.opposite(VertexId::new(1)), Some(VertexId::new(0)));
        assert_eq!(edge.opposite(VertexId::new(2)), None);
    }

    #[test]
    fn test_edge_opposite_self_loop() {
        let edge = Edge {
            source: VertexId::new(4),
            target: VertexId::new(4),
            weight: 0,
        };

        assert_eq!(edge.opposite(VertexId::new(4)), Some(VertexId::new(4)));
    }

    #[test]
    fn test_edge_display() {
        let edge = Edge {
            source: VertexId::new(0),
            target: VertexId::new(2),
            weight: 9,
        };

        assert_eq!(format!("{edge}"), "v0 -> v2 [9]");
    }
}
