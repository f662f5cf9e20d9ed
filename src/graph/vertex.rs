//! Vertex identifier for adjacency-based graphs.
//!
//! This module provides the [`VertexId`] type, a strongly-typed handle for vertices
//! within a [`Graph`](crate::graph::Graph). The newtype wrapper prevents accidental
//! confusion between vertex handles and other integer values such as edge indices
//! or weights.

use std::fmt;

/// A strongly-typed identifier for vertices within a graph.
///
/// `VertexId` wraps a `usize` index assigned densely in insertion order, starting
/// from 0, when vertices are added to a graph. The handle is the vertex's identity:
/// two vertices are equal exactly when their handles are equal, and payloads are
/// never consulted for equality.
///
/// # Usage
///
/// Vertex IDs are created by [`Graph::add_vertex`](crate::graph::Graph::add_vertex)
/// and should not typically be constructed manually. They are used to:
///
/// - Reference endpoints when adding edges
/// - Name the start vertex of a traversal or shortest-path run
/// - Index per-vertex algorithm results
///
/// # Examples
///
/// ```rust
/// use edgewise::{Graph, VertexId};
///
/// let mut graph: Graph<&str> = Graph::directed();
/// let a: VertexId = graph.add_vertex("A");
/// let b: VertexId = graph.add_vertex("B");
///
/// assert_ne!(a, b);
///
/// // VertexIds can be used as keys in collections
/// use std::collections::HashMap;
/// let mut labels: HashMap<VertexId, &str> = HashMap::new();
/// labels.insert(a, "start");
/// ```
///
/// # Thread Safety
///
/// `VertexId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// This constructor is primarily intended for internal use and testing. Normal
    /// usage should obtain `VertexId` values from
    /// [`Graph::add_vertex`](crate::graph::Graph::add_vertex); a handle fabricated
    /// for an index the graph never issued is rejected by the algorithms.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    ///
    /// The index is a 0-based position that can be used to index into vectors that
    /// store per-vertex data, such as the rank vector returned by
    /// [`page_rank`](crate::algorithms::page_rank).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_vertex_id_new() {
        let vertex = VertexId::new(42);
        assert_eq!(vertex.index(), 42);
    }

    #[test]
    fn test_vertex_id_equality() {
        let v1 = VertexId::new(5);
        let v2 = VertexId::new(5);
        let v3 = VertexId::new(10);

        assert_eq!(v1, v2);
        assert_ne!(v1, v3);
    }

    #[test]
    fn test_vertex_id_ordering() {
        let v1 = VertexId::new(1);
        let v2 = VertexId::new(2);
        let v3 = VertexId::new(3);

        let mut vertices = vec![v3, v1, v2];
        vertices.sort();
        assert_eq!(vertices, vec![v1, v2, v3]);
    }

    #[test]
    fn test_vertex_id_hash() {
        let mut set: HashSet<VertexId> = HashSet::new();
        set.insert(VertexId::new(1));
        set.insert(VertexId::new(2));
        set.insert(VertexId::new(1)); // Should not add duplicate

        assert_eq!(set.len(), 2);
        assert!(set.contains(&VertexId::new(1)));
    }

    #[test]
    fn test_vertex_id_as_map_key() {
        let mut map: HashMap<VertexId, &str> = HashMap::new();
        map.insert(VertexId::new(1), "first");
        map.insert(VertexId::new(2), "second");

        assert_eq!(map.get(&VertexId::new(1)), Some(&"first"));
        assert_eq!(map.get(&VertexId::new(3)), None);
    }

    #[test]
    fn test_vertex_id_from_usize() {
        let vertex: VertexId = 123usize.into();
        assert_eq!(vertex.index(), 123);

        let back: usize = vertex.into();
        assert_eq!(back, 123);
    }

    #[test]
    fn test_vertex_id_debug_format() {
        let vertex = VertexId::new(42);
        assert_eq!(format!("{vertex:?}"), "VertexId(42)");
    }

    #[test]
    fn test_vertex_id_display_format() {
        let vertex = VertexId::new(42);
        assert_eq!(format!("{vertex}"), "v42");
    }

    #[test]
    fn test_vertex_id_array_indexing() {
        let data = vec!["zero", "one", "two", "three"];
        let vertex = VertexId::new(2);

        assert_eq!(data[vertex.index()], "two");
    }
}
