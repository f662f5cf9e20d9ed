//! Single-source shortest paths using Dijkstra's algorithm.
//!
//! This module computes the minimum total edge weight from a start vertex to
//! every vertex of a non-negatively weighted graph. The result is a
//! [`ShortestPaths`] table holding one [`Distance`] per vertex; vertices with
//! no path from the start hold [`Distance::Unreachable`], which is an ordinary
//! outcome rather than an error.
//!
//! # Algorithm
//!
//! The priority queue uses lazy deletion instead of a decrease-key operation:
//! every improvement pushes a fresh entry, and entries whose recorded distance
//! no longer matches the best known distance for their vertex are skipped on
//! extraction. The queue may therefore briefly hold several entries for one
//! vertex, which is expected and harmless.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use crate::graph::{Adjacency, VertexId, Weight};
use crate::{Error, Result};

/// The total path weight from a start vertex to some vertex.
///
/// `Unreachable` is the infinite sentinel: it orders after every finite
/// distance, so comparisons during relaxation need no special casing.
///
/// # Examples
///
/// ```rust
/// use edgewise::algorithms::Distance;
///
/// assert!(Distance::Finite(10) < Distance::Unreachable);
/// assert!(Distance::Finite(3) < Distance::Finite(4));
/// assert_eq!(Distance::Finite(3).finite(), Some(3));
/// assert_eq!(Distance::Unreachable.finite(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// A reachable vertex and the minimum total edge weight to it.
    Finite(Weight),
    /// No path exists from the start vertex.
    Unreachable,
}

impl Distance {
    /// Returns `true` for a finite distance.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite weight, or `None` for an unreachable vertex.
    #[must_use]
    pub const fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(weight) => Some(weight),
            Distance::Unreachable => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(weight) => write!(f, "{weight}"),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

/// Shortest-path distances from a fixed start vertex.
///
/// The table always covers every vertex of the graph the computation ran on,
/// including the start vertex itself (distance 0) and vertices the start
/// cannot reach ([`Distance::Unreachable`]).
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
/// graph.add_edge(a, b, 1)?;
/// graph.add_edge(b, c, 1)?;
/// graph.add_edge(a, c, 5)?;
///
/// let paths = shortest_paths(&graph, a)?;
/// assert_eq!(paths.distance(a), Distance::Finite(0));
/// assert_eq!(paths.distance(b), Distance::Finite(1));
/// // The two-hop route beats the direct edge.
/// assert_eq!(paths.distance(c), Distance::Finite(2));
/// # Ok::<(), edgewise::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: VertexId,
    distances: Vec<Distance>,
}

impl ShortestPaths {
    /// Returns the start vertex the distances are measured from.
    #[inline]
    #[must_use]
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Returns the distance from the start vertex to `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` does not belong to the graph the computation ran on.
    /// Use [`get`](ShortestPaths::get) for a non-panicking lookup.
    #[inline]
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Distance {
        self.distances[vertex.index()]
    }

    /// Returns the distance to `vertex`, or `None` for a vertex the graph
    /// never issued.
    #[must_use]
    pub fn get(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(vertex.index()).copied()
    }

    /// Returns every `(vertex, distance)` pair, in vertex-handle order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(index, distance)| (VertexId::new(index), *distance))
    }

    /// Returns the number of vertices covered by the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if the table covers no vertices (the graph was empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Priority-queue entry ordered by accumulated distance, then vertex handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    distance: Weight,
    vertex: VertexId,
}

/// Computes shortest paths from `start` to every vertex of `graph`.
///
/// Distances start at the infinite sentinel except for `start` (distance 0).
/// Vertices are settled in ascending distance order by repeatedly extracting
/// the minimum entry and relaxing its outgoing edges; stale queue entries are
/// recognized by comparing against the best known distance and skipped.
///
/// # Arguments
///
/// * `graph` - The graph to measure; edge weights are non-negative by type
/// * `start` - The vertex distances are measured from
///
/// # Returns
///
/// A [`ShortestPaths`] table covering every vertex of the graph.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`] if `start` is not a vertex of `graph`.
/// The check happens before any computation.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E) for the distance table and queue
///
/// # Examples
///
/// ```rust
/// use edgewise::prelude::*;
///
/// let mut graph = Graph::undirected();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// let unreached = graph.add_vertex(());
/// graph.add_edge(a, b, 2)?;
///
/// let paths = shortest_paths(&graph, a)?;
/// assert_eq!(paths.distance(b), Distance::Finite(2));
/// assert_eq!(paths.distance(unreached), Distance::Unreachable);
/// # Ok::<(), edgewise::Error>(())
/// ```
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_paths<G: Adjacency>(graph: &G, start: VertexId) -> Result<ShortestPaths> {
    if !graph.contains(start) {
        return Err(Error::VertexNotFound(start));
    }

    let mut distances = vec![Distance::Unreachable; graph.vertex_count()];
    distances[start.index()] = Distance::Finite(0);

    let mut queue = BinaryHeap::new();
    queue.push(Reverse(QueueEntry {
        distance: 0,
        vertex: start,
    }));

    while let Some(Reverse(QueueEntry { distance, vertex })) = queue.pop() {
        // Stale entry: a shorter path to this vertex was recorded after the
        // entry was pushed.
        if Distance::Finite(distance) > distances[vertex.index()] {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(vertex) {
            let candidate = Distance::Finite(distance.saturating_add(weight));
            if candidate < distances[neighbor.index()] {
                distances[neighbor.index()] = candidate;
                queue.push(Reverse(QueueEntry {
                    distance: distance.saturating_add(weight),
                    vertex: neighbor,
                }));
            }
        }
    }

    Ok(ShortestPaths { start, distances })
}
