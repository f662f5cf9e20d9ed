//! Minimum spanning tree construction using Kruskal's algorithm.
//!
//! This module builds a minimum-weight spanning tree over an undirected graph
//! by greedily accepting edges in ascending weight order whenever they join
//! two previously separate components, as decided by a disjoint-set union.
//!
//! A disconnected graph has no spanning tree; the engine reports that case
//! explicitly as `Ok(None)` rather than returning a partial forest, and it is
//! an ordinary outcome for calling code to handle, not an error.

use crate::algorithms::union_find::UnionFind;
use crate::graph::{Adjacency, EdgeId, EdgeList, Weight};
use crate::{Error, Result};

/// A minimum-weight spanning tree produced by [`minimum_spanning_tree`].
///
/// Holds the handles of the accepted edges, in acceptance (ascending-weight)
/// order, together with their total weight. For a graph with `n` vertices the
/// tree holds exactly `n - 1` edges (zero for the empty and single-vertex
/// graphs). Edge handles resolve back to full records through
/// [`Graph::edge`](crate::graph::Graph::edge).
///
/// # Examples
///
/// ```rust
/// use edgewise::prelude::*;
///
/// let mut graph = Graph::undirected();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// graph.add_edge(a, b, 1)?;
/// graph.add_edge(b, c, 2)?;
/// graph.add_edge(a, c, 4)?;
///
/// let tree = minimum_spanning_tree(&graph)?.expect("graph is connected");
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 3);
/// # Ok::<(), edgewise::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<EdgeId>,
    total_weight: Weight,
}

impl SpanningTree {
    /// Returns the accepted edge handles in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the sum of the accepted edges' weights.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns the number of edges in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` for the zero-edge tree of an empty or single-vertex
    /// graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Computes a minimum-weight spanning tree of an undirected graph.
///
/// The logical edge set (one record per connection) is sorted by
/// `(weight, insertion order)`, so repeated runs on identical input select an
/// identical tree even when several minimum trees exist. Edges are then
/// accepted greedily whenever their endpoints lie in different components;
/// edges that would close a cycle are discarded. Acceptance stops as soon as
/// the tree spans all vertices.
///
/// # Arguments
///
/// * `graph` - The undirected graph to span
///
/// # Returns
///
/// * `Ok(Some(tree))` - the minimum spanning tree of a connected graph
/// * `Ok(None)` - the graph is disconnected and no spanning tree exists
///
/// The empty graph and the single-vertex graph are trivially connected and
/// yield an empty tree.
///
/// # Errors
///
/// Returns [`Error::RequiresUndirected`] if `graph` is directed. The check
/// happens before any computation.
///
/// # Complexity
///
/// - Time: O(E log E) for the sort, plus near-linear union-find processing
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use edgewise::prelude::*;
///
/// let mut graph = Graph::undirected();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// let isolated = graph.add_vertex(());
/// graph.add_edge(a, b, 1)?;
///
/// // `isolated` cannot be spanned.
/// assert_eq!(minimum_spanning_tree(&graph)?, None);
/// # Ok::<(), edgewise::Error>(())
/// ```
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_tree<G>(graph: &G) -> Result<Option<SpanningTree>>
where
    G: Adjacency + EdgeList,
{
    if graph.is_directed() {
        return Err(Error::RequiresUndirected);
    }

    let vertex_count = graph.vertex_count();
    let required = vertex_count.saturating_sub(1);

    // Sorting by (weight, handle) keeps equal-weight edges in insertion
    // order, making the selected tree deterministic.
    let mut candidates: Vec<_> = graph.edges().collect();
    candidates.sort_by_key(|(id, edge)| (edge.weight, *id));

    let mut sets = UnionFind::new(vertex_count);
    let mut edges = Vec::with_capacity(required);
    let mut total_weight: Weight = 0;

    for (id, edge) in candidates {
        if sets.union(edge.source.index(), edge.target.index()) {
            edges.push(id);
            total_weight = total_weight.saturating_add(edge.weight);
            if edges.len() == required {
                break;
            }
        }
    }

    if edges.len() < required {
        tracing::debug!(
            accepted = edges.len(),
            required,
            "graph is disconnected; no spanning tree exists"
        );
        return Ok(None);
    }

    Ok(Some(SpanningTree {
        edges,
        total_weight,
    }))
}
