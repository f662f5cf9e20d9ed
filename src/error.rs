use thiserror::Error;

use crate::graph::VertexId;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure in this crate is an invalid-argument rejection: the algorithms are pure
/// computations over an immutable graph, so each call either succeeds deterministically or
/// refuses malformed input before any traversal work has started. There is no partial-progress
/// or retryable failure mode.
///
/// Outcomes that merely describe the input are not errors. An unreachable vertex in a
/// shortest-path result is reported as [`Distance::Unreachable`](crate::algorithms::Distance),
/// and a disconnected graph handed to the spanning-tree engine yields `Ok(None)`; calling code
/// is expected to handle both as ordinary results.
///
/// # Error Categories
///
/// ## Invalid Arguments
/// - [`Error::VertexNotFound`] - A vertex handle that does not belong to the graph
/// - [`Error::KeyNotFound`] - A key with no registered vertex in a keyed graph
/// - [`Error::RequiresUndirected`] - An undirected-only operation was given a directed graph
///
/// # Examples
///
/// ```rust
/// use edgewise::{Error, Graph, VertexId};
/// use edgewise::algorithms::bfs;
///
/// let graph: Graph<()> = Graph::directed();
/// match bfs(&graph, VertexId::new(0)) {
///     Err(Error::VertexNotFound(vertex)) => {
///         eprintln!("{vertex} was never added to the graph");
///     }
///     other => panic!("expected a rejection, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied vertex does not exist in the graph.
    ///
    /// Returned when a traversal or shortest-path start vertex, or an edge endpoint passed to
    /// the building API, refers to a handle the graph never issued. Detected synchronously,
    /// before any algorithm work begins.
    #[error("vertex {0} does not exist in this graph")]
    VertexNotFound(VertexId),

    /// No vertex is registered under the supplied key.
    ///
    /// The keyed-graph counterpart of [`Error::VertexNotFound`]: the key was never passed to
    /// [`KeyedGraph::add_vertex`](crate::graph::KeyedGraph::add_vertex).
    #[error("no vertex is registered under the supplied key")]
    KeyNotFound,

    /// The operation requires an undirected graph.
    ///
    /// Returned by the minimum-spanning-tree engine when invoked on a directed graph; spanning
    /// trees are defined over symmetric connectivity only.
    #[error("operation requires an undirected graph")]
    RequiresUndirected,
}
