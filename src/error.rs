//! Error type shared by the graph representation and all algorithms.

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Errors raised when a precondition of a graph operation is violated.
///
/// Weights are stored as their `Display` representation so that the error type does not
/// need to be generic over the weight type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node index outside of `0..n` was supplied
    #[error("node {node} is out of range for a graph with {n} nodes")]
    InvalidNode { node: Node, n: NumNodes },

    /// A negative or non-finite weight was found by an algorithm requiring non-negative weights
    #[error("edge ({u},{v}) has weight {weight}, but non-negative finite weights are required")]
    InvalidWeight { u: Node, v: Node, weight: String },

    /// A single spanning tree was required, but the graph only admits a spanning forest
    #[error("graph is disconnected: spanning forest has {components} components")]
    DisconnectedGraph { components: NumNodes },

    /// A sum of weights does not fit into the weight type or reaches its infinite sentinel
    #[error("sum of weights exceeds the largest finite weight")]
    WeightOverflow,

    /// A spanning tree algorithm was invoked on a directed graph
    #[error("spanning trees are only defined for undirected graphs")]
    DirectedGraph,
}

/// Result-Alias for all fallible graph operations
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Returns early with `GraphError::InvalidNode` if `$node >= $n`
macro_rules! ensure_node {
    ($node: expr, $n: expr) => {{
        let (node, n): ($crate::node::Node, $crate::node::NumNodes) = ($node, $n);
        if node >= n {
            return Err($crate::error::GraphError::InvalidNode { node, n });
        }
    }};
}

pub(crate) use ensure_node;
