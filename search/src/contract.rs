//! Search graph contract trait.

use crate::error::SearchError;
use crate::node::SearchNode;

/// Identity type of a graph's nodes.
pub type NodeId<G> = <<G as SearchGraph>::Node as SearchNode>::Id;

/// Trait for node stores the engine can search.
///
/// The graph owns its nodes. The engine only reads topology (through
/// [`SearchNode::successors`]) and writes the per-node
/// [`SearchState`](crate::node::SearchState) fields; it never adds or removes
/// nodes.
///
/// # Contract
///
/// - `node` and `node_mut` resolve the same identity to the same node.
/// - Every successor id a node returns resolves through `node`.
pub trait SearchGraph {
    type Node: SearchNode;

    fn node(&self, id: &<Self::Node as SearchNode>::Id) -> Option<&Self::Node>;

    fn node_mut(&mut self, id: &<Self::Node as SearchNode>::Id) -> Option<&mut Self::Node>;

    /// Whether `id` resolves to a node.
    fn contains_node(&self, id: &<Self::Node as SearchNode>::Id) -> bool {
        self.node(id).is_some()
    }
}

/// Resolve `id` or report it as unknown.
pub(crate) fn lookup<'g, G: SearchGraph>(
    graph: &'g G,
    id: &NodeId<G>,
) -> Result<&'g G::Node, SearchError> {
    graph.node(id).ok_or_else(|| SearchError::UnknownNode {
        node: format!("{id:?}"),
    })
}

/// Mutable counterpart of [`lookup`].
pub(crate) fn lookup_mut<'g, G: SearchGraph>(
    graph: &'g mut G,
    id: &NodeId<G>,
) -> Result<&'g mut G::Node, SearchError> {
    graph.node_mut(id).ok_or_else(|| SearchError::UnknownNode {
        node: format!("{id:?}"),
    })
}
