//! Path reconstruction from parent back-references.

use crate::contract::{lookup, NodeId, SearchGraph};
use crate::error::SearchError;
use crate::node::SearchNode;

/// Reconstruct the path from `start` to a finalized `end`, inclusive.
///
/// Walks `parent` links from `end` back to `start`, stacking identities, and
/// returns them in start-to-end order. `max_len` bounds the walk: every node
/// on a finalized node's path is itself finalized, so the explored-set size
/// is a sufficient bound.
///
/// # Errors
///
/// Returns [`SearchError::BrokenParentChain`] if a parent link is missing
/// before `start` is reached or the chain is longer than `max_len`, and
/// [`SearchError::UnknownNode`] if a link names a node outside the graph.
pub fn reconstruct_path<G: SearchGraph>(
    graph: &G,
    start: &NodeId<G>,
    end: &NodeId<G>,
    max_len: usize,
) -> Result<Vec<NodeId<G>>, SearchError> {
    let broken = || SearchError::BrokenParentChain {
        node: format!("{end:?}"),
    };

    let mut stack = vec![end.clone()];
    let mut cursor = end.clone();
    while cursor != *start {
        if stack.len() >= max_len {
            return Err(broken());
        }
        let parent = lookup(graph, &cursor)?.parent().cloned().ok_or_else(broken)?;
        stack.push(parent.clone());
        cursor = parent;
    }

    let mut path = Vec::with_capacity(stack.len());
    while let Some(id) = stack.pop() {
        path.push(id);
    }
    Ok(path)
}
