//! Typed search errors.
//!
//! `SearchError` represents invalid input: a policy the engine cannot run
//! with, a node the graph does not know, or a node that breaks the cost
//! contract. Running out of frontier or hitting the capacity cutoff are not
//! errors; they are expressed via
//! [`TerminationReason`](crate::trace::TerminationReason).

use crate::node::Cost;

/// Invalid-input failure for a search query.
///
/// Node identities are rendered with their `Debug` form so the error type
/// does not depend on the graph's identity type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The search policy cannot be used (e.g. zero frontier capacity).
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// A start, target or successor identity did not resolve in the graph.
    #[error("node {node} is not present in the graph")]
    UnknownNode { node: String },

    /// The caller did not initialize the start node's accumulated cost to 0.
    #[error("start node {node} must have g_cost 0, found {g_cost}")]
    StartNotZeroCost { node: String, g_cost: Cost },

    /// A successor edge carried a negative or NaN cost.
    #[error("edge {from} -> {to} has invalid cost {cost}")]
    InvalidEdgeCost { from: String, to: String, cost: Cost },

    /// The node heuristic returned a negative or NaN estimate.
    #[error("heuristic from {from} to {to} returned invalid estimate {estimate}")]
    InvalidHeuristic {
        from: String,
        to: String,
        estimate: Cost,
    },

    /// Parent links from a finalized node did not lead back to the start.
    #[error("parent chain from {node} does not reach the start node")]
    BrokenParentChain { node: String },
}
