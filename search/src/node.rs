//! Node capability contract: the per-node state the engine reads and writes.
//!
//! A searchable node embeds a [`SearchState`] (edge cost, accumulated cost,
//! heuristic, parent) and exposes it through [`SearchNode`]. Identity is a
//! separate value type (`SearchNode::Id`): equality and hashing go through the
//! identity, never through the node's address or its mutable fields.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// Scalar traversal cost.
pub type Cost = f64;

/// Mutable per-query search fields carried by every node.
///
/// The engine writes these during relaxation. Callers initialize them before
/// a query: every node `g_cost = INFINITY` except the start node at `0.0`
/// (see [`SearchState::reset`] and [`SearchState::root`]).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<Id> {
    /// Cost of the edge just traversed to reach this node.
    pub self_cost: Cost,
    /// Best-known accumulated cost from the start node.
    pub g_cost: Cost,
    /// Heuristic estimate of the remaining cost to the target (0 in Dijkstra mode).
    pub h_cost: Cost,
    /// Predecessor on the best-known path. A lookup key into the graph, not an owner.
    pub parent: Option<Id>,
}

impl<Id> SearchState<Id> {
    /// State of a node that has not been reached yet.
    #[must_use]
    pub fn unreached() -> Self {
        Self {
            self_cost: 0.0,
            g_cost: Cost::INFINITY,
            h_cost: 0.0,
            parent: None,
        }
    }

    /// State of the search root.
    #[must_use]
    pub fn root() -> Self {
        Self {
            g_cost: 0.0,
            ..Self::unreached()
        }
    }

    /// Return this state to [`SearchState::unreached`].
    pub fn reset(&mut self) {
        *self = Self::unreached();
    }

    /// `f_cost = g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> Cost {
        self.g_cost + self.h_cost
    }
}

impl<Id> Default for SearchState<Id> {
    fn default() -> Self {
        Self::unreached()
    }
}

/// An outgoing edge produced by [`SearchNode::successors`].
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<Id> {
    /// Identity of the neighbor.
    pub id: Id,
    /// Weight of the edge `current -> id`. Written to the neighbor's
    /// `self_cost` before relaxation.
    pub edge_cost: Cost,
}

impl<Id> Successor<Id> {
    #[must_use]
    pub fn new(id: Id, edge_cost: Cost) -> Self {
        Self { id, edge_cost }
    }
}

/// The capability contract the engine requires of a searchable node.
///
/// # Contract
///
/// - `id()` is stable for the node's lifetime and unique within its graph.
/// - `successors()` returns outgoing edges; an empty list is a dead end, not
///   an error. Every returned id must resolve in the same graph.
/// - `distance(self)` is 0, and `distance` never returns a negative value or
///   NaN. For A* optimality it must not overestimate the remaining cost.
pub trait SearchNode {
    /// Identity used for equality, hashing and parent links.
    type Id: Clone + Eq + Hash + Debug;

    /// This node's identity.
    fn id(&self) -> Self::Id;

    fn search_state(&self) -> &SearchState<Self::Id>;

    fn search_state_mut(&mut self) -> &mut SearchState<Self::Id>;

    /// Outgoing neighbors with their edge weights.
    fn successors(&self) -> Vec<Successor<Self::Id>>;

    /// Heuristic estimate of the cost from `self` to `other`.
    fn distance(&self, other: &Self) -> Cost;

    fn self_cost(&self) -> Cost {
        self.search_state().self_cost
    }

    fn g_cost(&self) -> Cost {
        self.search_state().g_cost
    }

    fn h_cost(&self) -> Cost {
        self.search_state().h_cost
    }

    fn f_cost(&self) -> Cost {
        self.search_state().f_cost()
    }

    fn parent(&self) -> Option<&Self::Id> {
        self.search_state().parent.as_ref()
    }

    /// Frontier ordering key derived from the current cost fields.
    fn priority(&self) -> Priority {
        Priority {
            f_cost: self.f_cost(),
            h_cost: self.h_cost(),
        }
    }
}

/// The node ordering: lower `f_cost` first, ties broken by lower `h_cost`.
///
/// Comparison uses `f64::total_cmp`, so the order is total even for values a
/// well-behaved search never produces.
#[derive(Debug, Clone, Copy)]
pub struct Priority {
    pub f_cost: Cost,
    pub h_cost: Cost,
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then(self.h_cost.total_cmp(&other.h_cost))
    }
}
