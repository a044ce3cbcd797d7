//! `DirectedGraph`: label-keyed weighted digraph that the engine can search.
//!
//! Nodes live in an arena and are addressed by [`NodeId`], a `Copy` index
//! that doubles as the search identity and the parent link. Labels are a
//! lookup convenience for callers; the engine never sees them.

use std::collections::HashMap;

use waypoint_search::{Cost, SearchGraph, SearchNode, SearchState, Successor};

/// Arena index of a node in a [`DirectedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Error building a [`DirectedGraph`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint names a label that was never added.
    #[error("unknown node label {label:?}")]
    UnknownNode { label: String },

    /// Edge costs must be finite and non-negative.
    #[error("edge {from:?} -> {to:?} has invalid cost {cost}")]
    InvalidEdgeCost { from: String, to: String, cost: Cost },
}

/// A labeled node with outgoing weighted edges.
#[derive(Debug, Clone)]
pub struct GraphNode {
    id: NodeId,
    label: String,
    /// Outgoing edges in insertion order. At most one edge per target.
    neighbors: Vec<(NodeId, Cost)>,
    state: SearchState<NodeId>,
}

impl GraphNode {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn neighbors(&self) -> &[(NodeId, Cost)] {
        &self.neighbors
    }

    /// Cost of the edge to `to`, if there is one.
    #[must_use]
    pub fn edge_cost(&self, to: NodeId) -> Option<Cost> {
        self.neighbors
            .iter()
            .find(|(id, _)| *id == to)
            .map(|&(_, cost)| cost)
    }
}

impl SearchNode for GraphNode {
    type Id = NodeId;

    fn id(&self) -> NodeId {
        self.id
    }

    fn search_state(&self) -> &SearchState<NodeId> {
        &self.state
    }

    fn search_state_mut(&mut self) -> &mut SearchState<NodeId> {
        &mut self.state
    }

    fn successors(&self) -> Vec<Successor<NodeId>> {
        self.neighbors
            .iter()
            .map(|&(id, cost)| Successor::new(id, cost))
            .collect()
    }

    /// Edge-weight estimate: 0 to itself, the direct edge cost to a
    /// neighbor, otherwise the cheapest outgoing edge (0 with no edges).
    ///
    /// Not admissible in general: the cheapest outgoing edge can exceed the
    /// true remaining cost when the target is reachable through a node that
    /// is not a direct neighbor.
    fn distance(&self, other: &Self) -> Cost {
        if self.id == other.id {
            return 0.0;
        }
        if let Some(cost) = self.edge_cost(other.id) {
            return cost;
        }
        self.neighbors
            .iter()
            .map(|&(_, cost)| cost)
            .reduce(Cost::min)
            .unwrap_or(0.0)
    }
}

/// Weighted directed graph with string labels.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    nodes: Vec<GraphNode>,
    by_label: HashMap<String, NodeId>,
}

impl DirectedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node labeled `label`, or return the existing one's id.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.by_label.get(label) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(GraphNode {
            id,
            label: label.to_owned(),
            neighbors: Vec::new(),
            state: SearchState::unreached(),
        });
        self.by_label.insert(label.to_owned(), id);
        id
    }

    /// Add (or re-weight) the directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either label is missing and
    /// [`GraphError::InvalidEdgeCost`] if `cost` is negative or not finite.
    pub fn add_edge(&mut self, from: &str, to: &str, cost: Cost) -> Result<(), GraphError> {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidEdgeCost {
                from: from.to_owned(),
                to: to.to_owned(),
                cost,
            });
        }
        self.link(from_id, to_id, cost);
        Ok(())
    }

    /// Insert or overwrite an edge between existing ids. Callers guarantee
    /// the cost is valid.
    pub(crate) fn link(&mut self, from: NodeId, to: NodeId, cost: Cost) {
        let neighbors = &mut self.nodes[from.index()].neighbors;
        match neighbors.iter_mut().find(|(id, _)| *id == to) {
            Some(edge) => edge.1 = cost,
            None => neighbors.push((to, cost)),
        }
    }

    #[must_use]
    pub fn get_node(&self, label: &str) -> Option<&GraphNode> {
        self.node_id(label).map(|id| &self.nodes[id.index()])
    }

    #[must_use]
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    #[must_use]
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.index()).map(GraphNode::label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut GraphNode> {
        self.nodes.iter_mut()
    }

    fn require(&self, label: &str) -> Result<NodeId, GraphError> {
        self.node_id(label).ok_or_else(|| GraphError::UnknownNode {
            label: label.to_owned(),
        })
    }
}

impl SearchGraph for DirectedGraph {
    type Node = GraphNode;

    fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut GraphNode> {
        self.nodes.get_mut(id.index())
    }
}
