//! In-crate test graph: dense `u32` identities, explicit heuristic table.

use std::collections::HashMap;

use crate::contract::SearchGraph;
use crate::node::{Cost, SearchNode, SearchState, Successor};

#[derive(Debug, Clone)]
pub struct TestNode {
    id: u32,
    state: SearchState<u32>,
    edges: Vec<Successor<u32>>,
    /// Heuristic estimate towards a given node id; absent entries are 0.
    estimates: HashMap<u32, Cost>,
}

impl SearchNode for TestNode {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn search_state(&self) -> &SearchState<u32> {
        &self.state
    }

    fn search_state_mut(&mut self) -> &mut SearchState<u32> {
        &mut self.state
    }

    fn successors(&self) -> Vec<Successor<u32>> {
        self.edges.clone()
    }

    fn distance(&self, other: &Self) -> Cost {
        self.estimates.get(&other.id).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestGraph {
    nodes: Vec<TestNode>,
}

impl TestGraph {
    pub fn with_nodes(count: u32) -> Self {
        Self {
            nodes: (0..count)
                .map(|id| TestNode {
                    id,
                    state: SearchState::unreached(),
                    edges: Vec::new(),
                    estimates: HashMap::new(),
                })
                .collect(),
        }
    }

    pub fn edge(&mut self, from: u32, to: u32, cost: Cost) -> &mut Self {
        self.nodes[from as usize].edges.push(Successor::new(to, cost));
        self
    }

    pub fn estimate(&mut self, from: u32, to: u32, cost: Cost) -> &mut Self {
        self.nodes[from as usize].estimates.insert(to, cost);
        self
    }

    /// Caller-side initialization: every node unreached, `start` at cost 0.
    pub fn reset(&mut self, start: u32) {
        for node in &mut self.nodes {
            node.state.reset();
        }
        self.nodes[start as usize].state = SearchState::root();
    }

    pub fn set_parent(&mut self, id: u32, parent: u32) {
        self.nodes[id as usize].state.parent = Some(parent);
    }

    pub fn clear_parent(&mut self, id: u32) {
        self.nodes[id as usize].state.parent = None;
    }

    pub fn g_cost(&self, id: u32) -> Cost {
        self.nodes[id as usize].state.g_cost
    }

    pub fn state(&self, id: u32) -> &SearchState<u32> {
        &self.nodes[id as usize].state
    }
}

impl SearchGraph for TestGraph {
    type Node = TestNode;

    fn node(&self, id: &u32) -> Option<&TestNode> {
        self.nodes.get(*id as usize)
    }

    fn node_mut(&mut self, id: &u32) -> Option<&mut TestNode> {
        self.nodes.get_mut(*id as usize)
    }
}

/// The five-node diamond: 0→1(1), 0→2(2), 1→3(3), 2→3(1), 3→4(2).
pub fn diamond() -> TestGraph {
    let mut graph = TestGraph::with_nodes(5);
    graph
        .edge(0, 1, 1.0)
        .edge(0, 2, 2.0)
        .edge(1, 3, 3.0)
        .edge(2, 3, 1.0)
        .edge(3, 4, 2.0);
    graph
}
