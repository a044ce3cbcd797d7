//! Shared helpers for waypoint benchmark suites.

use waypoint_harness::fixtures;
use waypoint_harness::graph::{DirectedGraph, NodeId};
use waypoint_search::{AStarSearcher, SearchPolicy};

/// A square grid with its opposite corners resolved.
pub struct GridSetup {
    pub graph: DirectedGraph,
    pub start: NodeId,
    pub target: NodeId,
}

/// Build a `side × side` grid and resolve `"0,0"` and the far corner.
///
/// # Panics
///
/// Panics if `side` is 0. Benchmark setup failures are fatal.
#[must_use]
pub fn prepare_grid(side: usize) -> GridSetup {
    let graph = fixtures::grid(side, side);
    let far = side - 1;
    let start = graph.node_id("0,0").expect("grid has an origin");
    let target = graph
        .node_id(&format!("{far},{far}"))
        .expect("grid has a far corner");
    GridSetup {
        graph,
        start,
        target,
    }
}

/// An engine whose capacity covers every node of a `side × side` grid.
///
/// # Panics
///
/// Panics if the policy is rejected, which cannot happen for `side >= 1`.
#[must_use]
pub fn searcher_for(side: usize, record_trace: bool) -> AStarSearcher<DirectedGraph> {
    AStarSearcher::new(SearchPolicy {
        frontier_capacity: side * side,
        record_trace,
    })
    .expect("capacity is at least 1")
}
