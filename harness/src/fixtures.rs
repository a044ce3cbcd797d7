//! Reference graphs shared by tests, benchmarks and the fixture binary.

use crate::graph::{DirectedGraph, NodeId};

/// The five-node diamond A→B(1), A→C(2), B→D(3), C→D(1), D→E(2).
///
/// The shortest A→E route is A, C, D, E with cost 5.
#[must_use]
pub fn diamond() -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    let [a, b, c, d, e] = ["A", "B", "C", "D", "E"].map(|label| graph.add_node(label));
    graph.link(a, b, 1.0);
    graph.link(a, c, 2.0);
    graph.link(b, d, 3.0);
    graph.link(c, d, 1.0);
    graph.link(d, e, 2.0);
    graph
}

/// A `width × height` 4-connected grid with unit edges in both directions.
///
/// Nodes are labeled `"x,y"` and added row by row; each node lists its
/// neighbors right, left, down, up.
#[must_use]
pub fn grid(width: usize, height: usize) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    let mut ids: Vec<NodeId> = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            ids.push(graph.add_node(&format!("{x},{y}")));
        }
    }
    let at = |x: usize, y: usize| ids[y * width + x];
    for y in 0..height {
        for x in 0..width {
            let here = at(x, y);
            if x + 1 < width {
                graph.link(here, at(x + 1, y), 1.0);
            }
            if x > 0 {
                graph.link(here, at(x - 1, y), 1.0);
            }
            if y + 1 < height {
                graph.link(here, at(x, y + 1), 1.0);
            }
            if y > 0 {
                graph.link(here, at(x, y - 1), 1.0);
            }
        }
    }
    graph
}

/// Two components, A→B(1) and C→D(1), plus an isolated node E.
#[must_use]
pub fn disconnected() -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    let [a, b, c, d, _e] = ["A", "B", "C", "D", "E"].map(|label| graph.add_node(label));
    graph.link(a, b, 1.0);
    graph.link(c, d, 1.0);
    graph
}
