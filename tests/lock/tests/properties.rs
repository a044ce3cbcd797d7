//! Property tests: random non-negative graphs checked against a Bellman-Ford
//! reference, with and without a consistent heuristic.

use std::collections::HashSet;

use proptest::prelude::*;
use waypoint_search::{
    AStarSearcher, Cost, SearchGraph, SearchNode, SearchState, Successor, TerminationReason,
};

type Edge = (usize, usize, u8);

#[derive(Debug, Clone)]
struct PropNode {
    id: usize,
    state: SearchState<usize>,
    edges: Vec<Successor<usize>>,
    /// Heuristic estimate towards each node, indexed by node id.
    estimates: Vec<Cost>,
}

impl SearchNode for PropNode {
    type Id = usize;

    fn id(&self) -> usize {
        self.id
    }

    fn search_state(&self) -> &SearchState<usize> {
        &self.state
    }

    fn search_state_mut(&mut self) -> &mut SearchState<usize> {
        &mut self.state
    }

    fn successors(&self) -> Vec<Successor<usize>> {
        self.edges.clone()
    }

    fn distance(&self, other: &Self) -> Cost {
        self.estimates[other.id]
    }
}

#[derive(Debug, Clone)]
struct PropGraph {
    nodes: Vec<PropNode>,
}

impl PropGraph {
    /// Build a graph whose heuristic is `scale` times the true distance
    /// (0 when the target is unreachable). `scale` in `[0, 1]` keeps it
    /// consistent.
    fn build(n: usize, edges: &[Edge], scale: Cost) -> Self {
        let nodes = (0..n)
            .map(|id| PropNode {
                id,
                state: SearchState::unreached(),
                edges: edges
                    .iter()
                    .filter(|&&(from, _, _)| from == id)
                    .map(|&(_, to, cost)| Successor::new(to, Cost::from(cost)))
                    .collect(),
                estimates: bellman_ford(n, edges, id)
                    .into_iter()
                    .map(|d| d.map_or(0.0, |d| d * scale))
                    .collect(),
            })
            .collect();
        Self { nodes }
    }

    fn reset(&mut self, start: usize) {
        for node in &mut self.nodes {
            node.state.reset();
        }
        self.nodes[start].state = SearchState::root();
    }
}

impl SearchGraph for PropGraph {
    type Node = PropNode;

    fn node(&self, id: &usize) -> Option<&PropNode> {
        self.nodes.get(*id)
    }

    fn node_mut(&mut self, id: &usize) -> Option<&mut PropNode> {
        self.nodes.get_mut(*id)
    }
}

/// Single-source shortest distances; `None` for unreachable nodes.
fn bellman_ford(n: usize, edges: &[Edge], start: usize) -> Vec<Option<Cost>> {
    let mut dist = vec![None; n];
    dist[start] = Some(0.0);
    for _ in 0..n {
        for &(from, to, cost) in edges {
            if let Some(d) = dist[from] {
                let candidate = d + Cost::from(cost);
                if !matches!(dist[to], Some(current) if current <= candidate) {
                    dist[to] = Some(candidate);
                }
            }
        }
    }
    dist
}

/// Sum of the cheapest edge between each consecutive pair, or `None` if a
/// hop has no edge.
fn path_cost(edges: &[Edge], path: &[usize]) -> Option<Cost> {
    path.windows(2).try_fold(0.0, |total, hop| {
        edges
            .iter()
            .filter(|&&(from, to, _)| from == hop[0] && to == hop[1])
            .map(|&(_, _, cost)| Cost::from(cost))
            .reduce(Cost::min)
            .map(|cost| total + cost)
    })
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (1usize..8).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0u8..10), 0..24),
        )
    })
}

fn check_all_pairs(n: usize, edges: &[Edge], scale: Cost) -> Result<(), TestCaseError> {
    let mut graph = PropGraph::build(n, edges, scale);
    let mut searcher = AStarSearcher::default();

    for start in 0..n {
        let reference = bellman_ford(n, edges, start);
        for target in 0..n {
            graph.reset(start);
            let outcome = searcher.find_path(&mut graph, &start, &target).unwrap();
            match reference[target] {
                Some(expected) => {
                    prop_assert_eq!(outcome.termination, TerminationReason::TargetReached);
                    prop_assert_eq!(outcome.cost, Some(expected));
                    prop_assert_eq!(outcome.path.first(), Some(&start));
                    prop_assert_eq!(outcome.path.last(), Some(&target));
                    prop_assert_eq!(path_cost(edges, &outcome.path), Some(expected));
                }
                None => {
                    prop_assert_eq!(outcome.termination, TerminationReason::FrontierExhausted);
                    prop_assert!(outcome.path.is_empty());
                }
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn dijkstra_mode_costs_match_reference((n, edges) in graph_strategy()) {
        check_all_pairs(n, &edges, 0.0)?;
    }

    #[test]
    fn consistent_heuristic_costs_match_reference((n, edges) in graph_strategy()) {
        check_all_pairs(n, &edges, 0.5)?;
        check_all_pairs(n, &edges, 1.0)?;
    }

    #[test]
    fn all_paths_agrees_with_find_path((n, edges) in graph_strategy(), start in 0usize..8) {
        let start = start % n;
        let mut graph = PropGraph::build(n, &edges, 0.0);
        let mut searcher = AStarSearcher::default();
        graph.reset(start);
        let all = searcher.find_all_paths(&mut graph, &start).unwrap();

        let reference = bellman_ford(n, &edges, start);
        let reachable: HashSet<usize> = (0..n).filter(|&t| reference[t].is_some()).collect();
        let finalized: HashSet<usize> = all.finalized.iter().copied().collect();
        prop_assert_eq!(&finalized, &reachable);
        prop_assert_eq!(all.finalized.len(), reachable.len(), "each node finalized once");
        prop_assert_eq!(all.termination, TerminationReason::FrontierExhausted);

        for target in reachable {
            graph.reset(start);
            let single = searcher.find_path(&mut graph, &start, &target).unwrap();
            prop_assert_eq!(&single.path, &all.paths[&target], "target {}", target);
        }
    }

    #[test]
    fn repeated_queries_identical((n, edges) in graph_strategy()) {
        let mut graph = PropGraph::build(n, &edges, 1.0);
        let mut searcher = AStarSearcher::default();
        let target = n - 1;

        graph.reset(0);
        let first = searcher.find_path(&mut graph, &0, &target).unwrap();
        graph.reset(0);
        let second = searcher.find_path(&mut graph, &0, &target).unwrap();
        prop_assert_eq!(first, second);
    }
}
