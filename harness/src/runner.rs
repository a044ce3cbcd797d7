//! Route runner: the caller side of a search query.
//!
//! The engine expects the caller to initialize node costs before every query
//! and to translate identities back into something readable afterwards. The
//! runner does both for [`DirectedGraph`] and packages the result as a
//! report with a stable digest.
//!
//! # Pipeline
//!
//! ```text
//! resolve labels → reset_costs() → find_path() / find_all_paths()
//!   → labels + cost + stats → trace digest (if traced) → report
//! ```

use tracing::info;

use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_ROUTE_REPORT};
use waypoint_search::{
    AStarSearcher, Cost, SearchError, SearchGraph, SearchNode, SearchState, SearchStats,
    SearchTrace, TerminationReason,
};

use crate::graph::{DirectedGraph, NodeId};

/// Error during a route run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RunError {
    /// A start or target label is not in the graph.
    #[error("unknown node label {label:?}")]
    UnknownLabel { label: String },

    /// The engine rejected the query.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Outcome of a single-target route query.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteReport {
    pub start: String,
    pub target: String,
    /// Labels from start to the terminal node.
    pub path: Vec<String>,
    pub cost: Option<Cost>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    /// Digest of the expansion trace, when the searcher records one.
    pub trace_digest: Option<ContentHash>,
}

impl RouteReport {
    /// Whether the path ends at the target.
    #[must_use]
    pub fn is_target_reached(&self) -> bool {
        self.termination == TerminationReason::TargetReached
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cost": self.cost,
            "path": self.path,
            "start": self.start,
            "stats": stats_to_json(&self.stats),
            "target": self.target,
            "termination_reason": self.termination.as_str(),
            "trace_digest": self.trace_digest.as_ref().map(ContentHash::as_str),
        })
    }

    #[must_use]
    pub fn to_canonical_json_bytes(&self) -> Vec<u8> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical report bytes.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        canonical_hash(DOMAIN_ROUTE_REPORT, &self.to_canonical_json_bytes())
    }
}

/// One finalized destination of an all-routes sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    pub target: String,
    pub path: Vec<String>,
    pub cost: Cost,
}

/// Outcome of a single-source sweep. Routes are sorted by target label.
#[derive(Debug, Clone, PartialEq)]
pub struct AllRoutesReport {
    pub start: String,
    pub routes: Vec<RouteEntry>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    pub trace_digest: Option<ContentHash>,
}

impl AllRoutesReport {
    /// The route to `target`, if it was finalized.
    #[must_use]
    pub fn route(&self, target: &str) -> Option<&RouteEntry> {
        self.routes
            .binary_search_by(|entry| entry.target.as_str().cmp(target))
            .ok()
            .map(|i| &self.routes[i])
    }
}

/// Put every node back to the unreached state and make `start` the root.
///
/// This is the caller-side initialization the engine requires before each
/// query (all `g_cost` infinite, the start at 0).
pub fn reset_costs(graph: &mut DirectedGraph, start: NodeId) {
    for node in graph.iter_mut() {
        let is_start = node.id() == start;
        let state = node.search_state_mut();
        if is_start {
            *state = SearchState::root();
        } else {
            state.reset();
        }
    }
}

/// Run `find_path` between two labels.
///
/// # Errors
///
/// Returns [`RunError::UnknownLabel`] for a label not in the graph and
/// [`RunError::Search`] if the engine rejects the query.
pub fn run_route(
    graph: &mut DirectedGraph,
    searcher: &mut AStarSearcher<DirectedGraph>,
    start: &str,
    target: &str,
) -> Result<RouteReport, RunError> {
    let start_id = resolve(graph, start)?;
    let target_id = resolve(graph, target)?;
    reset_costs(graph, start_id);

    let outcome = searcher.find_path(graph, &start_id, &target_id)?;
    let report = RouteReport {
        start: start.to_owned(),
        target: target.to_owned(),
        path: labels(graph, &outcome.path),
        cost: outcome.cost,
        termination: outcome.termination,
        stats: outcome.stats,
        trace_digest: trace_digest(graph, outcome.trace.as_ref()),
    };
    info!(
        start,
        target,
        termination = report.termination.as_str(),
        hops = report.path.len().saturating_sub(1),
        cost = ?report.cost,
        "route complete"
    );
    Ok(report)
}

/// Run `find_all_paths` from a label.
///
/// # Errors
///
/// Same conditions as [`run_route`].
pub fn run_all_routes(
    graph: &mut DirectedGraph,
    searcher: &mut AStarSearcher<DirectedGraph>,
    start: &str,
) -> Result<AllRoutesReport, RunError> {
    let start_id = resolve(graph, start)?;
    reset_costs(graph, start_id);

    let outcome = searcher.find_all_paths(graph, &start_id)?;
    let graph = &*graph;
    let mut routes: Vec<RouteEntry> = outcome
        .finalized
        .iter()
        .filter_map(|id| {
            let node = graph.node(id)?;
            Some(RouteEntry {
                target: node.label().to_owned(),
                path: labels(graph, outcome.paths.get(id)?),
                cost: node.g_cost(),
            })
        })
        .collect();
    routes.sort_by(|a, b| a.target.cmp(&b.target));

    info!(
        start,
        termination = outcome.termination.as_str(),
        routes = routes.len(),
        "all routes complete"
    );
    Ok(AllRoutesReport {
        start: start.to_owned(),
        routes,
        termination: outcome.termination,
        stats: outcome.stats,
        trace_digest: trace_digest(graph, outcome.trace.as_ref()),
    })
}

fn resolve(graph: &DirectedGraph, label: &str) -> Result<NodeId, RunError> {
    graph.node_id(label).ok_or_else(|| RunError::UnknownLabel {
        label: label.to_owned(),
    })
}

fn label_of(graph: &DirectedGraph, id: NodeId) -> String {
    graph
        .label(id)
        .map_or_else(|| format!("#{}", id.index()), str::to_owned)
}

fn labels(graph: &DirectedGraph, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| label_of(graph, id)).collect()
}

fn trace_digest(graph: &DirectedGraph, trace: Option<&SearchTrace<NodeId>>) -> Option<ContentHash> {
    trace.map(|trace| trace.digest(|&id| label_of(graph, id)))
}

fn stats_to_json(stats: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "expansions": stats.expansions,
        "frontier_high_water": stats.frontier_high_water,
        "refused": stats.refused,
        "relaxations": stats.relaxations,
    })
}
