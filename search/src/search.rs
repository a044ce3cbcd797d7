//! Search entry points and the expansion loop.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::contract::{lookup, lookup_mut, NodeId, SearchGraph};
use crate::error::SearchError;
use crate::explored::ExploredSet;
use crate::frontier::BoundedFrontier;
use crate::node::{Cost, SearchNode, Successor};
use crate::path::reconstruct_path;
use crate::policy::SearchPolicy;
use crate::trace::{
    ExpandEvent, RelaxOutcome, RelaxRecord, SearchMode, SearchStats, SearchTrace,
    TerminationReason,
};

/// Result of [`AStarSearcher::find_path`].
///
/// A capacity cutoff yields a path that ends somewhere other than the target.
/// Check [`PathOutcome::is_target_reached`] (or compare [`PathOutcome::terminal`]
/// with the target) before treating the path as a route to the target.
#[derive(Debug, Clone, PartialEq)]
pub struct PathOutcome<Id> {
    /// Start-to-terminal identities. Empty if the frontier emptied first.
    pub path: Vec<Id>,
    /// Accumulated cost of the terminal node, `None` for an empty path.
    pub cost: Option<Cost>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    /// Present when the policy records traces.
    pub trace: Option<SearchTrace<Id>>,
}

impl<Id> PathOutcome<Id> {
    /// Returns `true` if the search terminated because the target was popped.
    #[must_use]
    pub fn is_target_reached(&self) -> bool {
        self.termination == TerminationReason::TargetReached
    }

    /// Last node of the path.
    #[must_use]
    pub fn terminal(&self) -> Option<&Id> {
        self.path.last()
    }
}

/// Result of [`AStarSearcher::find_all_paths`].
#[derive(Debug, Clone)]
pub struct AllPathsOutcome<Id> {
    /// Best path from the start to every finalized node (the start included).
    pub paths: HashMap<Id, Vec<Id>>,
    /// Finalized identities in finalization order.
    pub finalized: Vec<Id>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    /// Present when the policy records traces.
    pub trace: Option<SearchTrace<Id>>,
}

// `HashMap` equality needs `Id: Eq + Hash`, which a derive would not require.
impl<Id: Eq + Hash> PartialEq for AllPathsOutcome<Id> {
    fn eq(&self, other: &Self) -> bool {
        self.paths == other.paths
            && self.finalized == other.finalized
            && self.termination == other.termination
            && self.stats == other.stats
            && self.trace == other.trace
    }
}

/// Best-first search engine for graphs of type `G`.
///
/// The engine owns the frontier and explored set and clears both at the start
/// of every query, so one instance serves any number of serial queries. The
/// graph is borrowed per query: callers re-initialize node costs between
/// queries (every `g_cost` infinite, the start at 0).
#[derive(Debug)]
pub struct AStarSearcher<G: SearchGraph> {
    policy: SearchPolicy,
    frontier: BoundedFrontier<NodeId<G>>,
    explored: ExploredSet<NodeId<G>>,
    _graph: PhantomData<fn(&mut G)>,
}

impl<G: SearchGraph> AStarSearcher<G> {
    /// Create an engine from a validated policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn new(policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self {
            frontier: BoundedFrontier::new(policy.frontier_capacity),
            explored: ExploredSet::new(),
            policy,
            _graph: PhantomData,
        })
    }

    /// Create an engine with the default policy and the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `frontier_capacity` is 0.
    pub fn with_capacity(frontier_capacity: usize) -> Result<Self, SearchError> {
        Self::new(SearchPolicy {
            frontier_capacity,
            ..SearchPolicy::default()
        })
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Clear the frontier and explored set.
    pub fn reset(&mut self) {
        self.frontier.clear();
        self.explored.clear();
    }

    /// Single-target A* search from `start` to `target`.
    ///
    /// Pops the cheapest frontier node, finalizes it, and stops when it is the
    /// target or when the frontier has hit its capacity cutoff; otherwise
    /// relaxes its successors and repeats. An exhausted frontier yields an
    /// empty path.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] for invalid input: unknown start/target, a
    /// start whose `g_cost` is not 0, or a node that reports a negative or NaN
    /// edge cost or heuristic estimate.
    pub fn find_path(
        &mut self,
        graph: &mut G,
        start: &NodeId<G>,
        target: &NodeId<G>,
    ) -> Result<PathOutcome<NodeId<G>>, SearchError> {
        self.preflight(graph, start, Some(target))?;
        debug!(
            mode = SearchMode::AStar.as_str(),
            ?start,
            ?target,
            capacity = self.policy.frontier_capacity,
            "search started"
        );

        let mut stats = SearchStats::default();
        let mut events = Vec::new();

        let terminal = loop {
            let Some(current) = self.frontier.pop() else {
                break None;
            };
            self.explored.insert(current.clone());
            let mut event = self.begin_event(graph, &current, &stats)?;
            stats.expansions += 1;

            if current == *target || self.frontier.is_full() {
                self.record(&mut events, event);
                break Some(current);
            }
            self.relax(graph, &current, Some(target), &mut stats, &mut event.relaxations)?;
            self.record(&mut events, event);
        };

        let termination = match &terminal {
            None => TerminationReason::FrontierExhausted,
            Some(node) if node == target => TerminationReason::TargetReached,
            Some(_) => TerminationReason::CapacityReached,
        };
        let (path, cost) = match &terminal {
            Some(end) => (
                reconstruct_path(graph, start, end, self.explored.len())?,
                Some(lookup(graph, end)?.g_cost()),
            ),
            None => (Vec::new(), None),
        };
        stats.frontier_high_water = self.frontier.high_water();
        debug!(
            termination = termination.as_str(),
            expansions = stats.expansions,
            path_len = path.len(),
            ?cost,
            "search finished"
        );

        Ok(PathOutcome {
            path,
            cost,
            termination,
            stats,
            trace: self.finish_trace(SearchMode::AStar, events, termination, stats),
        })
    }

    /// Single-source uniform-cost sweep from `start`.
    ///
    /// Runs the same loop as [`AStarSearcher::find_path`] with no target and
    /// a zero heuristic until the frontier is empty, recording the path to
    /// every node when it is finalized. The frontier capacity still bounds
    /// how many nodes are discovered.
    ///
    /// # Errors
    ///
    /// Same invalid-input conditions as [`AStarSearcher::find_path`].
    pub fn find_all_paths(
        &mut self,
        graph: &mut G,
        start: &NodeId<G>,
    ) -> Result<AllPathsOutcome<NodeId<G>>, SearchError> {
        self.preflight(graph, start, None)?;
        debug!(
            mode = SearchMode::Dijkstra.as_str(),
            ?start,
            capacity = self.policy.frontier_capacity,
            "search started"
        );

        let mut stats = SearchStats::default();
        let mut events = Vec::new();
        let mut paths = HashMap::new();
        let mut finalized = Vec::new();

        while let Some(current) = self.frontier.pop() {
            self.explored.insert(current.clone());
            let mut event = self.begin_event(graph, &current, &stats)?;
            stats.expansions += 1;

            let path = reconstruct_path(graph, start, &current, self.explored.len())?;
            paths.insert(current.clone(), path);
            finalized.push(current.clone());
            self.relax(graph, &current, None, &mut stats, &mut event.relaxations)?;
            self.record(&mut events, event);
        }

        let termination = if self.frontier.is_full() {
            TerminationReason::CapacityReached
        } else {
            TerminationReason::FrontierExhausted
        };
        stats.frontier_high_water = self.frontier.high_water();
        debug!(
            termination = termination.as_str(),
            expansions = stats.expansions,
            finalized = finalized.len(),
            "search finished"
        );

        Ok(AllPathsOutcome {
            paths,
            finalized,
            termination,
            stats,
            trace: self.finish_trace(SearchMode::Dijkstra, events, termination, stats),
        })
    }

    /// Validate the query, clear engine state and seed the frontier with `start`.
    fn preflight(
        &mut self,
        graph: &G,
        start: &NodeId<G>,
        target: Option<&NodeId<G>>,
    ) -> Result<(), SearchError> {
        let root = lookup(graph, start)?;
        if let Some(target) = target {
            lookup(graph, target)?;
        }
        if root.g_cost() != 0.0 {
            return Err(SearchError::StartNotZeroCost {
                node: format!("{start:?}"),
                g_cost: root.g_cost(),
            });
        }

        self.reset();
        self.frontier.push(start.clone(), root.priority());
        Ok(())
    }

    fn begin_event(
        &self,
        graph: &G,
        current: &NodeId<G>,
        stats: &SearchStats,
    ) -> Result<ExpandEvent<NodeId<G>>, SearchError> {
        let node = lookup(graph, current)?;
        trace!(node = ?current, g_cost = node.g_cost(), h_cost = node.h_cost(), "expanding");
        Ok(ExpandEvent {
            order: stats.expansions,
            node: current.clone(),
            g_cost: node.g_cost(),
            h_cost: node.h_cost(),
            relaxations: Vec::new(),
        })
    }

    /// Relax every successor of `current`.
    ///
    /// A successor that is not yet in the frontier, or whose accumulated cost
    /// improves through `current`, gets `g_cost`, `h_cost` and `parent`
    /// rewritten. New nodes are pushed; frontier members are re-keyed in place.
    fn relax(
        &mut self,
        graph: &mut G,
        current: &NodeId<G>,
        target: Option<&NodeId<G>>,
        stats: &mut SearchStats,
        records: &mut Vec<RelaxRecord<NodeId<G>>>,
    ) -> Result<(), SearchError> {
        let (current_g, successors) = {
            let node = lookup(graph, current)?;
            (node.g_cost(), node.successors())
        };

        for Successor { id, edge_cost } in successors {
            if self.explored.contains(&id) {
                records.push(RelaxRecord {
                    node: id,
                    edge_cost,
                    outcome: RelaxOutcome::SkippedExplored,
                });
                continue;
            }
            if edge_cost.is_nan() || edge_cost < 0.0 {
                return Err(SearchError::InvalidEdgeCost {
                    from: format!("{current:?}"),
                    to: format!("{id:?}"),
                    cost: edge_cost,
                });
            }
            stats.relaxations += 1;

            let node = lookup_mut(graph, &id)?;
            node.search_state_mut().self_cost = edge_cost;
            let tentative = current_g + node.self_cost();
            let in_frontier = self.frontier.contains(&id);

            let outcome = if in_frontier && tentative >= node.g_cost() {
                RelaxOutcome::NotImproved
            } else if !in_frontier && self.frontier.is_full() {
                stats.refused += 1;
                RelaxOutcome::Refused
            } else {
                let h_cost = match target {
                    Some(target) => estimate(graph, &id, target)?,
                    None => 0.0,
                };
                let node = lookup_mut(graph, &id)?;
                let state = node.search_state_mut();
                state.g_cost = tentative;
                state.h_cost = h_cost;
                state.parent = Some(current.clone());
                let priority = node.priority();

                if in_frontier {
                    self.frontier.decrease_key(&id, priority);
                    RelaxOutcome::Improved
                } else {
                    self.frontier.push(id.clone(), priority);
                    RelaxOutcome::Admitted
                }
            };
            records.push(RelaxRecord {
                node: id,
                edge_cost,
                outcome,
            });
        }
        Ok(())
    }

    fn record(&self, events: &mut Vec<ExpandEvent<NodeId<G>>>, event: ExpandEvent<NodeId<G>>) {
        if self.policy.record_trace {
            events.push(event);
        }
    }

    fn finish_trace(
        &self,
        mode: SearchMode,
        expansions: Vec<ExpandEvent<NodeId<G>>>,
        termination: TerminationReason,
        stats: SearchStats,
    ) -> Option<SearchTrace<NodeId<G>>> {
        self.policy.record_trace.then(|| SearchTrace {
            mode,
            frontier_capacity: self.policy.frontier_capacity,
            expansions,
            termination,
            stats,
        })
    }
}

impl<G: SearchGraph> Default for AStarSearcher<G> {
    fn default() -> Self {
        let policy = SearchPolicy::default();
        Self {
            frontier: BoundedFrontier::new(policy.frontier_capacity),
            explored: ExploredSet::new(),
            policy,
            _graph: PhantomData,
        }
    }
}

/// Heuristic estimate from `from` to `target`, checked for sign and NaN.
fn estimate<G: SearchGraph>(
    graph: &G,
    from: &NodeId<G>,
    target: &NodeId<G>,
) -> Result<Cost, SearchError> {
    let estimate = lookup(graph, from)?.distance(lookup(graph, target)?);
    if estimate.is_nan() || estimate < 0.0 {
        return Err(SearchError::InvalidHeuristic {
            from: format!("{from:?}"),
            to: format!("{target:?}"),
            estimate,
        });
    }
    Ok(estimate)
}
