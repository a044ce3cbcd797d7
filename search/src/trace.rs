//! `SearchTrace`: expansion-event audit log.
//!
//! One [`ExpandEvent`] per frontier pop, in pop order, each carrying the
//! popped node's costs and what happened to every successor. Recording is
//! opt-in via [`SearchPolicy::record_trace`](crate::policy::SearchPolicy).

use waypoint_kernel::proof::canon::canonical_json_bytes;
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_TRACE};

use crate::node::Cost;

/// Which query produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Single target, heuristic from [`SearchNode::distance`](crate::node::SearchNode::distance).
    AStar,
    /// No target, heuristic forced to 0.
    Dijkstra,
}

impl SearchMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AStar => "a_star",
            Self::Dijkstra => "dijkstra",
        }
    }
}

/// Why a query stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The target was popped from the frontier.
    TargetReached,
    /// The frontier emptied. For a single-target query the target is
    /// unreachable; for an all-paths sweep every reachable node was finalized.
    FrontierExhausted,
    /// The frontier capacity cutoff fired. A single-target query ends at the
    /// node finalized when it fired; an all-paths sweep may be incomplete.
    CapacityReached,
}

impl TerminationReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TargetReached => "target_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::CapacityReached => "capacity_reached",
        }
    }
}

/// Per-query counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier pops (every pop finalizes a node).
    pub expansions: u64,
    /// Successors considered, excluding those already explored.
    pub relaxations: u64,
    /// Successors turned away by a full frontier.
    pub refused: u64,
    pub frontier_high_water: usize,
}

/// What happened to one successor during relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxOutcome {
    /// First discovery this query; pushed onto the frontier.
    Admitted,
    /// Already in the frontier; a cheaper path re-keyed it in place.
    Improved,
    /// Already in the frontier; the new path was not cheaper.
    NotImproved,
    /// Already finalized; left alone.
    SkippedExplored,
    /// Not in the frontier and the frontier was full; left alone.
    Refused,
}

impl RelaxOutcome {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admitted => "admitted",
            Self::Improved => "improved",
            Self::NotImproved => "not_improved",
            Self::SkippedExplored => "skipped_explored",
            Self::Refused => "refused",
        }
    }
}

/// A successor with its relaxation outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct RelaxRecord<Id> {
    pub node: Id,
    pub edge_cost: Cost,
    pub outcome: RelaxOutcome,
}

/// A single frontier pop.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandEvent<Id> {
    /// Total order of frontier pops.
    pub order: u64,
    /// The finalized node.
    pub node: Id,
    pub g_cost: Cost,
    pub h_cost: Cost,
    /// Successor decisions. Empty when the pop ended the query.
    pub relaxations: Vec<RelaxRecord<Id>>,
}

impl<Id> ExpandEvent<Id> {
    #[must_use]
    pub fn f_cost(&self) -> Cost {
        self.g_cost + self.h_cost
    }
}

/// The complete audit trail of one query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTrace<Id> {
    pub mode: SearchMode,
    pub frontier_capacity: usize,
    /// Ordered expansion events (normative decision surface).
    pub expansions: Vec<ExpandEvent<Id>>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl<Id> SearchTrace<Id> {
    /// Convert to a `serde_json::Value`, rendering identities with `label`.
    #[must_use]
    pub fn to_json_value(&self, label: impl Fn(&Id) -> String) -> serde_json::Value {
        let expansions: Vec<serde_json::Value> = self
            .expansions
            .iter()
            .map(|e| expand_event_to_json(e, &label))
            .collect();
        serde_json::json!({
            "expansions": expansions,
            "metadata": {
                "frontier_capacity": self.frontier_capacity,
                "frontier_high_water": self.stats.frontier_high_water,
                "mode": self.mode.as_str(),
                "termination_reason": self.termination.as_str(),
                "total_expansions": self.stats.expansions,
                "total_refused": self.stats.refused,
                "total_relaxations": self.stats.relaxations,
            },
        })
    }

    /// Serialize to canonical JSON bytes.
    #[must_use]
    pub fn to_canonical_json_bytes(&self, label: impl Fn(&Id) -> String) -> Vec<u8> {
        canonical_json_bytes(&self.to_json_value(label))
    }

    /// Content digest of the canonical bytes.
    #[must_use]
    pub fn digest(&self, label: impl Fn(&Id) -> String) -> ContentHash {
        canonical_hash(DOMAIN_SEARCH_TRACE, &self.to_canonical_json_bytes(label))
    }
}

fn expand_event_to_json<Id>(e: &ExpandEvent<Id>, label: &impl Fn(&Id) -> String) -> serde_json::Value {
    let relaxations: Vec<serde_json::Value> = e
        .relaxations
        .iter()
        .map(|r| {
            serde_json::json!({
                "edge_cost": r.edge_cost,
                "node": label(&r.node),
                "outcome": r.outcome.as_str(),
            })
        })
        .collect();
    serde_json::json!({
        "f_cost": e.f_cost(),
        "g_cost": e.g_cost,
        "h_cost": e.h_cost,
        "node": label(&e.node),
        "order": e.order,
        "relaxations": relaxations,
    })
}
