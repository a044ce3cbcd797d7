//! Search policy: the engine's configuration.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::frontier::DEFAULT_FRONTIER_CAPACITY;

/// Engine configuration, fixed at construction.
///
/// Deserializes from JSON with every field optional:
/// `{"frontier_capacity": 200, "record_trace": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Admission budget per query (see [`crate::frontier::BoundedFrontier`]).
    ///
    /// This counts every node admitted to the frontier since the query
    /// started, not the nodes it holds at once. A 250-node chain reaches the
    /// default cutoff of 200 even though the frontier never holds more than
    /// one node, so treat it as a bound on work rather than on memory.
    pub frontier_capacity: usize,
    /// Record an expansion trace for every query.
    pub record_trace: bool,
}

impl SearchPolicy {
    /// Check that the engine can run with this policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `frontier_capacity` is 0: such
    /// a frontier could never admit a successor of the start node.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.frontier_capacity == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "frontier_capacity must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            frontier_capacity: DEFAULT_FRONTIER_CAPACITY,
            record_trace: false,
        }
    }
}
