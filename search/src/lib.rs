//! Waypoint Search: generic A* and Dijkstra over caller-owned graphs.
//!
//! This crate provides the search layer for Waypoint. It depends only on
//! `waypoint_kernel` (for trace digests), never on `waypoint_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (canon, hashing)    (frontier, engine)   (graph, runner, fixtures)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] -- capability contract a searchable node implements
//! - [`SearchGraph`] -- identity-keyed node store the engine reads and writes
//! - [`BoundedFrontier`] -- capacity-bounded min-priority open list
//! - [`AStarSearcher`] -- `find_path` (A*) and `find_all_paths` (Dijkstra)
//! - [`SearchTrace`] -- opt-in expansion-event audit log
//! - [`SearchPolicy`] -- frontier capacity and trace configuration

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod trace;

#[cfg(test)]
mod testing;

pub use contract::{NodeId, SearchGraph};
pub use error::SearchError;
pub use explored::ExploredSet;
pub use frontier::{BoundedFrontier, DEFAULT_FRONTIER_CAPACITY};
pub use node::{Cost, Priority, SearchNode, SearchState, Successor};
pub use path::reconstruct_path;
pub use policy::SearchPolicy;
pub use search::{AStarSearcher, AllPathsOutcome, PathOutcome};
pub use trace::{
    ExpandEvent, RelaxOutcome, RelaxRecord, SearchMode, SearchStats, SearchTrace,
    TerminationReason,
};
