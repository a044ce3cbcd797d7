//! Waypoint Harness: a concrete graph and the caller side of a query.
//!
//! The engine in `waypoint_search` owns no graph and never initializes node
//! costs. This crate supplies both halves: [`graph::DirectedGraph`], a
//! label-keyed weighted digraph whose nodes implement the search contract,
//! and [`runner`], which resets costs, runs a query and reports labeled
//! results with a stable digest.
//!
//! The harness does NOT implement search logic; it delegates to the engine.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod fixtures;
pub mod graph;
pub mod logging;
pub mod runner;

pub use config::{load_policy, ConfigError};
pub use graph::{DirectedGraph, GraphError, GraphNode, NodeId};
pub use runner::{
    reset_costs, run_all_routes, run_route, AllRoutesReport, RouteEntry, RouteReport, RunError,
};
