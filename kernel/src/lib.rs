//! Waypoint Kernel: canonical bytes and content hashing.
//!
//! Everything that needs a stable digest (search traces, route reports)
//! routes through this crate so that two runs producing the same logical
//! artifact always produce the same bytes and the same hash.
//!
//! # API Surface
//!
//! - [`proof::canon::canonical_json_bytes`] -- canonical JSON serialization
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
