//! Proof module: canonical serialization and hashing.

pub mod canon;
pub mod hash;
